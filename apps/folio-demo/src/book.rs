use folio_core::{PageContentProvider, PageType};

/// Chapter titles standing in for real page content.
pub struct Book {
    titles: Vec<String>,
    index: usize,
}

impl Book {
    pub fn with_pages(count: usize) -> Self {
        Self {
            titles: (1..=count).map(|page| format!("page {page}")).collect(),
            index: 0,
        }
    }

    pub fn current_title(&self) -> &str {
        self.titles.get(self.index).map_or("<empty>", String::as_str)
    }

    pub fn title_for(&self, slot: PageType) -> Option<&str> {
        let index = match slot {
            PageType::Previous => self.index.checked_sub(1)?,
            PageType::Current => self.index,
            PageType::Next => self.index + 1,
        };
        self.titles.get(index).map(String::as_str)
    }
}

impl PageContentProvider for Book {
    fn has_next(&self) -> bool {
        self.index + 1 < self.titles.len()
    }

    fn has_previous(&self) -> bool {
        self.index > 0
    }

    fn on_page_committed(&mut self, slot: PageType) {
        match slot {
            PageType::Next if self.has_next() => self.index += 1,
            PageType::Previous if self.has_previous() => self.index -= 1,
            _ => return,
        }
        log::info!("now reading {}", self.current_title());
    }
}
