use folio_core::{PageContentProvider, PageType};

/// A book of `count` pages with a movable cursor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FakePages {
    index: usize,
    count: usize,
    commits: Vec<PageType>,
}

impl FakePages {
    pub fn new(count: usize) -> Self {
        Self::at(0, count)
    }

    pub fn at(index: usize, count: usize) -> Self {
        Self {
            index: index.min(count.saturating_sub(1)),
            count,
            commits: Vec::new(),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn commits(&self) -> &[PageType] {
        &self.commits
    }
}

impl PageContentProvider for FakePages {
    fn has_next(&self) -> bool {
        self.index + 1 < self.count
    }

    fn has_previous(&self) -> bool {
        self.index > 0
    }

    fn on_page_committed(&mut self, slot: PageType) {
        self.commits.push(slot);
        match slot {
            PageType::Next if self.has_next() => self.index += 1,
            PageType::Previous if self.has_previous() => self.index -= 1,
            PageType::Next | PageType::Previous => {
                log::warn!("commit to {slot:?} past the end of the book at {}", self.index)
            }
            PageType::Current => {}
        }
    }
}
