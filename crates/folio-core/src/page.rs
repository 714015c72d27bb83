/// Logical role of a page during a transition. Mapping a role to actual
/// content is the pagination provider's job.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageType {
    Previous,
    Current,
    Next,
}

/// Which way a gesture is turning the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    Next,
    Previous,
    #[default]
    None,
}

impl Direction {
    /// The page that becomes current once a turn in this direction commits.
    pub fn target_page(self) -> Option<PageType> {
        match self {
            Direction::Next => Some(PageType::Next),
            Direction::Previous => Some(PageType::Previous),
            Direction::None => None,
        }
    }

    pub fn is_none(self) -> bool {
        self == Direction::None
    }
}
