use core::fmt;
use serde::{Deserialize, Serialize};

/// Identifier the trivia API assigns to a category.
pub type CategoryId = u64;

/// Address of one body cell: the category column and the clue row inside it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellKey {
    pub category: usize,
    pub clue: usize,
}

impl CellKey {
    pub const fn new(category: usize, clue: usize) -> Self {
        Self { category, clue }
    }
}

impl From<(usize, usize)> for CellKey {
    fn from((category, clue): (usize, usize)) -> Self {
        Self::new(category, clue)
    }
}

impl fmt::Display for CellKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.category, self.clue)
    }
}
