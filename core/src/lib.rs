#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use api::*;
pub use board::*;
pub use builder::*;
pub use error::*;
pub use reveal::*;
pub use session::*;
pub use source::*;
pub use types::*;

mod api;
mod board;
mod builder;
mod error;
mod reveal;
mod session;
mod source;
mod types;

/// Base URL of the public trivia API the board is built from.
pub const DEFAULT_API_BASE: &str = "https://jservice.io/api";

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Number of category columns on the board.
    pub categories_across: usize,
    /// Number of clue rows under each category.
    pub clues_per_category: usize,
    /// How many category summaries are requested to sample columns from.
    pub category_pool: usize,
}

impl BoardConfig {
    pub const DEFAULT_CATEGORIES_ACROSS: usize = 6;
    pub const DEFAULT_CLUES_PER_CATEGORY: usize = 5;
    pub const DEFAULT_CATEGORY_POOL: usize = 100;

    pub const fn new_unchecked(
        categories_across: usize,
        clues_per_category: usize,
        category_pool: usize,
    ) -> Self {
        Self {
            categories_across,
            clues_per_category,
            category_pool,
        }
    }

    pub fn new(categories_across: usize, clues_per_category: usize) -> Self {
        let categories_across = categories_across.max(1);
        let clues_per_category = clues_per_category.max(1);
        let category_pool = Self::DEFAULT_CATEGORY_POOL.max(categories_across);
        Self::new_unchecked(categories_across, clues_per_category, category_pool)
    }

    pub const fn total_cells(&self) -> usize {
        self.categories_across.saturating_mul(self.clues_per_category)
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::new_unchecked(
            Self::DEFAULT_CATEGORIES_ACROSS,
            Self::DEFAULT_CLUES_PER_CATEGORY,
            Self::DEFAULT_CATEGORY_POOL,
        )
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_six_by_five() {
        let config = BoardConfig::default();

        assert_eq!(config.categories_across, 6);
        assert_eq!(config.clues_per_category, 5);
        assert_eq!(config.category_pool, 100);
        assert_eq!(config.total_cells(), 30);
    }

    #[test]
    fn new_clamps_to_at_least_one_cell() {
        let config = BoardConfig::new(0, 0);

        assert_eq!(config.categories_across, 1);
        assert_eq!(config.clues_per_category, 1);
    }

    #[test]
    fn pool_grows_with_wide_boards() {
        let config = BoardConfig::new(150, 5);

        assert_eq!(config.category_pool, 150);
    }
}
