use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    title: String,
    clues: Vec<Clue>,
}

impl Category {
    pub fn new(title: impl Into<String>, clues: Vec<Clue>) -> Self {
        Self {
            title: title.into(),
            clues,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn clues(&self) -> &[Clue] {
        &self.clues
    }
}

/// The categories currently on screen. A restart replaces the whole value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    categories: Vec<Category>,
}

impl Board {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// Row count of the grid; the shortest category bounds it.
    pub fn clues_per_category(&self) -> usize {
        self.categories
            .iter()
            .map(|category| category.clues.len())
            .min()
            .unwrap_or(0)
    }

    pub fn validate_key(&self, key: CellKey) -> Result<CellKey> {
        let valid = self
            .categories
            .get(key.category)
            .is_some_and(|category| key.clue < category.clues.len());
        if valid {
            Ok(key)
        } else {
            Err(BoardError::InvalidCell(key))
        }
    }

    pub fn clue_at(&self, key: CellKey) -> Result<&Clue> {
        let key = self.validate_key(key)?;
        Ok(&self.categories[key.category].clues[key.clue])
    }

    pub fn reveal(&mut self, key: CellKey) -> Result<RevealOutcome> {
        let key = self.validate_key(key)?;
        let outcome = self.categories[key.category].clues[key.clue].reveal();
        log::trace!("reveal {}: {:?}", key, outcome);
        Ok(outcome)
    }

    /// Every body cell key, row by row.
    pub fn keys(&self) -> impl Iterator<Item = CellKey> + use<> {
        let cols = self.category_count();
        let rows = self.clues_per_category();
        (0..rows).flat_map(move |clue| (0..cols).map(move |category| CellKey::new(category, clue)))
    }
}
