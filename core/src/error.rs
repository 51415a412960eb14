use thiserror::Error;

use crate::{CategoryId, CellKey};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("No clue at cell {0}")]
    InvalidCell(CellKey),
    #[error("Cell belongs to a board that has been replaced")]
    StaleBoard,
    #[error("Need {requested} categories but the API only offered {available}")]
    NotEnoughCategories { requested: usize, available: usize },
    #[error("Category {category} has {available} clues, {requested} are needed")]
    NotEnoughClues {
        category: CategoryId,
        requested: usize,
        available: usize,
    },
}

pub type Result<T> = core::result::Result<T, BoardError>;

/// Failure while assembling a fresh board from a [`TriviaSource`](crate::TriviaSource).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BuildError<E> {
    #[error("Could not fetch trivia data: {0}")]
    Fetch(E),
    #[error(transparent)]
    Board(#[from] BoardError),
}
