use alloc::vec::Vec;

use crate::{CategoryDetail, CategoryId};

/// Where boards get their categories and clues from.
///
/// The browser build talks HTTP to the trivia API; tests use in-memory
/// fixtures. Calls are awaited one at a time and never retried.
#[allow(async_fn_in_trait)]
pub trait TriviaSource {
    type Error;

    /// Identifiers of up to `count` categories to sample the board from.
    async fn list_category_ids(&self, count: usize) -> Result<Vec<CategoryId>, Self::Error>;

    /// Title and full clue list of one category.
    async fn fetch_category(&self, id: CategoryId) -> Result<CategoryDetail, Self::Error>;
}
