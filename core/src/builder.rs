use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use rand::Rng;
use rand::seq::index;

use crate::*;

/// Picks `n` distinct category ids from `ids`, uniformly and without replacement.
///
/// Duplicate ids in the pool count once.
pub fn select_category_ids<R: Rng + ?Sized>(
    ids: &[CategoryId],
    n: usize,
    rng: &mut R,
) -> Result<Vec<CategoryId>> {
    let mut seen = BTreeSet::new();
    let pool: Vec<CategoryId> = ids.iter().copied().filter(|&id| seen.insert(id)).collect();

    if pool.len() < n {
        return Err(BoardError::NotEnoughCategories {
            requested: n,
            available: pool.len(),
        });
    }

    Ok(index::sample(rng, pool.len(), n)
        .into_iter()
        .map(|i| pool[i])
        .collect())
}

/// Samples `k` clues from `detail` into a fresh, fully hidden [`Category`].
pub fn build_category<R: Rng + ?Sized>(
    id: CategoryId,
    detail: &CategoryDetail,
    k: usize,
    rng: &mut R,
) -> Result<Category> {
    let available = detail.clues.len();
    if available < k {
        return Err(BoardError::NotEnoughClues {
            category: id,
            requested: k,
            available,
        });
    }

    let clues = index::sample(rng, available, k)
        .into_iter()
        .map(|i| {
            let clue = &detail.clues[i];
            Clue::new(clue.question.clone(), clue.answer.clone())
        })
        .collect();

    Ok(Category::new(detail.title.clone(), clues))
}

/// Assembles a complete board from a [`TriviaSource`].
#[derive(Clone, Debug, PartialEq)]
pub struct BoardBuilder {
    config: BoardConfig,
    seed: u64,
}

impl BoardBuilder {
    pub fn new(config: BoardConfig, seed: u64) -> Self {
        Self { config, seed }
    }

    pub fn config(&self) -> BoardConfig {
        self.config
    }

    /// Lists the category pool, samples the columns and then fetches each
    /// category in turn. Columns keep the order the ids were sampled in.
    pub async fn build<S: TriviaSource>(
        self,
        source: &S,
    ) -> core::result::Result<Board, BuildError<S::Error>> {
        use rand::SeedableRng;
        use rand::rngs::SmallRng;

        let BoardConfig {
            categories_across,
            clues_per_category,
            category_pool,
        } = self.config;
        let mut rng = SmallRng::seed_from_u64(self.seed);

        let ids = source
            .list_category_ids(category_pool)
            .await
            .map_err(BuildError::Fetch)?;
        log::debug!("category pool holds {} ids", ids.len());

        let picked = select_category_ids(&ids, categories_across, &mut rng)?;
        log::debug!("picked categories: {:?}", picked);

        let mut categories = Vec::with_capacity(picked.len());
        for id in picked {
            let detail = source.fetch_category(id).await.map_err(BuildError::Fetch)?;
            log::debug!(
                "category {} \"{}\" has {} clues",
                id,
                detail.title,
                detail.clues.len()
            );
            categories.push(build_category(id, &detail, clues_per_category, &mut rng)?);
        }

        Ok(Board::new(categories))
    }
}
