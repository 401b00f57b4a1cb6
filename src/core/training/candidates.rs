use super::catalog::Catalog;
use super::counters::TagCounterStore;
use super::points::exploration_points;
use super::scorer::{RankOrder, rank};
use super::types::{ACCEPT_ALL, Entity, EntityScore};
use crate::error::TrainingError;
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

/// Smallest candidate batch a caller may ask for by default.
pub const DEFAULT_MIN_CANDIDATES: usize = 2;

/// Rank the whole catalog by how unexplored its tags are.
pub fn exploration_ranking(catalog: &Catalog, counters: &TagCounterStore) -> Vec<EntityScore> {
    let points = exploration_points(counters.as_map());
    rank(catalog.iter(), &points, ACCEPT_ALL, RankOrder::Descending)
}

/// Pick `quantity` entities at random from the first `window` entries of the
/// exploration ranking.
///
/// Asking for fewer than `min_quantity` is an error. A window holding fewer
/// than `quantity` entities is not: the whole window comes back unshuffled.
pub fn next_candidates<R: Rng + ?Sized>(
    catalog: &Catalog,
    counters: &TagCounterStore,
    quantity: usize,
    window: usize,
    min_quantity: usize,
    rng: &mut R,
) -> Result<Vec<Entity>, TrainingError> {
    if quantity < min_quantity {
        return Err(TrainingError::InvalidArgument(format!(
            "candidate quantity {quantity} is below the minimum of {min_quantity}"
        )));
    }

    let prefix: Vec<Entity> = exploration_ranking(catalog, counters)
        .into_iter()
        .take(window)
        .map(|scored| scored.entity)
        .collect();

    if prefix.len() < quantity {
        debug!(
            available = prefix.len(),
            quantity, window, "exploration window smaller than requested quantity"
        );
        return Ok(prefix);
    }

    let mut positions: Vec<usize> = (0..prefix.len()).collect();
    positions.shuffle(rng);

    Ok(positions
        .into_iter()
        .take(quantity)
        .map(|i| prefix[i].clone())
        .collect())
}
