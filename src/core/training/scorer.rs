use super::types::{Entity, EntityScore, TagPoints};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use strum::Display;

// RankOrder: direction of a scored ranking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RankOrder {
    #[default]
    Descending,
    Ascending,
}

/// Sum of tag points over the entity's tags. Tags missing from `points`
/// contribute nothing.
pub fn score_entity(entity: &Entity, points: &TagPoints) -> i64 {
    entity
        .tags
        .iter()
        .filter_map(|tag| points.get(tag))
        .fold(0i64, |acc, p| acc.saturating_add(*p))
}

/// Score every entity, keep those at or above `min_score`, and sort them.
/// Equal scores fall back to name order so repeated rankings are identical.
pub fn rank<'a>(
    entities: impl IntoIterator<Item = &'a Entity>,
    points: &TagPoints,
    min_score: i64,
    order: RankOrder,
) -> Vec<EntityScore> {
    let mut scored: Vec<EntityScore> = entities
        .into_iter()
        .map(|entity| (entity, score_entity(entity, points)))
        .filter(|(_, score)| *score >= min_score)
        .map(|(entity, score)| EntityScore {
            entity: entity.clone(),
            score,
        })
        .collect();

    scored.sort_by(|a, b| {
        let by_score = match order {
            RankOrder::Descending => b.score.cmp(&a.score),
            RankOrder::Ascending => a.score.cmp(&b.score),
        };
        match by_score {
            Ordering::Equal => a.entity.name.cmp(&b.entity.name),
            other => other,
        }
    });
    scored
}
