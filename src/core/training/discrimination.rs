use super::types::EntityScore;
use crate::error::TrainingError;

/// Gap between the average score of the top `k` ranked entities and the
/// average of everything ranked after them, using floor division.
///
/// `ranking` must already be sorted best first. `k` must leave both
/// partitions non-empty.
pub fn discrimination_level(ranking: &[EntityScore], k: usize) -> Result<i64, TrainingError> {
    if k == 0 || k >= ranking.len() {
        return Err(TrainingError::InvalidArgument(format!(
            "discrimination top count {k} must be between 1 and {}",
            ranking.len().saturating_sub(1)
        )));
    }
    let (top, rest) = ranking.split_at(k);
    Ok(floor_average(top) - floor_average(rest))
}

fn floor_average(scores: &[EntityScore]) -> i64 {
    let total = scores
        .iter()
        .fold(0i64, |acc, s| acc.saturating_add(s.score));
    let count = i64::try_from(scores.len()).unwrap_or(i64::MAX).max(1);
    total.div_euclid(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::training::types::Entity;

    fn ranking(scores: &[i64]) -> Vec<EntityScore> {
        scores
            .iter()
            .enumerate()
            .map(|(i, score)| EntityScore {
                entity: Entity::new(format!("e{i}"), "", Vec::<String>::new()),
                score: *score,
            })
            .collect()
    }

    #[test]
    fn gap_between_top_and_rest() {
        let r = ranking(&[6, 4, 1, 1, 0]);
        // top = (6 + 4) / 2 = 5, rest = 2 / 3 = 0
        assert_eq!(discrimination_level(&r, 2).unwrap(), 5);
    }

    #[test]
    fn averages_floor_toward_negative_infinity() {
        let r = ranking(&[1, -1, -2]);
        // top = 1, rest = -3 / 2 floors to -2
        assert_eq!(discrimination_level(&r, 1).unwrap(), 3);
    }

    #[test]
    fn flat_ranking_has_no_discrimination() {
        let r = ranking(&[2, 2, 2, 2]);
        assert_eq!(discrimination_level(&r, 1).unwrap(), 0);
    }

    #[test]
    fn zero_k_is_invalid() {
        let r = ranking(&[3, 2, 1]);
        assert!(matches!(
            discrimination_level(&r, 0),
            Err(TrainingError::InvalidArgument(_))
        ));
    }

    #[test]
    fn k_covering_whole_ranking_is_invalid() {
        let r = ranking(&[3, 2, 1]);
        assert!(discrimination_level(&r, 3).is_err());
        assert!(discrimination_level(&r, 10).is_err());
        assert!(discrimination_level(&r, 2).is_ok());
    }

    #[test]
    fn empty_ranking_is_invalid() {
        assert!(discrimination_level(&[], 1).is_err());
    }
}
