//! Tag point transforms.
//!
//! Raw counters are not comparable in magnitude across a session, so scoring
//! works on rank-normalized points instead. Positive and negative counters
//! form two independent scales anchored at zero:
//!
//! | counter | point                                          |
//! |---------|------------------------------------------------|
//! | `c > 0` | `P - (#counters > c)`, highest positive = `P`  |
//! | `c = 0` | `0`                                            |
//! | `c < 0` | `-N + (#counters < c)`, most negative = `-N`   |
//!
//! where `P`/`N` are the number of strictly positive/negative counters.
//! Points are resolved through a distinct-value table, so tied counters
//! always share one point.

use super::types::{TagCounters, TagPoints};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Rank-normalized points used to score best matches.
pub fn best_tag_points(counters: &TagCounters) -> TagPoints {
    let table = point_table(counters.values().copied());
    counters
        .iter()
        .map(|(tag, value)| (tag.clone(), table.get(value).copied().unwrap_or(0)))
        .collect()
}

/// Points that favour unexplored tags: `-|counter|`, so a zero counter scores
/// highest and strong signal of either sign scores lowest.
pub fn exploration_points(counters: &TagCounters) -> TagPoints {
    counters
        .iter()
        .map(|(tag, value)| (tag.clone(), value.saturating_abs().saturating_neg()))
        .collect()
}

fn point_table(values: impl Iterator<Item = i64>) -> HashMap<i64, i64> {
    let mut sorted: Vec<i64> = values.collect();
    sorted.sort_unstable_by(|a, b| b.cmp(a));

    let len = sorted.len();
    let positive = to_i64(sorted.iter().filter(|v| **v > 0).count());
    let negative = to_i64(sorted.iter().filter(|v| **v < 0).count());

    let mut table = HashMap::new();
    let mut greater = 0usize;
    for group in sorted.chunk_by(|a, b| a == b) {
        let value = group[0];
        let less = len - greater - group.len();
        let point = match value.cmp(&0) {
            Ordering::Greater => positive - to_i64(greater),
            Ordering::Less => -negative + to_i64(less),
            Ordering::Equal => 0,
        };
        table.insert(value, point);
        greater += group.len();
    }
    table
}

fn to_i64(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}
