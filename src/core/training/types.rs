use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum::Display;

// Entity: a taggable catalog item, immutable once loaded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub name: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Entity {
    pub fn new<I, S>(name: impl Into<String>, url: impl Into<String>, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            url: url.into(),
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }
}

// EntityScore: transient ranking result, produced fresh per query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityScore {
    pub entity: Entity,
    pub score: i64,
}

// Verdict: which way a selection moves an entity's tag counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Verdict {
    Liked,
    Disliked,
}

impl Verdict {
    pub fn increment(self) -> i64 {
        match self {
            Self::Liked => 1,
            Self::Disliked => -1,
        }
    }
}

// TagCounters: tag -> running signed sum of verdicts (BTreeMap for stable ordering)
pub type TagCounters = BTreeMap<String, i64>;

// TagPoints: tag -> rank-normalized point value, derived on demand
pub type TagPoints = BTreeMap<String, i64>;

/// Threshold that keeps every entity in a ranking.
pub const ACCEPT_ALL: i64 = i64::MIN;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verdict_increments_are_opposite() {
        assert_eq!(Verdict::Liked.increment(), 1);
        assert_eq!(Verdict::Disliked.increment(), -1);
        assert_eq!(
            Verdict::Liked.increment() + Verdict::Disliked.increment(),
            0
        );
    }

    #[test]
    fn verdict_displays_snake_case() {
        assert_eq!(Verdict::Liked.to_string(), "liked");
        assert_eq!(Verdict::Disliked.to_string(), "disliked");
    }

    #[test]
    fn entity_defaults_missing_url_and_tags() {
        let entity: Entity = serde_json::from_str(r#"{"name":"solo"}"#).unwrap();
        assert_eq!(entity.name, "solo");
        assert!(entity.url.is_empty());
        assert!(entity.tags.is_empty());
    }
}
