use super::types::Entity;
use std::collections::{BTreeMap, BTreeSet, HashSet};
use tracing::warn;

/// Immutable set of taggable entities keyed by unique name.
///
/// Iteration follows name order so every ranking built on top of the
/// catalog is reproducible.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entities: BTreeMap<String, Entity>,
}

impl Catalog {
    /// Build a catalog from an externally supplied list. A repeated name
    /// replaces the earlier entry; repeated tags within one entity collapse.
    pub fn new(entities: impl IntoIterator<Item = Entity>) -> Self {
        let mut map = BTreeMap::new();
        for mut entity in entities {
            let mut seen = HashSet::new();
            entity.tags.retain(|tag| seen.insert(tag.clone()));
            let name = entity.name.clone();
            if map.insert(name.clone(), entity).is_some() {
                warn!(name = %name, "duplicate entity name in catalog, keeping last");
            }
        }
        Self { entities: map }
    }

    pub fn get(&self, name: &str) -> Option<&Entity> {
        self.entities.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entities.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.values()
    }

    /// Every distinct tag carried by at least one entity.
    pub fn tags(&self) -> BTreeSet<&str> {
        self.entities
            .values()
            .flat_map(|e| e.tags.iter().map(String::as_str))
            .collect()
    }
}
