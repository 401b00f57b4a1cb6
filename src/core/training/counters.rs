use super::catalog::Catalog;
use super::types::{TagCounters, Verdict};
use tracing::warn;

/// Signed per-tag counters. The key set is fixed at construction to the
/// catalog's tags and never grows or shrinks afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagCounterStore {
    counters: TagCounters,
}

impl TagCounterStore {
    pub fn for_catalog(catalog: &Catalog) -> Self {
        let counters = catalog
            .tags()
            .into_iter()
            .map(|tag| (tag.to_owned(), 0))
            .collect();
        Self { counters }
    }

    pub fn get(&self, tag: &str) -> Option<i64> {
        self.counters.get(tag).copied()
    }

    pub fn as_map(&self) -> &TagCounters {
        &self.counters
    }

    pub fn len(&self) -> usize {
        self.counters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counters.is_empty()
    }

    /// Move every tag of one entity by the verdict's increment.
    pub fn apply<S: AsRef<str>>(&mut self, tags: &[S], verdict: Verdict) {
        let delta = verdict.increment();
        for tag in tags {
            if let Some(counter) = self.counters.get_mut(tag.as_ref()) {
                *counter = counter.saturating_add(delta);
            }
        }
    }

    pub fn reset(&mut self) {
        for counter in self.counters.values_mut() {
            *counter = 0;
        }
    }

    /// Overwrite counters from a saved map. Tags the store does not know are
    /// skipped; known tags absent from `saved` are set to zero. Returns the
    /// number of skipped tags.
    pub fn restore(&mut self, saved: &TagCounters) -> usize {
        self.reset();
        let mut skipped = 0;
        for (tag, value) in saved {
            match self.counters.get_mut(tag) {
                Some(counter) => *counter = *value,
                None => {
                    warn!(tag = %tag, "saved counter for unknown tag ignored");
                    skipped += 1;
                }
            }
        }
        skipped
    }
}
