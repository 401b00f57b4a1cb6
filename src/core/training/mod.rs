// Tag-counter preference learning: catalog, counters, rank-normalized tag
// points, scoring, exploration sampling and the discrimination metric.

pub mod candidates;
pub mod catalog;
pub mod counters;
pub mod discrimination;
pub mod points;
pub mod scorer;
pub mod session;
pub mod store;
pub mod types;

pub use catalog::Catalog;
pub use counters::TagCounterStore;
pub use scorer::RankOrder;
pub use session::{DEFAULT_SEED, SharedTrainingSession, TrainingSession};
pub use store::{JsonFileStore, Snapshot, SnapshotStore};
pub use types::*;
