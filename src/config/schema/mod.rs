mod core;
mod observability;
mod training;

pub use core::{CatalogConfig, Config};
pub use observability::ObservabilityConfig;
pub use training::TrainingConfig;
