pub mod schema;

pub use schema::{CatalogConfig, Config, ObservabilityConfig, TrainingConfig};
