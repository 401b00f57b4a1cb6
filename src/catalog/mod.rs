//! Loading entity catalogs from disk. The training core only ever sees the
//! resulting `Vec<Entity>`.

mod loader;

pub use loader::{CatalogFormat, load_entities, parse_entities, session_from_file};
