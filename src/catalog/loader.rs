use crate::core::training::{Entity, TrainingSession};
use crate::error::CatalogError;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use strum::Display;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum CatalogFormat {
    Json,
    Toml,
}

impl CatalogFormat {
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            _ => Err(CatalogError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

// TOML catalogs wrap entities in `[[entity]]` tables.
#[derive(Deserialize)]
struct TomlCatalog {
    #[serde(default)]
    entity: Vec<Entity>,
}

/// Read a catalog file, picking the format from its extension. File order
/// is preserved; duplicate names pass through untouched.
pub fn load_entities(path: &Path) -> Result<Vec<Entity>, CatalogError> {
    let format = CatalogFormat::from_path(path)?;
    let raw = fs::read_to_string(path)?;
    let entities = parse_entities(&raw, format).map_err(|message| CatalogError::Parse {
        path: path.display().to_string(),
        message,
    })?;
    debug!(path = %path.display(), format = %format, entities = entities.len(), "catalog loaded");
    Ok(entities)
}

/// Fresh session over the catalog at `path`, sampling with `seed` by default.
pub fn session_from_file(path: &Path, seed: u64) -> crate::Result<TrainingSession> {
    let entities = load_entities(path)?;
    Ok(TrainingSession::with_seed(entities, seed))
}

pub fn parse_entities(raw: &str, format: CatalogFormat) -> Result<Vec<Entity>, String> {
    match format {
        CatalogFormat::Json => serde_json::from_str(raw).map_err(|e| e.to_string()),
        CatalogFormat::Toml => toml::from_str::<TomlCatalog>(raw)
            .map(|c| c.entity)
            .map_err(|e| e.to_string()),
    }
}
