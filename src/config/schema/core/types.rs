use super::super::{ObservabilityConfig, TrainingConfig};
use directories::UserDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Workspace directory - computed from home, not serialized
    #[serde(skip)]
    pub workspace_dir: PathBuf,
    /// Path to config.toml - computed from home, not serialized
    #[serde(skip)]
    pub config_path: PathBuf,

    #[serde(default)]
    pub training: TrainingConfig,

    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Entity catalog file (.json or .toml)
    #[serde(default)]
    pub path: Option<PathBuf>,
}

pub(super) fn tagmatch_dir() -> PathBuf {
    let home = UserDirs::new().map_or_else(|| PathBuf::from("."), |u| u.home_dir().to_path_buf());
    home.join(".tagmatch")
}

impl Default for Config {
    fn default() -> Self {
        let tagmatch_dir = tagmatch_dir();

        Self {
            workspace_dir: tagmatch_dir.join("workspace"),
            config_path: tagmatch_dir.join("config.toml"),
            training: TrainingConfig::default(),
            catalog: CatalogConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }
}

impl Config {
    /// Where the training snapshot for this workspace lives.
    pub fn state_path(&self) -> PathBuf {
        self.workspace_dir.join("session.json")
    }
}
