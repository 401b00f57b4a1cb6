use super::Config;
use std::path::PathBuf;

impl Config {
    pub fn apply_env_overrides(&mut self) {
        if let Ok(path) = std::env::var("TAGMATCH_CATALOG")
            && !path.is_empty()
        {
            self.catalog.path = Some(PathBuf::from(path));
        }

        if let Ok(seed_str) = std::env::var("TAGMATCH_SEED")
            && let Ok(seed) = seed_str.parse::<u64>()
        {
            self.training.seed = Some(seed);
        }

        if let Ok(level) = std::env::var("TAGMATCH_LOG_LEVEL")
            && !level.is_empty()
        {
            self.observability.log_level = level;
        }

        if let Ok(workspace) = std::env::var("TAGMATCH_WORKSPACE")
            && !workspace.is_empty()
        {
            self.workspace_dir = PathBuf::from(workspace);
        }
    }
}
