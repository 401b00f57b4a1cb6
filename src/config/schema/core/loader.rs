use super::Config;
use super::types::tagmatch_dir;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

impl Config {
    pub fn load_or_init() -> Result<Self> {
        let tagmatch_dir = tagmatch_dir();
        if !tagmatch_dir.exists() {
            fs::create_dir_all(tagmatch_dir.join("workspace"))
                .context("Failed to create .tagmatch workspace directory")?;
        }
        Self::load_or_init_at(&tagmatch_dir.join("config.toml"))
    }

    /// Load `config_path`, or write defaults there when it does not exist.
    /// The workspace directory is the config file's sibling `workspace/`.
    pub fn load_or_init_at(config_path: &Path) -> Result<Self> {
        let base_dir = config_path.parent().unwrap_or_else(|| Path::new("."));
        let workspace_dir = base_dir.join("workspace");

        let mut config = if config_path.exists() {
            let contents =
                fs::read_to_string(config_path).context("Failed to read config file")?;
            let mut config: Config =
                toml::from_str(&contents).context("Failed to parse config file")?;
            config.config_path = config_path.to_path_buf();
            config.workspace_dir = workspace_dir;
            config
        } else {
            let config = Self {
                config_path: config_path.to_path_buf(),
                workspace_dir,
                ..Self::default()
            };
            config.save()?;
            config
        };

        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }
        let toml_str = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(&self.config_path, toml_str).context("Failed to write config file")?;
        Ok(())
    }
}
