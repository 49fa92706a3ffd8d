use std::path::{Path, PathBuf};
use directories::ProjectDirs;
use anyhow::{anyhow, Context, Result};
use log::LevelFilter;

use super::core::LoaderConfig;

pub fn load_or_create_config() -> Result<LoaderConfig> {
    let config_path = get_config_path()?;

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .context("Failed to create config directory")?;
    }

    if !config_path.exists() {
        let default_config = LoaderConfig::default();
        let toml_content = toml::to_string_pretty(&default_config)?;
        std::fs::write(&config_path, toml_content)
            .context("Failed to write default config")?;
        return Ok(default_config);
    }

    load_config_from(&config_path)
}

pub fn load_config_from(path: &Path) -> Result<LoaderConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    toml::from_str(&content)
        .context("Failed to parse config file")
}

fn get_config_path() -> Result<PathBuf> {
    let proj_dirs = ProjectDirs::from("org", "objmesh", "objmesh")
        .context("Couldn't determine project directory")?;
    Ok(proj_dirs.config_dir().join("loader.toml"))
}

impl LoaderConfig {
    pub fn level_filter(&self) -> Result<LevelFilter> {
        self.log_level
            .parse()
            .map_err(|_| anyhow!("Unknown log level '{}'", self.log_level))
    }
}
