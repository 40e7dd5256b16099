use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Seconds between ticks. Values below 1 are raised to 1.
    pub update_interval_secs: u64,
    pub title_symbol: String,
    pub max_name_width: usize,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        GeneralConfig {
            update_interval_secs: 1,
            title_symbol: "\u{2235}".to_string(),
            max_name_width: 32,
        }
    }
}

impl GeneralConfig {
    pub fn update_interval_secs(&self) -> u64 {
        self.update_interval_secs.max(1)
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl LoggingConfig {
    pub fn max_level(&self) -> tracing::Level {
        self.level.parse().unwrap_or(tracing::Level::INFO)
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("simon").join("config.toml"))
}

/// Config from the default location; a missing file is not an error.
pub fn try_load_config() -> Result<Config, ConfigError> {
    match config_path() {
        Some(path) if path.exists() => try_load_config_from_path(&path),
        _ => Ok(Config::default()),
    }
}

pub fn try_load_config_from_path(path: &Path) -> Result<Config, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
