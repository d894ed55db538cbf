//! Configuration for Dayplan.
//!
//! Loaded from `.dayplan.yml` in the current directory, then
//! `~/.config/dayplan/dayplan.yml`, then defaults. The only setting is
//! where the task file lives; everything else the engine needs arrives
//! through its API.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{DayplanError, Result};
use crate::storage::JsonFileGateway;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Storage settings.
    pub storage: StorageConfig,
}

/// Storage settings.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Explicit path to the task file. Defaults to the platform data
    /// directory when unset.
    #[serde(rename = "data-file")]
    pub data_file: Option<PathBuf>,
}

impl StorageConfig {
    /// Resolve the task file path, falling back to
    /// `<data dir>/dayplan/tasks.json`, or `./tasks.json` when the
    /// platform exposes no data directory.
    pub fn resolve_data_file(&self) -> PathBuf {
        if let Some(path) = &self.data_file {
            return path.clone();
        }
        dirs::data_dir()
            .map(|dir| dir.join("dayplan").join("tasks.json"))
            .unwrap_or_else(|| PathBuf::from("tasks.json"))
    }
}

impl Config {
    /// Load configuration with fallback chain.
    ///
    /// Search order:
    /// 1. Explicit path if provided
    /// 2. .dayplan.yml in current directory
    /// 3. ~/.config/dayplan/dayplan.yml
    /// 4. Defaults
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        if let Some(path) = config_path {
            return Self::load_from_file(path);
        }

        let project_config = PathBuf::from(".dayplan.yml");
        if project_config.exists() {
            match Self::load_from_file(&project_config) {
                Ok(config) => {
                    log::info!("Loaded config from .dayplan.yml");
                    return Ok(config);
                }
                Err(e) => {
                    log::warn!("Failed to load .dayplan.yml: {}", e);
                }
            }
        }

        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("dayplan").join("dayplan.yml");
            if user_config.exists() {
                match Self::load_from_file(&user_config) {
                    Ok(config) => {
                        log::info!("Loaded config from {}", user_config.display());
                        return Ok(config);
                    }
                    Err(e) => {
                        log::warn!("Failed to load {}: {}", user_config.display(), e);
                    }
                }
            }
        }

        log::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| DayplanError::Config(format!("{}: {}", path.as_ref().display(), e)))
    }

    /// Build the persistence gateway this configuration points at.
    pub fn gateway(&self) -> JsonFileGateway {
        JsonFileGateway::new(self.storage.resolve_data_file())
    }
}
