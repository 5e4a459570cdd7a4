//! Configuration for waypath (stored in ~/.config/waypath/config.toml)

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::bail_invalid;
use crate::error::{Result, WaypathError};
use crate::graph::DEFAULT_NEAREST_LIMIT;
use crate::table::DEFAULT_CAPACITY;

const CONFIG_DIR: &str = "waypath";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "WAYPATH_CONFIG_DIR";

fn default_index_capacity() -> usize {
    DEFAULT_CAPACITY
}

fn default_nearest_limit() -> usize {
    DEFAULT_NEAREST_LIMIT
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Edge-list file loaded when no `--graph` flag is given
    #[serde(default)]
    pub graph: Option<PathBuf>,

    /// Initial bucket count of the node index
    #[serde(default = "default_index_capacity")]
    pub index_capacity: usize,

    /// Number of destinations returned by nearest queries
    #[serde(default = "default_nearest_limit")]
    pub nearest_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            graph: None,
            index_capacity: default_index_capacity(),
            nearest_limit: default_nearest_limit(),
        }
    }
}

impl Config {
    fn config_path() -> Result<PathBuf> {
        // Allow environment variable override for testing
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    WaypathError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load the user configuration, falling back to defaults when no file exists
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            WaypathError::Other(format!(
                "failed to read config from {}: {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            WaypathError::Other(format!(
                "failed to parse config from {}: {}",
                path.display(),
                e
            ))
        })?;

        // InvalidValue stays intact; only its context gains the file path
        config.validate().map_err(|e| match e {
            WaypathError::InvalidValue { context, value } => WaypathError::InvalidValue {
                context: format!("{} in {}", context, path.display()),
                value,
            },
            other => other,
        })?;
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.index_capacity == 0 {
            bail_invalid!("index_capacity", "must be at least 1");
        }
        if self.nearest_limit == 0 {
            bail_invalid!("nearest_limit", "must be at least 1");
        }
        Ok(())
    }

    /// Returns the source description for display purposes
    pub fn source_display() -> String {
        if std::env::var(CONFIG_DIR_ENV_VAR).is_ok() {
            "custom config directory".to_string()
        } else {
            "~/.config/waypath/config.toml".to_string()
        }
    }
}
