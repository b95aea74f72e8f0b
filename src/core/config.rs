//! core::config
//!
//! Configuration schema, loading, and path resolution.
//!
//! # Locations
//!
//! The config file is searched in order (first hit wins):
//!
//! 1. `--config <path>` if given (missing file is an error here)
//! 2. `$IMGSWEEP_CONFIG` if set
//! 3. `./imgsweep.toml` if present
//!
//! No config found means defaults are used; that is not an error.
//!
//! # Precedence
//!
//! Path values are resolved in this order (later overrides earlier):
//!
//! 1. Built-in defaults (`./items.lua`, `./imgs`)
//! 2. Config file
//! 3. CLI flags
//!
//! # Example
//!
//! ```toml
//! items_file = "data/items.lua"
//! images_dir = "assets/imgs"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default path of the definition file.
pub const DEFAULT_ITEMS_FILE: &str = "items.lua";

/// Default path of the asset directory.
pub const DEFAULT_IMAGES_DIR: &str = "imgs";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file does not exist: {path}")]
    NotFound { path: PathBuf },

    #[error("failed to read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    Parse { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// On-disk configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SweepConfig {
    /// Definition file to extract references from.
    pub items_file: Option<PathBuf>,

    /// Asset directory to reconcile.
    pub images_dir: Option<PathBuf>,
}

impl SweepConfig {
    /// Load configuration from the standard locations.
    ///
    /// An `explicit` path comes from the `--config` flag and must exist.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit path is missing, or if any found
    /// config file cannot be read or parsed.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(ConfigError::NotFound {
                    path: path.to_path_buf(),
                });
            }
            return Self::read(path);
        }

        if let Ok(env_path) = std::env::var("IMGSWEEP_CONFIG") {
            let path = PathBuf::from(env_path);
            if path.exists() {
                return Self::read(&path);
            }
        }

        let local = Path::new("imgsweep.toml");
        if local.exists() {
            return Self::read(local);
        }

        Ok(Self::default())
    }

    /// Read and parse a config file.
    fn read(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Self = toml::from_str(&contents).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any configured path is empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(items_file) = &self.items_file {
            if items_file.as_os_str().is_empty() {
                return Err(ConfigError::InvalidValue(
                    "items_file cannot be empty".to_string(),
                ));
            }
        }
        if let Some(images_dir) = &self.images_dir {
            if images_dir.as_os_str().is_empty() {
                return Err(ConfigError::InvalidValue(
                    "images_dir cannot be empty".to_string(),
                ));
            }
        }
        Ok(())
    }
}

/// Concrete paths for a run, after precedence is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Definition file to extract references from.
    pub items_file: PathBuf,

    /// Asset directory to reconcile.
    pub images_dir: PathBuf,
}

impl Settings {
    /// Resolve concrete paths from CLI flags and loaded config.
    ///
    /// CLI flags beat config values beat built-in defaults.
    pub fn resolve(
        config: &SweepConfig,
        items_flag: Option<PathBuf>,
        images_flag: Option<PathBuf>,
    ) -> Self {
        Self {
            items_file: items_flag
                .or_else(|| config.items_file.clone())
                .unwrap_or_else(|| PathBuf::from(DEFAULT_ITEMS_FILE)),
            images_dir: images_flag
                .or_else(|| config.images_dir.clone())
                .unwrap_or_else(|| PathBuf::from(DEFAULT_IMAGES_DIR)),
        }
    }
}
