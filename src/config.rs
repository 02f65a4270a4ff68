//! Tool configuration
//!
//! Stored as JSON under the platform config directory. A missing file means
//! defaults; a present file must parse and pass validation.

use crate::error::AppError;
use crate::search::MatchPolicy;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Fuzzy ranking constants
    pub policy: MatchPolicy,
}

impl Config {
    pub fn validate(&self) -> Result<(), AppError> {
        self.policy.validate()
    }
}

/// Get the path to the default configuration file
pub fn config_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir().context("Cannot determine config directory")?;

    Ok(config_dir.join("advisory-search").join("config.json"))
}

/// Load configuration from `path`, or from the default location
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => config_path()?,
    };

    // If file doesn't exist, return default config
    if !path.exists() {
        debug!("No config at {}, using defaults", path.display());
        return Ok(Config::default());
    }

    let data = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;

    let config: Config = serde_json::from_str(&data)
        .map_err(|e| AppError::ParseError(format!("{}: {}", path.display(), e)))?;

    config.validate()?;
    debug!("Loaded config from {}: {:?}", path.display(), config.policy);

    Ok(config)
}
