//! Configuration loading from file system
//!
//! Handles loading and parsing ~/.stickypad/config.json.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, instrument, warn};

use super::types::Config;
use crate::error::StickypadError;

/// Path to the config file (~/.stickypad/config.json)
pub fn config_path() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(".stickypad"))
        .unwrap_or_else(|| PathBuf::from(".stickypad"))
        .join("config.json")
}

/// Load configuration from ~/.stickypad/config.json
///
/// Returns `Config::default()` if the file is missing, unreadable, or
/// malformed; loading never fails the caller.
#[instrument(name = "load_config")]
pub fn load_config() -> Config {
    load_config_from(&config_path())
}

pub fn load_config_from(path: &Path) -> Config {
    if !path.exists() {
        info!(path = %path.display(), "Config file not found, using defaults");
        return Config::default();
    }

    match try_load(path) {
        Ok(config) => {
            info!(path = %path.display(), "Successfully loaded config");
            config
        }
        Err(e) => {
            warn!(
                error = %e,
                user_message = %e.user_message(),
                "Failed to load config, using defaults"
            );
            Config::default()
        }
    }
}

fn try_load(path: &Path) -> Result<Config, StickypadError> {
    let contents = fs::read_to_string(path)
        .map_err(|e| StickypadError::Config(format!("{}: {}", path.display(), e)))?;
    Ok(serde_json::from_str(&contents)?)
}
