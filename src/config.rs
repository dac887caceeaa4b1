//! Configuration loading
//!
//! Reads `~/.config/suggestbox/config.toml` (or an explicit path). A missing
//! file yields defaults; a malformed one yields defaults plus a warning the
//! caller can log.

mod types;

use std::fs;
use std::path::{Path, PathBuf};

pub use types::{
    Config, DEFAULT_BASE_URL, DEFAULT_DEBOUNCE_MS, DEFAULT_PLACEHOLDER, SearchConfig, UiConfig,
};

use crate::error::SuggestError;

/// Result of loading configuration
#[derive(Debug)]
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

/// Default location of the config file
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("suggestbox").join("config.toml"))
}

/// Load configuration, falling back to defaults on any problem
pub fn load_config(path: Option<&Path>) -> ConfigResult {
    let path = match path.map(Path::to_path_buf).or_else(default_config_path) {
        Some(p) => p,
        None => {
            return ConfigResult {
                config: Config::default(),
                warning: None,
            };
        }
    };

    if !path.exists() {
        return ConfigResult {
            config: Config::default(),
            warning: None,
        };
    }

    match read_config(&path) {
        Ok(config) => ConfigResult {
            config,
            warning: None,
        },
        Err(e) => ConfigResult {
            config: Config::default(),
            warning: Some(format!("Ignoring {}: {}", path.display(), e)),
        },
    }
}

fn read_config(path: &Path) -> Result<Config, SuggestError> {
    let contents = fs::read_to_string(path)?;
    toml::from_str(&contents).map_err(|e| SuggestError::Config(e.message().to_string()))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
