//! Configuration for termform.
//!
//! The form itself is fixed; the only settings are for the log file,
//! which is not written unless enabled here. They are read from `~/.termform/config.toml` when it exists:
//!
//! ```toml
//! [log]
//! enabled = true
//! # trace, debug, info, warn, error, or a tracing filter directive
//! level = "debug"
//! # Defaults to ~/.termform/termform.log
//! file = "/tmp/termform.log"
//! ```

use std::fs;
use std::io;
use std::path::PathBuf;
use serde::Deserialize;
use thiserror::Error;

/// Directory under the home directory holding config and log
const APP_DIR: &str = ".termform";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Main configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Log settings
    pub log: LogConfig,
}

/// Log file configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub enabled: bool,
    pub level: String,
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".to_string(),
            file: None,
        }
    }
}

impl Config {
    /// Load configuration from file; a missing file yields the defaults
    pub fn load() -> Result<Self, ConfigError> {
        match Self::get_config_path() {
            Some(path) if path.exists() => {
                let content = fs::read_to_string(&path)
                    .map_err(|source| ConfigError::Read { path, source })?;
                Self::from_toml(&content)
            }
            _ => Ok(Self::default()),
        }
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Get config file path
    fn get_config_path() -> Option<PathBuf> {
        home_dir().map(|home| home.join(APP_DIR).join("config.toml"))
    }
}

impl LogConfig {
    /// Where log lines go
    pub fn path(&self) -> PathBuf {
        self.file
            .clone()
            .or_else(|| home_dir().map(|home| home.join(APP_DIR).join("termform.log")))
            .unwrap_or_else(|| PathBuf::from("termform.log"))
    }
}

// Get home directory
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("USERPROFILE")
        .or_else(|| std::env::var_os("HOME"))
        .map(PathBuf::from)
}
