//! Configuration module for chatter.

use serde::Deserialize;
use std::path::Path;

use crate::{ChatterError, Result};

/// Message storage configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Directory where persisted message units are written.
    #[serde(default = "default_message_dir")]
    pub message_dir: String,
}

fn default_message_dir() -> String {
    "data/messages".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            message_dir: default_message_dir(),
        }
    }
}

/// Session configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Sender substituted for persisted units that lack one.
    #[serde(default = "default_fallback_sender")]
    pub fallback_sender: String,
}

fn default_fallback_sender() -> String {
    "unknown".to_string()
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            fallback_sender: default_fallback_sender(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Path to the log file.
    #[serde(default = "default_log_file")]
    pub file: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_file() -> String {
    "logs/chatter.log".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: default_log_file(),
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Message storage settings.
    #[serde(default)]
    pub storage: StorageConfig,
    /// Session settings.
    #[serde(default)]
    pub session: SessionConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ChatterError::Io)?;
        Self::parse(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| ChatterError::Config(format!("config parse error: {e}")))
    }
}
