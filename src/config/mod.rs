//! Server configuration
//!
//! Settings are layered, later sources winning:
//!
//! 1. Hardcoded defaults
//! 2. Config file (`--config` path, or `<config_dir>/calcdesk/config.toml` if present)
//! 3. Environment variables (`CALCDESK_HOST`, `CALCDESK_PORT`, `CALCDESK_LOG_LEVEL`)
//! 4. Command-line flags, applied by the caller

use crate::error::{Error, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

pub const ENV_HOST: &str = "CALCDESK_HOST";
pub const ENV_PORT: &str = "CALCDESK_PORT";
pub const ENV_LOG_LEVEL: &str = "CALCDESK_LOG_LEVEL";

/// Valid log levels for configuration validation.
pub const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Default location of the config file, if the platform has one
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "calcdesk", "calcdesk").map(|dirs| dirs.config_dir().join("config.toml"))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub log_level: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            log_level: None,
        }
    }
}

impl ServerConfig {
    /// Load defaults, then the config file, then the process environment
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with(path, |key| std::env::var(key).ok())
    }

    /// Like [`ServerConfig::load`], reading environment overrides through `lookup`
    pub fn load_with<F>(path: Option<&Path>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => match default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                _ => Self::default(),
            },
        };

        config.merge_env_with(lookup)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading config from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Apply environment overrides read through `lookup`
    pub fn merge_env_with<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup(ENV_HOST) {
            self.host = host;
        }

        if let Some(port) = lookup(ENV_PORT) {
            self.port = port
                .trim()
                .parse()
                .map_err(|_| Error::Config(format!("{ENV_PORT} is not a valid port: {port}")))?;
        }

        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = Some(level);
        }

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(level) = &self.log_level {
            if !VALID_LOG_LEVELS.contains(&level.to_lowercase().as_str()) {
                return Err(Error::Config(format!(
                    "Invalid log level '{}', expected one of: {}",
                    level,
                    VALID_LOG_LEVELS.join(", ")
                )));
            }
        }
        Ok(())
    }

    /// `host:port` string suitable for binding a listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
