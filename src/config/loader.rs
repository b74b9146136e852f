use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Largest page the product API serves in one request.
pub const MAX_LIMIT: u32 = 100;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/product-catalog/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("product-catalog").join("config.toml")
    }

    /// Loads and validates configuration from `path`.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::parse_from(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Parses `path` without validating it, so overrides can be layered on
    /// top before the final check.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML.
    pub fn parse_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The base URL is an http(s) URL
    /// - The product limit is within 1..=100
    /// - Timeouts and tick rate are non-zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        let source = &self.source;

        if !(source.base_url.starts_with("http://") || source.base_url.starts_with("https://")) {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "source.base_url must start with http:// or https://, got '{}'",
                    source.base_url
                ),
            });
        }

        if source.limit == 0 || source.limit > MAX_LIMIT {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "source.limit must be between 1 and {}, got {}",
                    MAX_LIMIT, source.limit
                ),
            });
        }

        if source.timeout_seconds == 0 || source.connect_timeout_seconds == 0 {
            return Err(ConfigError::ValidationError {
                message: "source timeouts must be greater than zero".to_string(),
            });
        }

        if self.ui.tick_rate_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "ui.tick_rate_ms must be greater than zero".to_string(),
            });
        }

        Ok(())
    }
}
