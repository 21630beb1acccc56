use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

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
    /// Uses `~/.config/pictopick/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("pictopick").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    /// - Returns an error if reading, parsing, or validation fails.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
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

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - Page size is at least 1
    /// - At least one language is configured
    /// - The default language exists in the languages list
    /// - Both catalog URLs parse
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dialog.page_size == 0 {
            return Err(ConfigError::ValidationError {
                message: "dialog.page_size must be at least 1".to_string(),
            });
        }

        if self.languages.is_empty() {
            return Err(ConfigError::ValidationError {
                message: "At least one language must be configured".to_string(),
            });
        }

        let default = &self.dialog.default_language;
        if self.language(default).is_none() {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "Default language '{}' not found in configured languages",
                    default
                ),
            });
        }

        for (key, url) in [
            ("catalog.api_url", &self.catalog.api_url),
            ("catalog.image_url", &self.catalog.image_url),
        ] {
            if let Err(err) = reqwest::Url::parse(url) {
                return Err(ConfigError::ValidationError {
                    message: format!("{} '{}' is not a valid URL: {}", key, url, err),
                });
            }
        }

        Ok(())
    }
}
