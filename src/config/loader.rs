use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur when loading a deck.
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
    /// Returns the path to the deck file.
    ///
    /// Uses `~/.config/carousel/deck.toml` on Unix/macOS, or the equivalent
    /// on other platforms via `dirs::config_dir()`. Falls back to the
    /// current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("carousel").join("deck.toml")
    }

    /// Loads the deck from the default path.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads the deck from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::info!(path = %path.display(), "no deck file, using built-in deck");
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

    /// Validates the deck.
    ///
    /// Checks:
    /// - At least one slider is configured
    /// - Slider ids are non-empty and unique
    /// - Every slider has at least one slide
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sliders.is_empty() {
            return Err(ConfigError::ValidationError {
                message: "At least one slider must be configured".to_string(),
            });
        }

        let mut seen = HashSet::new();
        for slider in &self.sliders {
            if slider.id.trim().is_empty() {
                return Err(ConfigError::ValidationError {
                    message: "Slider id must not be empty".to_string(),
                });
            }
            if !seen.insert(slider.id.as_str()) {
                return Err(ConfigError::ValidationError {
                    message: format!("Duplicate slider id '{}'", slider.id),
                });
            }
            if slider.slides.is_empty() {
                return Err(ConfigError::ValidationError {
                    message: format!("Slider '{}' has no slides", slider.id),
                });
            }
        }

        Ok(())
    }

    /// Render the deck as TOML.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
