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
    /// Uses `~/.config/filterpane/config.toml` on Unix/macOS, or the
    /// platform equivalent via `dirs::config_dir()`. Falls back to the
    /// current directory if no config dir is available.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("filterpane").join("config.toml")
    }

    /// Loads configuration from the default config file.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    /// - Returns an error if reading, parsing, or validation fails.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();

        if !path.exists() {
            return Ok(Config::default());
        }

        Self::load_from(&path)
    }

    /// Loads configuration from an explicit path (the `--config` flag).
    ///
    /// Unlike [`Config::load`], a missing file is an error here: the user
    /// named the path, so silently falling back would hide a typo.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
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
    /// - Every option list is non-empty
    /// - Labels within a list are unique
    /// - Every color swatch parses as `#RRGGBB`
    /// - The price ceiling is nonzero
    pub fn validate(&self) -> Result<(), ConfigError> {
        let opts = &self.options;

        if opts.categories.is_empty() {
            return Err(ConfigError::ValidationError {
                message: "At least one category must be configured".to_string(),
            });
        }

        if opts.sizes.is_empty() {
            return Err(ConfigError::ValidationError {
                message: "At least one size must be configured".to_string(),
            });
        }

        if opts.colors.is_empty() {
            return Err(ConfigError::ValidationError {
                message: "At least one color must be configured".to_string(),
            });
        }

        check_unique("category", opts.categories.iter())?;
        check_unique("size", opts.sizes.iter())?;
        check_unique("color", opts.colors.iter().map(|c| &c.name))?;

        for color in &opts.colors {
            if color.rgb().is_none() {
                return Err(ConfigError::ValidationError {
                    message: format!(
                        "Color '{}' has invalid swatch '{}' (expected #RRGGBB)",
                        color.name, color.swatch
                    ),
                });
            }
        }

        if opts.price_ceiling == 0 {
            return Err(ConfigError::ValidationError {
                message: "price_ceiling must be at least 1".to_string(),
            });
        }

        Ok(())
    }
}

fn check_unique<'a>(
    kind: &str,
    labels: impl Iterator<Item = &'a String>,
) -> Result<(), ConfigError> {
    let mut seen: Vec<&str> = Vec::new();
    for label in labels {
        if seen.contains(&label.as_str()) {
            return Err(ConfigError::ValidationError {
                message: format!("Duplicate {kind} label '{label}'"),
            });
        }
        seen.push(label);
    }
    Ok(())
}
