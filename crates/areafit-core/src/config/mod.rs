//! Configuration management for areafit.
//!
//! Configuration is read from the platform config directory with sensible
//! defaults. It is never written back.

mod types;
mod validate;

pub use types::*;

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Classification and resize settings
    pub resize: ResizeConfig,

    /// Original/focused pairing settings
    pub pairing: PairingConfig,

    /// Output location settings
    pub output: OutputConfig,

    /// Resource limits
    pub limits: LimitsConfig,

    /// Input discovery settings
    pub processing: ProcessingConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Returns default configuration if the file doesn't exist.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse and validate configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default config file path.
    ///
    /// - macOS: ~/Library/Application Support/com.areafit.areafit/config.toml
    /// - Linux: ~/.config/areafit/config.toml
    /// - Windows: C:\Users\<User>\AppData\Roaming\areafit\config\config.toml
    ///
    /// Falls back to ~/.areafit/config.toml if directory detection fails.
    pub fn default_path() -> PathBuf {
        directories::ProjectDirs::from("com", "areafit", "areafit")
            .map(|dirs| dirs.config_dir().to_path_buf().join("config.toml"))
            .unwrap_or_else(|| {
                let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
                PathBuf::from(home).join(".areafit").join("config.toml")
            })
    }

    /// Get the resolved directory for resized outputs (with ~ expansion).
    pub fn temp_dir(&self) -> PathBuf {
        match &self.output.temp_dir {
            Some(dir) => {
                let path_str = dir.to_string_lossy();
                PathBuf::from(shellexpand::tilde(&path_str).into_owned())
            }
            None => std::env::temp_dir().join("areafit"),
        }
    }

    /// Serialize the config to a pretty TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ValidationError(e.to_string()))
    }
}
