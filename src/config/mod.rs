//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `UX_VOC` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use ux_voc_analyzer::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("State kept in {}", config.storage.data_dir.display());
//! ```

mod error;
mod export;
mod logging;
mod storage;

pub use error::{ConfigError, ValidationError};
pub use export::ExportConfig;
pub use logging::{LogFormat, LoggingConfig};
pub use storage::StorageConfig;

use serde::Deserialize;
use std::path::PathBuf;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a usable config.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// State snapshot storage
    #[serde(default)]
    pub storage: StorageConfig,

    /// Report export location and naming
    #[serde(default)]
    pub export: ExportConfig,

    /// Log filter and format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present
    /// 2. Reads environment variables with `UX_VOC` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `UX_VOC__STORAGE__DATA_DIR=/var/ux` -> `storage.data_dir = /var/ux`
    /// - `UX_VOC__LOGGING__LOG_FORMAT=json` -> `logging.log_format = json`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("UX_VOC")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Apply command-line overrides on top of loaded values
    pub fn with_overrides(mut self, data_dir: Option<PathBuf>, export_dir: Option<PathBuf>) -> Self {
        if let Some(dir) = data_dir {
            self.storage.data_dir = dir;
        }
        if let Some(dir) = export_dir {
            self.export.output_dir = dir;
        }
        self
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.storage.validate()?;
        self.export.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
