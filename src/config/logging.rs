//! Logging configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Log output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Rust log filter directive
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Output format
    #[serde(default)]
    pub log_format: LogFormat,
}

/// Log line format
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl LoggingConfig {
    /// Validate logging configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.log_level.trim().is_empty() {
            return Err(ValidationError::InvalidLogLevel(self.log_level.clone()));
        }
        Ok(())
    }

    /// Filter directive after applying `-v` / `-q`.
    ///
    /// Verbose raises this crate to `debug`; quiet lowers everything to `error`.
    pub fn filter_directive(&self, verbose: bool, quiet: bool) -> String {
        if quiet {
            "error".to_string()
        } else if verbose {
            format!("{},ux_voc_analyzer=debug", self.log_level)
        } else {
            self.log_level.clone()
        }
    }

    pub fn is_json(&self) -> bool {
        self.log_format == LogFormat::Json
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: LogFormat::default(),
        }
    }
}

fn default_log_level() -> String {
    "warn,ux_voc_analyzer=info".to_string()
}
