//! Report export configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where exported reports are written
#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    /// Output directory for exported reports
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// File name prefix; the timestamp and extension are appended
    #[serde(default = "default_file_prefix")]
    pub file_prefix: String,
}

impl ExportConfig {
    /// Validate export configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.output_dir.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("export.output_dir"));
        }
        if self.file_prefix.trim().is_empty() {
            return Err(ValidationError::MissingRequired("export.file_prefix"));
        }
        if self.file_prefix.contains(['/', '\\']) || self.file_prefix.starts_with('.') {
            return Err(ValidationError::InvalidFilePrefix(self.file_prefix.clone()));
        }
        Ok(())
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            file_prefix: default_file_prefix(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_file_prefix() -> String {
    "UX-VOC-Report".to_string()
}
