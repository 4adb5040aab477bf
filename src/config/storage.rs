//! Storage configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where the state snapshot is kept
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Directory holding one file per storage key
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Key of the state snapshot
    #[serde(default = "default_state_key")]
    pub state_key: String,
}

impl StorageConfig {
    /// Validate storage configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("storage.data_dir"));
        }
        if self.state_key.is_empty() {
            return Err(ValidationError::MissingRequired("storage.state_key"));
        }
        let valid_key = !self.state_key.starts_with('.')
            && self
                .state_key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));
        if !valid_key {
            return Err(ValidationError::InvalidStateKey(self.state_key.clone()));
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            state_key: default_state_key(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./.ux-voc")
}

fn default_state_key() -> String {
    "ux_voc_state".to_string()
}
