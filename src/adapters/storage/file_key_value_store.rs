//! File-based Key-Value Store Adapter
//!
//! Stores each key as a JSON file under a base directory. Writes go to a
//! temporary file that is then renamed over the target, so a crash never
//! leaves a half-written snapshot behind.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::ports::{KeyValueStore, StorageError};

/// File-based key-value storage
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    base_path: PathBuf,
}

impl FileKeyValueStore {
    /// Create a new file store with a base directory
    ///
    /// # Arguments
    /// * `base_path` - The directory holding one file per key
    ///
    /// # Example
    /// ```ignore
    /// let store = FileKeyValueStore::new("./.ux-voc");
    /// ```
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Keys become file names, so only a conservative character set is allowed
    fn validate_key(key: &str) -> Result<(), StorageError> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));
        if valid {
            Ok(())
        } else {
            Err(StorageError::InvalidKey(key.to_string()))
        }
    }

    /// Get the file path for a key
    fn key_path(&self, key: &str) -> PathBuf {
        self.base_path.join(format!("{}.json", key))
    }

    /// Get the temporary path used while writing a key
    fn temp_path(&self, key: &str) -> PathBuf {
        self.base_path.join(format!("{}.json.tmp", key))
    }

    /// Ensure the base directory exists
    async fn ensure_dir(&self) -> Result<(), StorageError> {
        fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| StorageError::IoError(e.to_string()))
    }
}

#[async_trait]
impl KeyValueStore for FileKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::validate_key(key)?;
        let path = self.key_path(key);

        match fs::read_to_string(&path).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::IoError(e.to_string())),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::validate_key(key)?;
        self.ensure_dir().await?;

        let temp = self.temp_path(key);
        let mut file = fs::File::create(&temp)
            .await
            .map_err(|e| StorageError::IoError(e.to_string()))?;
        file.write_all(value.as_bytes())
            .await
            .map_err(|e| StorageError::IoError(e.to_string()))?;
        file.sync_all()
            .await
            .map_err(|e| StorageError::IoError(e.to_string()))?;
        drop(file);

        fs::rename(&temp, self.key_path(key))
            .await
            .map_err(|e| StorageError::IoError(e.to_string()))?;

        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        Self::validate_key(key)?;

        match fs::remove_file(self.key_path(key)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::IoError(e.to_string())),
        }
    }
}
