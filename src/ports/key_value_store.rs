//! Key-Value Store Port - Interface for persisting the state snapshot.
//!
//! The application stores one JSON document under a fixed key. This port
//! keeps the storage mechanics (files, memory) out of the application layer.

use async_trait::async_trait;

/// Errors that can occur during key-value storage operations
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("Failed to serialize state: {0}")]
    SerializationFailed(String),

    #[error("IO error: {0}")]
    IoError(String),
}

/// Port for string values addressed by key
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`
    ///
    /// # Returns
    /// `None` if nothing is stored under the key
    ///
    /// # Errors
    /// Returns `StorageError` if the backing store cannot be read
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value
    ///
    /// The write is whole: readers never observe a partial value.
    ///
    /// # Errors
    /// Returns `StorageError` if the write fails
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove the value under `key`. Removing a missing key is not an error.
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_error_invalid_key() {
        let err = StorageError::InvalidKey("../etc".to_string());
        assert!(err.to_string().contains("Invalid storage key"));
    }

    #[test]
    fn test_storage_error_serialization() {
        let err = StorageError::SerializationFailed("bad float".to_string());
        assert!(err.to_string().contains("serialize"));
    }
}
