//! In-Memory Key-Value Store Adapter
//!
//! Keeps values in memory. Useful for testing and development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::ports::{KeyValueStore, StorageError};

/// In-memory key-value storage
#[derive(Debug, Clone, Default)]
pub struct InMemoryKeyValueStore {
    values: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryKeyValueStore {
    /// Create a new in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with one value
    pub fn with_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut values = HashMap::new();
        values.insert(key.into(), value.into());
        Self {
            values: Arc::new(RwLock::new(values)),
        }
    }

    /// Get the number of stored keys
    pub async fn len(&self) -> usize {
        self.values.read().await.len()
    }

    /// Clear all stored data (useful for tests)
    pub async fn clear(&self) {
        self.values.write().await.clear();
    }
}

#[async_trait]
impl KeyValueStore for InMemoryKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.values.write().await.remove(key);
        Ok(())
    }
}
