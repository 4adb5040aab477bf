//! StateRepository - Loads and persists the single application snapshot.

use std::sync::Arc;

use crate::domain::state::AppState;
use crate::ports::{KeyValueStore, StorageError};

/// Storage key used when none is configured.
pub const DEFAULT_STATE_KEY: &str = "ux_voc_state";

/// Owns the storage key under which the whole state is kept.
#[derive(Clone)]
pub struct StateRepository {
    store: Arc<dyn KeyValueStore>,
    key: String,
}

impl StateRepository {
    pub fn new(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Loads the stored state, or the default state when nothing is stored.
    ///
    /// Malformed snapshot content is discarded with a warning, never an error.
    pub async fn load(&self) -> Result<AppState, StorageError> {
        let Some(json) = self.store.get(&self.key).await? else {
            tracing::debug!(key = %self.key, "No stored state, starting fresh");
            return Ok(AppState::default());
        };

        let decoded = AppState::from_snapshot(&json);
        for item in &decoded.discarded {
            tracing::warn!(key = %self.key, discarded = %item, "Discarded unreadable state");
        }
        tracing::debug!(key = %self.key, bytes = json.len(), "State loaded");

        Ok(decoded.state)
    }

    /// Persists the full snapshot.
    pub async fn save(&self, state: &AppState) -> Result<(), StorageError> {
        let json = state
            .to_snapshot()
            .map_err(|e| StorageError::SerializationFailed(e.to_string()))?;
        self.store.set(&self.key, &json).await?;
        tracing::debug!(key = %self.key, bytes = json.len(), "State persisted");
        Ok(())
    }

    /// Removes the stored snapshot.
    pub async fn clear(&self) -> Result<(), StorageError> {
        self.store.remove(&self.key).await?;
        tracing::debug!(key = %self.key, "State removed");
        Ok(())
    }
}
