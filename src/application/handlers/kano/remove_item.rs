//! RemoveKanoItemHandler - Command handler for removing a Kano item by position.

use crate::application::{AppError, StateRepository};
use crate::domain::kano::{KanoBucket, KanoRegistry};

/// Command to remove the item at `index` (zero-based) from a bucket.
#[derive(Debug, Clone)]
pub struct RemoveKanoItemCommand {
    pub bucket: KanoBucket,
    pub index: usize,
}

/// Result of a removal attempt.
#[derive(Debug, Clone)]
pub struct RemoveKanoItemResult {
    /// The removed name, or `None` when the index was out of range.
    pub removed: Option<String>,
    pub registry: KanoRegistry,
}

/// Handler for removing Kano items.
pub struct RemoveKanoItemHandler {
    repository: StateRepository,
}

impl RemoveKanoItemHandler {
    pub fn new(repository: StateRepository) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: RemoveKanoItemCommand,
    ) -> Result<RemoveKanoItemResult, AppError> {
        // 1. Load state
        let mut state = self.repository.load().await?;

        // 2. Remove; an out-of-range index changes nothing
        let removed = state.derived.kano.remove(cmd.bucket, cmd.index);
        let Some(name) = removed else {
            tracing::warn!(
                bucket = %cmd.bucket,
                index = cmd.index,
                len = state.derived.kano.bucket(cmd.bucket).len(),
                "Ignored Kano removal with no item at index"
            );
            return Ok(RemoveKanoItemResult {
                removed: None,
                registry: state.derived.kano,
            });
        };

        // 3. Persist
        self.repository.save(&state).await?;

        tracing::info!(bucket = %cmd.bucket, name = %name, "Kano item removed");

        Ok(RemoveKanoItemResult {
            removed: Some(name),
            registry: state.derived.kano,
        })
    }
}
