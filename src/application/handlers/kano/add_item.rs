//! AddKanoItemHandler - Command handler for adding a feature to a Kano bucket.

use crate::application::{AppError, StateRepository};
use crate::domain::kano::{KanoBucket, KanoRegistry};

/// Command to add a feature name to a bucket.
#[derive(Debug, Clone)]
pub struct AddKanoItemCommand {
    pub bucket: KanoBucket,
    pub name: String,
}

/// Result of an add attempt.
#[derive(Debug, Clone)]
pub struct AddKanoItemResult {
    /// False when the name was blank and nothing changed.
    pub added: bool,
    pub registry: KanoRegistry,
}

/// Handler for adding Kano items.
pub struct AddKanoItemHandler {
    repository: StateRepository,
}

impl AddKanoItemHandler {
    pub fn new(repository: StateRepository) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: AddKanoItemCommand) -> Result<AddKanoItemResult, AppError> {
        // 1. Load state
        let mut state = self.repository.load().await?;

        // 2. Add; blank names leave the state untouched
        let added = state.derived.kano.add(cmd.bucket, &cmd.name);
        if !added {
            tracing::debug!(bucket = %cmd.bucket, "Ignored blank Kano item");
            return Ok(AddKanoItemResult {
                added,
                registry: state.derived.kano,
            });
        }

        // 3. Persist
        self.repository.save(&state).await?;

        tracing::info!(bucket = %cmd.bucket, name = %cmd.name.trim(), "Kano item added");

        Ok(AddKanoItemResult {
            added,
            registry: state.derived.kano,
        })
    }
}
