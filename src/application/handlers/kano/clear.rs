//! ClearKanoHandler - Command handler for emptying Kano buckets.

use crate::application::{AppError, StateRepository};
use crate::domain::kano::{KanoBucket, KanoRegistry};

/// Command to clear one bucket, or all of them when `bucket` is `None`.
#[derive(Debug, Clone, Default)]
pub struct ClearKanoCommand {
    pub bucket: Option<KanoBucket>,
}

/// Handler for clearing Kano buckets.
pub struct ClearKanoHandler {
    repository: StateRepository,
}

impl ClearKanoHandler {
    pub fn new(repository: StateRepository) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: ClearKanoCommand) -> Result<KanoRegistry, AppError> {
        let mut state = self.repository.load().await?;

        match cmd.bucket {
            Some(bucket) => state.derived.kano.clear_bucket(bucket),
            None => state.derived.kano.clear(),
        }

        self.repository.save(&state).await?;

        tracing::info!(
            bucket = cmd.bucket.map(|b| b.key()).unwrap_or("all"),
            "Kano cleared"
        );

        Ok(state.derived.kano)
    }
}
