//! ResetStateHandler - Command handler discarding all stored state.

use crate::application::{AppError, StateRepository};

/// Handler for resetting to the default state.
pub struct ResetStateHandler {
    repository: StateRepository,
}

impl ResetStateHandler {
    pub fn new(repository: StateRepository) -> Self {
        Self { repository }
    }

    pub async fn handle(&self) -> Result<(), AppError> {
        self.repository.clear().await?;
        tracing::info!(key = self.repository.key(), "State reset");
        Ok(())
    }
}
