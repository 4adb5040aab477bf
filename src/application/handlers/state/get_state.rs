//! GetStateHandler - Query handler returning the current state.

use crate::application::{AppError, StateRepository};
use crate::domain::state::AppState;

/// Handler for reading the stored state.
pub struct GetStateHandler {
    repository: StateRepository,
}

impl GetStateHandler {
    pub fn new(repository: StateRepository) -> Self {
        Self { repository }
    }

    pub async fn handle(&self) -> Result<AppState, AppError> {
        Ok(self.repository.load().await?)
    }
}
