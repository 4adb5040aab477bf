//! Application error type returned by every handler.

use thiserror::Error;

use crate::ports::{ReportError, StorageError};

/// Errors surfaced by command and query handlers.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Report(#[from] ReportError),
}
