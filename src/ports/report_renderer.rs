//! Report Ports - Rendering the report model and writing the export artifact.

use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

use crate::domain::report::ReportModel;

/// Port for turning a report model into a standalone document.
///
/// # Contract
///
/// Implementations must:
/// - Escape every interpolated string from the model
/// - Produce a document that needs no external resources
pub trait ReportRenderer: Send + Sync {
    /// Render the model to document text.
    fn render(&self, model: &ReportModel) -> String;

    /// File extension of rendered documents, without the dot.
    fn extension(&self) -> &'static str;
}

/// Port for storing an exported report.
#[async_trait]
pub trait ReportSink: Send + Sync {
    /// Write `content` under `file_name`, returning where it was written.
    async fn write(&self, file_name: &str, content: &str) -> Result<PathBuf, ReportError>;
}

/// Errors that can occur while exporting a report.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Invalid report file name: {0}")]
    InvalidFileName(String),

    #[error("Failed to write report: {0}")]
    WriteFailed(String),
}

impl ReportError {
    pub fn write_failed(message: impl Into<String>) -> Self {
        ReportError::WriteFailed(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_error_messages() {
        assert!(ReportError::write_failed("disk full")
            .to_string()
            .contains("disk full"));
        assert!(ReportError::InvalidFileName("a/b".to_string())
            .to_string()
            .contains("a/b"));
    }
}
