//! ExportReportHandler - Command handler for writing the VOC report.

use std::path::PathBuf;
use std::sync::Arc;

use crate::application::{AppError, StateRepository};
use crate::domain::foundation::Timestamp;
use crate::domain::report::ReportComposer;
use crate::ports::{ReportRenderer, ReportSink};

/// File name prefix used when none is configured.
pub const DEFAULT_FILE_PREFIX: &str = "UX-VOC-Report";

/// Command to export the report as of `generated_at`.
#[derive(Debug, Clone)]
pub struct ExportReportCommand {
    pub generated_at: Timestamp,
}

impl ExportReportCommand {
    pub fn now() -> Self {
        Self {
            generated_at: Timestamp::now(),
        }
    }
}

/// Result of a successful export.
#[derive(Debug, Clone)]
pub struct ExportReportResult {
    pub file_name: String,
    pub path: PathBuf,
    pub bytes: usize,
}

/// Handler for exporting reports.
pub struct ExportReportHandler {
    repository: StateRepository,
    renderer: Arc<dyn ReportRenderer>,
    sink: Arc<dyn ReportSink>,
    file_prefix: String,
}

impl ExportReportHandler {
    pub fn new(
        repository: StateRepository,
        renderer: Arc<dyn ReportRenderer>,
        sink: Arc<dyn ReportSink>,
    ) -> Self {
        Self {
            repository,
            renderer,
            sink,
            file_prefix: DEFAULT_FILE_PREFIX.to_string(),
        }
    }

    /// Set the file name prefix.
    pub fn with_file_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.file_prefix = prefix.into();
        self
    }

    /// `<prefix>-<unix millis>.<extension>`
    pub fn file_name(&self, generated_at: &Timestamp) -> String {
        format!(
            "{}-{}.{}",
            self.file_prefix,
            generated_at.as_unix_millis(),
            self.renderer.extension()
        )
    }

    pub async fn handle(&self, cmd: ExportReportCommand) -> Result<ExportReportResult, AppError> {
        // 1. Load state
        let state = self.repository.load().await?;

        // 2. Compose and render
        let model = ReportComposer::compose(&state, cmd.generated_at);
        let document = self.renderer.render(&model);

        // 3. Write artifact
        let file_name = self.file_name(&cmd.generated_at);
        let path = self.sink.write(&file_name, &document).await?;

        tracing::info!(path = %path.display(), bytes = document.len(), "Report exported");

        Ok(ExportReportResult {
            file_name,
            path,
            bytes: document.len(),
        })
    }
}
