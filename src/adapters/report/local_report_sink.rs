//! Local filesystem report sink.
//!
//! Writes exported reports into a single output directory using the
//! write-to-temp-then-rename pattern, so a reader never sees a partial file.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::ports::{ReportError, ReportSink};

/// Writes reports into `output_dir`.
#[derive(Debug, Clone)]
pub struct LocalReportSink {
    output_dir: PathBuf,
}

impl LocalReportSink {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// File names must stay inside the output directory.
    fn validate_file_name(file_name: &str) -> Result<(), ReportError> {
        let valid = !file_name.is_empty()
            && !file_name.starts_with('.')
            && !file_name.contains(['/', '\\'])
            && !file_name.contains("..");
        if valid {
            Ok(())
        } else {
            Err(ReportError::InvalidFileName(file_name.to_string()))
        }
    }
}

#[async_trait]
impl ReportSink for LocalReportSink {
    async fn write(&self, file_name: &str, content: &str) -> Result<PathBuf, ReportError> {
        Self::validate_file_name(file_name)?;

        fs::create_dir_all(&self.output_dir)
            .await
            .map_err(|e| ReportError::write_failed(format!("create output dir: {}", e)))?;

        let final_path = self.output_dir.join(file_name);
        let temp_path = self.output_dir.join(format!("{}.tmp", file_name));

        let mut file = fs::File::create(&temp_path)
            .await
            .map_err(|e| ReportError::write_failed(format!("create temp file: {}", e)))?;
        file.write_all(content.as_bytes())
            .await
            .map_err(|e| ReportError::write_failed(format!("write content: {}", e)))?;
        file.sync_all()
            .await
            .map_err(|e| ReportError::write_failed(format!("sync file: {}", e)))?;
        drop(file);

        fs::rename(&temp_path, &final_path)
            .await
            .map_err(|e| ReportError::write_failed(format!("rename file: {}", e)))?;

        tracing::debug!(path = %final_path.display(), bytes = content.len(), "Report written");

        Ok(final_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn writes_report_into_output_dir() {
        let temp_dir = TempDir::new().unwrap();
        let sink = LocalReportSink::new(temp_dir.path().join("reports"));

        let path = sink
            .write("UX-VOC-Report-1.html", "<html></html>")
            .await
            .unwrap();

        assert_eq!(path, temp_dir.path().join("reports/UX-VOC-Report-1.html"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<html></html>");
        assert!(!temp_dir
            .path()
            .join("reports/UX-VOC-Report-1.html.tmp")
            .exists());
    }

    #[tokio::test]
    async fn rejects_names_outside_output_dir() {
        let temp_dir = TempDir::new().unwrap();
        let sink = LocalReportSink::new(temp_dir.path());

        for name in ["", "../report.html", "a/b.html", ".hidden"] {
            let result = sink.write(name, "x").await;
            assert!(
                matches!(result, Err(ReportError::InvalidFileName(_))),
                "{:?} should be rejected",
                name
            );
        }
    }
}
