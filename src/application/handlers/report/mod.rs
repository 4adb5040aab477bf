//! Report export handlers.

mod export_report;

pub use export_report::{
    ExportReportCommand, ExportReportHandler, ExportReportResult, DEFAULT_FILE_PREFIX,
};
