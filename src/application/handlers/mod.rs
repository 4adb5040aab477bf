//! Application handlers.
//!
//! One command or query handler per user action. Mutating handlers follow
//! the same sequence: load state, apply the change, persist the snapshot.

pub mod accessibility;
pub mod heuristics;
pub mod kano;
pub mod report;
pub mod research;
pub mod state;

pub use accessibility::{CheckContrastHandler, ContrastOutcome};
pub use heuristics::{ScoreHeuristicsCommand, ScoreHeuristicsHandler, ScoreHeuristicsResult};
pub use kano::{
    AddKanoItemCommand, AddKanoItemHandler, AddKanoItemResult, ClearKanoCommand,
    ClearKanoHandler, RemoveKanoItemCommand, RemoveKanoItemHandler, RemoveKanoItemResult,
};
pub use report::{ExportReportCommand, ExportReportHandler, ExportReportResult, DEFAULT_FILE_PREFIX};
pub use research::{AnalyzeCommand, AnalyzeHandler, AnalyzeResult};
pub use state::{GetStateHandler, ResetStateHandler};
