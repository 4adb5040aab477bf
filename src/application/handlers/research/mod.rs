//! Research form command handlers.

mod analyze;

pub use analyze::{AnalyzeCommand, AnalyzeHandler, AnalyzeResult};
