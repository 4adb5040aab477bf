//! Report Adapters
//!
//! - **HtmlReportRenderer** - Self-contained HTML rendering of the report model
//! - **LocalReportSink** - Writes exported reports to a local directory

mod html_renderer;
mod local_report_sink;

pub use html_renderer::{html_escape, HtmlReportRenderer};
pub use local_report_sink::LocalReportSink;
