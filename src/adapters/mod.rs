//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the application to the outside world:
//! - `storage` - Key-value stores for the state snapshot (file, in-memory)
//! - `report` - HTML report rendering and the local export sink
//! - `cli` - Command-line parsing, dispatch and terminal views

pub mod cli;
pub mod report;
pub mod storage;

pub use report::{HtmlReportRenderer, LocalReportSink};
pub use storage::{FileKeyValueStore, InMemoryKeyValueStore};
