//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the application and the outside world. Adapters implement these ports.
//!
//! - `KeyValueStore` - Persisted state snapshot
//! - `ReportRenderer` - Report model to standalone document
//! - `ReportSink` - Destination for exported reports

mod key_value_store;
mod report_renderer;

pub use key_value_store::{KeyValueStore, StorageError};
pub use report_renderer::{ReportError, ReportRenderer, ReportSink};
