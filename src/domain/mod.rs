//! Domain layer - The rule engine.
//!
//! Pure, synchronous and free of I/O. Every classifier is a function from
//! owned input values to owned results; the application layer alone reads,
//! mutates and persists state.

pub mod accessibility;
pub mod analysis;
pub mod foundation;
pub mod heuristics;
pub mod kano;
pub mod recommendation;
pub mod report;
pub mod research;
pub mod state;
pub mod voc;
