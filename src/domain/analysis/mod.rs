//! Analysis Module - The pure pipeline behind the "analyze" action.
//!
//! Takes a research input and returns every analysis-owned result at once,
//! so callers replace derived state wholesale instead of patching it.

mod analyzer;

pub use analyzer::{Analysis, Analyzer};
