//! Accessibility query handlers.

mod check_contrast;

pub use check_contrast::{CheckContrastHandler, ContrastOutcome};
