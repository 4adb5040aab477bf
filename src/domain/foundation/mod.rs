//! Foundation module - Shared domain primitives.
//!
//! Contains value objects and error types that form the vocabulary
//! of the analyzer domain.

mod errors;
mod hex_color;
mod timestamp;

pub use errors::ValidationError;
pub use hex_color::{HexColor, Rgb};
pub use timestamp::Timestamp;
