//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Every handler loads the state through [`StateRepository`], so the storage
//! key lives in exactly one place.

mod error;
pub mod handlers;
mod state_repository;

pub use error::AppError;
pub use handlers::*;
pub use state_repository::{StateRepository, DEFAULT_STATE_KEY};
