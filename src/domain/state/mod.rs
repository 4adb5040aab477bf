//! State module - The single application state and its snapshot format.

mod app_state;

pub use app_state::{AppState, DecodedSnapshot, Derived};
