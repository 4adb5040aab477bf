//! State query and reset handlers.

mod get_state;
mod reset_state;

pub use get_state::GetStateHandler;
pub use reset_state::ResetStateHandler;
