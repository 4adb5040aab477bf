//! Kano register command handlers.

mod add_item;
mod clear;
mod remove_item;

pub use add_item::{AddKanoItemCommand, AddKanoItemHandler, AddKanoItemResult};
pub use clear::{ClearKanoCommand, ClearKanoHandler};
pub use remove_item::{RemoveKanoItemCommand, RemoveKanoItemHandler, RemoveKanoItemResult};
