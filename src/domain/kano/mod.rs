//! Kano module - Must-be / performance / delighter feature register.

mod registry;

pub use registry::{KanoBucket, KanoRegistry};
