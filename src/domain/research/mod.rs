//! Research module - The user-supplied inputs to an analysis.

mod input;
mod tags;

pub use input::{split_list, ResearchForm, ResearchInput};
pub use tags::{PainCategory, StyleTag};
