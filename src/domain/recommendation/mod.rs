//! Recommendation module - Domain profiles, style modifiers and palettes.
//!
//! # Components
//!
//! - `DomainClassifier` - First-match resolution of domain text to a rule
//! - `PaletteGenerator` - Style-biased nine-slot palette
//!
//! All rule data is static and immutable at runtime.

mod classifier;
mod palette;
mod rules;
mod style;

pub use classifier::{DomainClassifier, Recommendation};
pub use palette::{
    Palette, PaletteGenerator, PaletteSlot, BASE_POOL, DEFAULT_PRIMARY, DEFAULT_SECONDARY,
    DEFAULT_SURFACE, POOL_SIZE,
};
pub use rules::{generic_rule, DomainKey, DomainRule, DOMAIN_RULES};
pub use style::{style_modifier, style_notes, StyleModifier, STYLE_MODIFIERS};

/// Components listed when no recommendation has been generated yet.
pub const FALLBACK_COMPONENTS: [&str; 4] = ["Data grid", "Filters", "Notifications", "Help panel"];
