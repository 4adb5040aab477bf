//! Accessibility module - WCAG contrast arithmetic over the derived palette.

mod contrast;

pub use contrast::{
    contrast_ratio, luminance_ratio, relative_luminance, ContrastCheck, ContrastEvaluator,
    AA_BODY_TEXT_RATIO, CONTRAST_PAIRS,
};
