//! Style and pain-point tags selected alongside the free-text inputs.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Visual style preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleTag {
    Modern,
    Minimalistic,
    Corporate,
    Playful,
    Futuristic,
}

impl StyleTag {
    pub const ALL: [StyleTag; 5] = [
        StyleTag::Modern,
        StyleTag::Minimalistic,
        StyleTag::Corporate,
        StyleTag::Playful,
        StyleTag::Futuristic,
    ];

    /// Returns the tag name as stored and displayed.
    pub fn key(&self) -> &'static str {
        match self {
            StyleTag::Modern => "modern",
            StyleTag::Minimalistic => "minimalistic",
            StyleTag::Corporate => "corporate",
            StyleTag::Playful => "playful",
            StyleTag::Futuristic => "futuristic",
        }
    }
}

impl fmt::Display for StyleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for StyleTag {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        StyleTag::ALL
            .into_iter()
            .find(|tag| tag.key() == wanted)
            .ok_or_else(|| ValidationError::invalid_format("style", format!("unknown style '{}'", s)))
    }
}

/// Pain-point category, in the fixed order used for Pareto tie-breaking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PainCategory {
    Navigation,
    Usability,
    Performance,
    Visual,
    Content,
    Accessibility,
    Trust,
}

impl PainCategory {
    /// Declared order. Pareto ties keep this order.
    pub const ALL: [PainCategory; 7] = [
        PainCategory::Navigation,
        PainCategory::Usability,
        PainCategory::Performance,
        PainCategory::Visual,
        PainCategory::Content,
        PainCategory::Accessibility,
        PainCategory::Trust,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            PainCategory::Navigation => "navigation",
            PainCategory::Usability => "usability",
            PainCategory::Performance => "performance",
            PainCategory::Visual => "visual",
            PainCategory::Content => "content",
            PainCategory::Accessibility => "accessibility",
            PainCategory::Trust => "trust",
        }
    }
}

impl fmt::Display for PainCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for PainCategory {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        PainCategory::ALL
            .into_iter()
            .find(|cat| cat.key() == wanted)
            .ok_or_else(|| {
                ValidationError::invalid_format("pain", format!("unknown pain point '{}'", s))
            })
    }
}
