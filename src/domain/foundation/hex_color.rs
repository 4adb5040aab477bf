//! Hex color value object and sRGB channel decoding.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A color written as `#rrggbb`.
///
/// Palette slots and style biases are stored as the text the user (or the
/// static tables) supplied. Decoding never fails: see [`Rgb::from_hex`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HexColor(String);

impl HexColor {
    /// Creates a HexColor, rejecting anything that is not `#` plus six hex digits.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("color"));
        }
        let digits = trimmed
            .strip_prefix('#')
            .ok_or_else(|| ValidationError::invalid_format("color", "missing leading '#'"))?;
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ValidationError::invalid_format(
                "color",
                format!("expected #rrggbb, got {}", trimmed),
            ));
        }
        Ok(Self(trimmed.to_ascii_lowercase()))
    }

    /// Wraps any text as a color without checking it.
    ///
    /// Malformed values decode to black.
    pub fn lenient(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the color text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decodes the channels.
    pub fn rgb(&self) -> Rgb {
        Rgb::from_hex(&self.0)
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for HexColor {
    fn from(value: &str) -> Self {
        Self::lenient(value)
    }
}

/// 8-bit sRGB channels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };

    /// Decodes `#rrggbb` two characters at a time.
    ///
    /// A missing or unparsable pair decodes to `00`, so malformed input
    /// degrades toward black instead of failing.
    pub fn from_hex(value: &str) -> Self {
        let digits = value.strip_prefix('#').unwrap_or(value);
        let chars: Vec<char> = digits.chars().collect();
        let mut channels = chars
            .chunks(2)
            .map(|pair| u8::from_str_radix(&pair.iter().collect::<String>(), 16).unwrap_or(0));

        Self {
            r: channels.next().unwrap_or(0),
            g: channels.next().unwrap_or(0),
            b: channels.next().unwrap_or(0),
        }
    }
}
