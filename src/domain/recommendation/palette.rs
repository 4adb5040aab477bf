//! Palette Generator - Derives the themed color set from the style selection.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::style::style_modifier;
use crate::domain::foundation::HexColor;
use crate::domain::research::StyleTag;

/// Base colors appended after the style biases.
pub const BASE_POOL: [&str; 5] = ["#0b100d", "#0f1511", "#183223", "#22e884", "#e6f6ec"];

/// Number of pool entries kept after de-duplication.
pub const POOL_SIZE: usize = 6;

pub const DEFAULT_PRIMARY: &str = "#22e884";
pub const DEFAULT_SECONDARY: &str = "#183223";
pub const DEFAULT_SURFACE: &str = "#0f1511";

const SUCCESS: &str = "#2ecc71";
const WARNING: &str = "#ffb020";
const DANGER: &str = "#ff6b6b";
const TEXT: &str = "#e6f6ec";
const BORDER: &str = "#183223";
const BG: &str = "#070a08";

/// Named palette slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteSlot {
    Primary,
    Secondary,
    Success,
    Warning,
    Danger,
    Surface,
    Text,
    Border,
    Bg,
}

impl PaletteSlot {
    /// Display order of swatches.
    pub const ALL: [PaletteSlot; 9] = [
        PaletteSlot::Primary,
        PaletteSlot::Secondary,
        PaletteSlot::Success,
        PaletteSlot::Warning,
        PaletteSlot::Danger,
        PaletteSlot::Surface,
        PaletteSlot::Text,
        PaletteSlot::Border,
        PaletteSlot::Bg,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            PaletteSlot::Primary => "primary",
            PaletteSlot::Secondary => "secondary",
            PaletteSlot::Success => "success",
            PaletteSlot::Warning => "warning",
            PaletteSlot::Danger => "danger",
            PaletteSlot::Surface => "surface",
            PaletteSlot::Text => "text",
            PaletteSlot::Border => "border",
            PaletteSlot::Bg => "bg",
        }
    }
}

impl fmt::Display for PaletteSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// The nine-slot themed palette. Always derived whole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub primary: HexColor,
    pub secondary: HexColor,
    pub success: HexColor,
    pub warning: HexColor,
    pub danger: HexColor,
    pub surface: HexColor,
    pub text: HexColor,
    pub border: HexColor,
    pub bg: HexColor,
}

impl Palette {
    /// Returns the color in a slot.
    pub fn get(&self, slot: PaletteSlot) -> &HexColor {
        match slot {
            PaletteSlot::Primary => &self.primary,
            PaletteSlot::Secondary => &self.secondary,
            PaletteSlot::Success => &self.success,
            PaletteSlot::Warning => &self.warning,
            PaletteSlot::Danger => &self.danger,
            PaletteSlot::Surface => &self.surface,
            PaletteSlot::Text => &self.text,
            PaletteSlot::Border => &self.border,
            PaletteSlot::Bg => &self.bg,
        }
    }

    /// Slots and colors in display order.
    pub fn entries(&self) -> impl Iterator<Item = (PaletteSlot, &HexColor)> {
        PaletteSlot::ALL.into_iter().map(move |slot| (slot, self.get(slot)))
    }
}

/// Palette derivation.
pub struct PaletteGenerator;

impl PaletteGenerator {
    /// Builds the candidate pool: style biases in selection order, then the
    /// base colors, de-duplicated on first occurrence and cut to six.
    pub fn candidate_pool(styles: &[StyleTag]) -> Vec<&'static str> {
        let bias = styles
            .iter()
            .filter_map(|tag| style_modifier(*tag))
            .flat_map(|m| m.color_bias.iter().copied());

        let mut pool: Vec<&'static str> = Vec::with_capacity(POOL_SIZE);
        for color in bias.chain(BASE_POOL) {
            if pool.len() == POOL_SIZE {
                break;
            }
            if !pool.contains(&color) {
                pool.push(color);
            }
        }
        pool
    }

    /// Generates the palette.
    ///
    /// `domain` does not currently influence the result; it is accepted so the
    /// signature matches [`DomainClassifier::recommend`](super::DomainClassifier::recommend).
    pub fn generate(_domain: &str, styles: &[StyleTag]) -> Palette {
        let pool = Self::candidate_pool(styles);
        let pick = |index: usize, fallback: &str| {
            HexColor::lenient(pool.get(index).copied().unwrap_or(fallback))
        };

        Palette {
            primary: pick(3, DEFAULT_PRIMARY),
            secondary: pick(2, DEFAULT_SECONDARY),
            success: HexColor::lenient(SUCCESS),
            warning: HexColor::lenient(WARNING),
            danger: HexColor::lenient(DANGER),
            surface: pick(1, DEFAULT_SURFACE),
            text: HexColor::lenient(TEXT),
            border: HexColor::lenient(BORDER),
            bg: HexColor::lenient(BG),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn no_styles_uses_base_pool() {
        let palette = PaletteGenerator::generate("", &[]);
        assert_eq!(palette.primary.as_str(), "#22e884");
        assert_eq!(palette.secondary.as_str(), "#183223");
        assert_eq!(palette.surface.as_str(), "#0f1511");
        assert_eq!(palette.bg.as_str(), "#070a08");
        assert_eq!(palette.text.as_str(), "#e6f6ec");
    }

    #[test]
    fn style_bias_leads_the_pool() {
        let pool = PaletteGenerator::candidate_pool(&[StyleTag::Modern]);
        assert_eq!(
            pool,
            vec!["#22e884", "#0f1a14", "#9bf6c8", "#0b100d", "#0f1511", "#183223"]
        );

        let palette = PaletteGenerator::generate("", &[StyleTag::Modern]);
        assert_eq!(palette.primary.as_str(), "#0b100d");
        assert_eq!(palette.secondary.as_str(), "#9bf6c8");
        assert_eq!(palette.surface.as_str(), "#0f1a14");
    }

    #[test]
    fn pool_deduplicates_on_first_occurrence() {
        let pool = PaletteGenerator::candidate_pool(&[StyleTag::Playful, StyleTag::Futuristic]);
        assert_eq!(
            pool,
            vec!["#22e884", "#9bf6c8", "#7bf4ff", "#00ffa8", "#0b100d", "#0f1511"]
        );
    }

    #[test]
    fn fixed_slots_ignore_styles() {
        let plain = PaletteGenerator::generate("", &[]);
        let styled = PaletteGenerator::generate("", &[StyleTag::Minimalistic]);
        assert_eq!(plain.success, styled.success);
        assert_eq!(plain.warning, styled.warning);
        assert_eq!(plain.danger, styled.danger);
        assert_eq!(plain.border, styled.border);
    }

    #[test]
    fn entries_follow_slot_order() {
        let palette = PaletteGenerator::generate("", &[]);
        let keys: Vec<_> = palette.entries().map(|(slot, _)| slot.key()).collect();
        assert_eq!(
            keys,
            vec![
                "primary",
                "secondary",
                "success",
                "warning",
                "danger",
                "surface",
                "text",
                "border",
                "bg"
            ]
        );
    }

    #[test]
    fn palette_serializes_with_slot_names() {
        let palette = PaletteGenerator::generate("", &[]);
        let json = serde_json::to_value(&palette).unwrap();
        assert_eq!(json["bg"], "#070a08");
        assert_eq!(json["primary"], "#22e884");
    }

    proptest! {
        #[test]
        fn generation_is_deterministic(
            domain in ".{0,30}",
            styles in prop::collection::vec(prop::sample::select(StyleTag::ALL.to_vec()), 0..5),
        ) {
            let a = serde_json::to_string(&PaletteGenerator::generate(&domain, &styles)).unwrap();
            let b = serde_json::to_string(&PaletteGenerator::generate(&domain, &styles)).unwrap();
            prop_assert_eq!(a, b);
        }
    }
}
