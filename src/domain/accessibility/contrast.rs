//! Contrast Evaluator - WCAG relative luminance and contrast ratio.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{HexColor, Rgb};
use crate::domain::recommendation::{Palette, PaletteSlot};

/// Minimum ratio for body text (WCAG AA).
pub const AA_BODY_TEXT_RATIO: f64 = 4.5;

/// Foreground/background combinations checked for every palette.
pub const CONTRAST_PAIRS: [(PaletteSlot, PaletteSlot); 5] = [
    (PaletteSlot::Bg, PaletteSlot::Text),
    (PaletteSlot::Surface, PaletteSlot::Text),
    (PaletteSlot::Primary, PaletteSlot::Text),
    (PaletteSlot::Text, PaletteSlot::Bg),
    (PaletteSlot::Primary, PaletteSlot::Bg),
];

fn linearize(channel: u8) -> f64 {
    let v = f64::from(channel) / 255.0;
    if v <= 0.03928 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance of an sRGB color, 0.0 (black) to 1.0 (white).
pub fn relative_luminance(rgb: Rgb) -> f64 {
    0.2126 * linearize(rgb.r) + 0.7152 * linearize(rgb.g) + 0.0722 * linearize(rgb.b)
}

/// Ratio of two luminances, lighter over darker, each offset by 0.05.
pub fn luminance_ratio(l1: f64, l2: f64) -> f64 {
    let (hi, lo) = if l1 >= l2 { (l1, l2) } else { (l2, l1) };
    (hi + 0.05) / (lo + 0.05)
}

/// Contrast ratio between two hex colors. Malformed hex is treated as black.
pub fn contrast_ratio(a: &str, b: &str) -> f64 {
    luminance_ratio(
        relative_luminance(Rgb::from_hex(a)),
        relative_luminance(Rgb::from_hex(b)),
    )
}

/// One evaluated palette pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContrastCheck {
    pub foreground: PaletteSlot,
    pub background: PaletteSlot,
    pub foreground_color: HexColor,
    pub background_color: HexColor,
    pub ratio: f64,
    pub passes: bool,
}

impl ContrastCheck {
    /// `"bg on text"` style label.
    pub fn label(&self) -> String {
        format!("{} on {}", self.foreground, self.background)
    }

    /// Ratio rounded to two decimals, e.g. `"21.00:1"`.
    pub fn ratio_display(&self) -> String {
        format!("{:.2}:1", self.ratio)
    }
}

/// Checks the fixed palette pairs.
pub struct ContrastEvaluator;

impl ContrastEvaluator {
    /// Evaluates every pair in [`CONTRAST_PAIRS`]. A pair passes at ≥ 4.5.
    pub fn evaluate(palette: &Palette) -> Vec<ContrastCheck> {
        CONTRAST_PAIRS
            .iter()
            .map(|&(fg, bg)| {
                let foreground_color = palette.get(fg).clone();
                let background_color = palette.get(bg).clone();
                let ratio = contrast_ratio(foreground_color.as_str(), background_color.as_str());
                ContrastCheck {
                    foreground: fg,
                    background: bg,
                    foreground_color,
                    background_color,
                    ratio,
                    passes: ratio >= AA_BODY_TEXT_RATIO,
                }
            })
            .collect()
    }
}
