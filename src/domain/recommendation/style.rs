//! Style modifiers: palette bias and notes per style tag.

use crate::domain::research::StyleTag;

/// Color bias and design notes contributed by one style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleModifier {
    pub tag: StyleTag,
    pub color_bias: &'static [&'static str],
    pub notes: &'static [&'static str],
}

pub static STYLE_MODIFIERS: &[StyleModifier] = &[
    StyleModifier {
        tag: StyleTag::Modern,
        color_bias: &["#22e884", "#0f1a14", "#9bf6c8"],
        notes: &["Card layouts", "Soft shadows"],
    },
    StyleModifier {
        tag: StyleTag::Minimalistic,
        color_bias: &["#0c1310", "#a5c3af", "#e6f6ec"],
        notes: &["Whitespace", "Subtle dividers"],
    },
    StyleModifier {
        tag: StyleTag::Corporate,
        color_bias: &["#0b100d", "#183223", "#22e884"],
        notes: &["Conservative palette", "Formal copy"],
    },
    StyleModifier {
        tag: StyleTag::Playful,
        color_bias: &["#22e884", "#9bf6c8", "#7bf4ff"],
        notes: &["Rounded, friendly"],
    },
    StyleModifier {
        tag: StyleTag::Futuristic,
        color_bias: &["#22e884", "#00ffa8", "#9bf6c8"],
        notes: &["Glows & gradients"],
    },
];

/// Looks up the modifier for a tag. A tag without a modifier contributes nothing.
pub fn style_modifier(tag: StyleTag) -> Option<&'static StyleModifier> {
    STYLE_MODIFIERS.iter().find(|m| m.tag == tag)
}

/// Notes of each selected style, concatenated in selection order.
pub fn style_notes(styles: &[StyleTag]) -> Vec<String> {
    styles
        .iter()
        .filter_map(|tag| style_modifier(*tag))
        .flat_map(|m| m.notes.iter().map(|note| note.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_style_has_a_modifier() {
        for tag in StyleTag::ALL {
            assert!(style_modifier(tag).is_some(), "missing modifier for {}", tag);
        }
    }

    #[test]
    fn style_notes_follow_selection_order() {
        let notes = style_notes(&[StyleTag::Playful, StyleTag::Modern]);
        assert_eq!(notes, vec!["Rounded, friendly", "Card layouts", "Soft shadows"]);
    }

    #[test]
    fn style_notes_empty_for_no_styles() {
        assert!(style_notes(&[]).is_empty());
    }
}
