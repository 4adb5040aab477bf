//! Domain Classifier - Resolves free-text domain descriptions to a rule profile.

use serde::{Deserialize, Serialize};

use super::rules::{generic_rule, DomainKey, DomainRule, DOMAIN_RULES};
use super::style::style_notes;
use crate::domain::research::StyleTag;

/// The advice of the resolved rule plus notes from the selected styles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub key: DomainKey,
    pub layout: Vec<String>,
    pub navigation: Vec<String>,
    pub components: Vec<String>,
    pub color_hints: Vec<String>,
    pub tone: Vec<String>,
    pub dataviz: Vec<String>,
    pub access_focus: Vec<String>,
    #[serde(default)]
    pub style_notes: Vec<String>,
}

impl Recommendation {
    fn from_rule(rule: &DomainRule, style_notes: Vec<String>) -> Self {
        fn owned(items: &[&str]) -> Vec<String> {
            items.iter().map(|s| s.to_string()).collect()
        }

        Self {
            key: rule.key,
            layout: owned(rule.layout),
            navigation: owned(rule.navigation),
            components: owned(rule.components),
            color_hints: owned(rule.color_hints),
            tone: owned(rule.tone),
            dataviz: owned(rule.dataviz),
            access_focus: owned(rule.access_focus),
            style_notes,
        }
    }
}

/// First-match domain classification.
pub struct DomainClassifier;

impl DomainClassifier {
    /// Resolves the rule for a domain description.
    ///
    /// Rules are tried in order and the first one with a substring present in
    /// the lower-cased text wins. The generic rule matches everything, so a
    /// rule is always returned.
    pub fn resolve(domain: &str) -> &'static DomainRule {
        let lowered = domain.to_lowercase();
        DOMAIN_RULES
            .iter()
            .find(|rule| rule.matches(&lowered))
            .unwrap_or_else(generic_rule)
    }

    /// Builds the full recommendation for a domain and style selection.
    pub fn recommend(domain: &str, styles: &[StyleTag]) -> Recommendation {
        Recommendation::from_rule(Self::resolve(domain), style_notes(styles))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::recommendation::style::style_modifier;
    use proptest::prelude::*;

    #[test]
    fn hospital_ehr_resolves_to_healthcare() {
        let rec = DomainClassifier::recommend("Our hospital EHR platform", &[]);
        assert_eq!(rec.key, DomainKey::Healthcare);
        assert!(rec.layout.contains(&"Role-based dashboard".to_string()));
    }

    #[test]
    fn banking_resolves_to_fintech() {
        let rec = DomainClassifier::recommend("Retail BANKING app", &[]);
        assert_eq!(rec.key, DomainKey::Fintech);
        assert_eq!(rec.tone, vec!["Trustful, compliant, simple"]);
    }

    #[test]
    fn first_matching_rule_wins() {
        // "care" (healthcare) and "payments" (fintech) both present.
        let rule = DomainClassifier::resolve("payments for care providers");
        assert_eq!(rule.key, DomainKey::Healthcare);
    }

    #[test]
    fn empty_domain_resolves_to_generic() {
        let rec = DomainClassifier::recommend("", &[]);
        assert_eq!(rec.key, DomainKey::Generic);
        assert_eq!(rec.components, vec!["Data grid", "Filters", "Notifications", "Help panel"]);
    }

    #[test]
    fn style_notes_attached_in_selection_order() {
        let rec = DomainClassifier::recommend("bank", &[StyleTag::Corporate, StyleTag::Futuristic]);
        assert_eq!(
            rec.style_notes,
            vec!["Conservative palette", "Formal copy", "Glows & gradients"]
        );
    }

    fn style_strategy() -> impl Strategy<Value = StyleTag> {
        prop::sample::select(StyleTag::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn unrecognized_text_falls_back_to_generic(text in "[xyz0-9 ]{0,40}") {
            prop_assert_eq!(DomainClassifier::resolve(&text).key, DomainKey::Generic);
        }

        #[test]
        fn style_notes_length_is_sum_of_selected(styles in prop::collection::vec(style_strategy(), 0..6)) {
            let rec = DomainClassifier::recommend("clinic", &styles);
            let expected: usize = styles
                .iter()
                .map(|s| style_modifier(*s).map(|m| m.notes.len()).unwrap_or(0))
                .sum();
            prop_assert_eq!(rec.style_notes.len(), expected);
        }
    }
}
