//! Ordered keyword rules shared by the VOC classifiers.

use regex::Regex;

/// A compiled keyword pattern and the label it assigns.
#[derive(Debug, Clone)]
pub struct KeywordRule<L> {
    pattern: Regex,
    pub label: L,
}

impl<L: Copy> KeywordRule<L> {
    /// Compiles a rule. Patterns are static literals, so failure is a programming error.
    pub fn new(pattern: &str, label: L) -> Self {
        Self {
            pattern: Regex::new(pattern).expect("keyword rule pattern must compile"),
            label,
        }
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }
}

/// Label of the first matching rule.
pub fn first_match<L: Copy>(rules: &[KeywordRule<L>], text: &str) -> Option<L> {
    rules.iter().find(|rule| rule.is_match(text)).map(|rule| rule.label)
}

/// Labels of every matching rule, in rule order.
pub fn all_matches<L: Copy>(rules: &[KeywordRule<L>], text: &str) -> Vec<L> {
    rules
        .iter()
        .filter(|rule| rule.is_match(text))
        .map(|rule| rule.label)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> Vec<KeywordRule<u8>> {
        vec![
            KeywordRule::new("alpha|beta", 1),
            KeywordRule::new("beta|gamma", 2),
            KeywordRule::new("delta", 3),
        ]
    }

    #[test]
    fn first_match_stops_at_first_rule() {
        assert_eq!(first_match(&rules(), "beta"), Some(1));
        assert_eq!(first_match(&rules(), "gamma"), Some(2));
        assert_eq!(first_match(&rules(), "omega"), None);
    }

    #[test]
    fn all_matches_keeps_rule_order() {
        assert_eq!(all_matches(&rules(), "delta beta"), vec![1, 2, 3]);
        assert!(all_matches(&rules(), "").is_empty());
    }
}
