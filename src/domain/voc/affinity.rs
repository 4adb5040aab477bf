//! Affinity Grouper - Clusters VOC lines into thematic categories.
//!
//! Unlike the CTQ builder, categories are mutually exclusive: the first
//! matching rule claims the line, and unmatched lines fall into `Usability`.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::rules::{first_match, KeywordRule};

/// Affinity category, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AffinityCategory {
    Performance,
    Navigation,
    Trust,
    Accessibility,
    Content,
    Visual,
    Usability,
}

impl AffinityCategory {
    pub const ALL: [AffinityCategory; 7] = [
        AffinityCategory::Performance,
        AffinityCategory::Navigation,
        AffinityCategory::Trust,
        AffinityCategory::Accessibility,
        AffinityCategory::Content,
        AffinityCategory::Visual,
        AffinityCategory::Usability,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AffinityCategory::Performance => "Performance",
            AffinityCategory::Navigation => "Navigation",
            AffinityCategory::Trust => "Trust",
            AffinityCategory::Accessibility => "Accessibility",
            AffinityCategory::Content => "Content",
            AffinityCategory::Visual => "Visual",
            AffinityCategory::Usability => "Usability",
        }
    }
}

impl fmt::Display for AffinityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Catch-all for lines no rule claims.
pub const FALLBACK_AFFINITY: AffinityCategory = AffinityCategory::Usability;

// Patterns are matched against lower-cased text.
static AFFINITY_RULES: Lazy<Vec<KeywordRule<AffinityCategory>>> = Lazy::new(|| {
    vec![
        KeywordRule::new(r"speed|slow|load|lag|response", AffinityCategory::Performance),
        KeywordRule::new(r"nav|find|search|discover|confus", AffinityCategory::Navigation),
        KeywordRule::new(r"priv|secure|trust|error|safe|consent", AffinityCategory::Trust),
        KeywordRule::new(
            r"access|color|contrast|blind|screen reader|keyboard",
            AffinityCategory::Accessibility,
        ),
        KeywordRule::new(r"copy|content|text|label|word", AffinityCategory::Content),
        KeywordRule::new(r"look|visual|clutter|layout|aesthetic", AffinityCategory::Visual),
    ]
});

/// Lines assigned to one category, in input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AffinityGroup {
    pub category: AffinityCategory,
    pub lines: Vec<String>,
}

/// All seven groups in category order. Empty until an analysis has run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AffinityGroups(Vec<AffinityGroup>);

impl AffinityGroups {
    /// True when no grouping has been produced yet.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AffinityGroup> {
        self.0.iter()
    }

    /// Lines in a category.
    pub fn lines(&self, category: AffinityCategory) -> &[String] {
        self.0
            .iter()
            .find(|g| g.category == category)
            .map(|g| g.lines.as_slice())
            .unwrap_or(&[])
    }
}

/// Affinity classification.
pub struct AffinityGrouper;

impl AffinityGrouper {
    /// Category for a single line.
    pub fn categorize(line: &str) -> AffinityCategory {
        first_match(&AFFINITY_RULES, &line.to_lowercase()).unwrap_or(FALLBACK_AFFINITY)
    }

    /// Groups every line. All seven categories are present, possibly empty.
    pub fn group(lines: &[String]) -> AffinityGroups {
        let mut groups: Vec<AffinityGroup> = AffinityCategory::ALL
            .into_iter()
            .map(|category| AffinityGroup {
                category,
                lines: Vec::new(),
            })
            .collect();

        for line in lines {
            let category = Self::categorize(line);
            if let Some(group) = groups.iter_mut().find(|g| g.category == category) {
                group.lines.push(line.clone());
            }
        }

        AffinityGroups(groups)
    }
}
