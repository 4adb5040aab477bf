//! CTQ Builder - Turns VOC lines into need → CTQ → spec nodes.
//!
//! A line may match several categories; every match contributes. A line that
//! matches nothing gets the single default category `Usefulness`.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::rules::{all_matches, KeywordRule};

/// Critical-to-Quality category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CtqCategory {
    #[serde(rename = "Response time")]
    ResponseTime,
    #[serde(rename = "Findability")]
    Findability,
    #[serde(rename = "Safety/Security")]
    SafetySecurity,
    #[serde(rename = "Accessibility")]
    Accessibility,
    #[serde(rename = "Simplicity")]
    Simplicity,
    #[serde(rename = "Usefulness")]
    Usefulness,
}

/// Category assigned when no rule matches.
pub const DEFAULT_CTQ: CtqCategory = CtqCategory::Usefulness;

impl CtqCategory {
    pub fn label(&self) -> &'static str {
        match self {
            CtqCategory::ResponseTime => "Response time",
            CtqCategory::Findability => "Findability",
            CtqCategory::SafetySecurity => "Safety/Security",
            CtqCategory::Accessibility => "Accessibility",
            CtqCategory::Simplicity => "Simplicity",
            CtqCategory::Usefulness => "Usefulness",
        }
    }

    /// Measurable target for the category.
    pub fn spec(&self) -> &'static str {
        match self {
            CtqCategory::ResponseTime => "≤ 300ms above-the-fold interactions",
            CtqCategory::Findability => "Key tasks ≤ 3 clicks from entry",
            CtqCategory::SafetySecurity => "Mask PII; 2FA for sensitive actions",
            CtqCategory::Accessibility => "Contrast ≥ 4.5:1; logical tab order",
            CtqCategory::Simplicity => "Progressive disclosure; remove non-essential",
            CtqCategory::Usefulness => "Task success ≥ 95% in testing",
        }
    }
}

impl fmt::Display for CtqCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

static CTQ_RULES: Lazy<Vec<KeywordRule<CtqCategory>>> = Lazy::new(|| {
    vec![
        KeywordRule::new(r"(?i)fast|quick|speed|within|sec|min", CtqCategory::ResponseTime),
        KeywordRule::new(r"(?i)find|search|discover|nav", CtqCategory::Findability),
        KeywordRule::new(r"(?i)error|safe|secure|privacy|consent", CtqCategory::SafetySecurity),
        KeywordRule::new(r"(?i)access|read|contrast|color|blind", CtqCategory::Accessibility),
        KeywordRule::new(r"(?i)simple|clutter|clean|minimal", CtqCategory::Simplicity),
    ]
});

/// One VOC need with its CTQs and one spec per CTQ.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CtqNode {
    pub need: String,
    pub ctqs: Vec<CtqCategory>,
    pub specs: Vec<String>,
}

impl CtqNode {
    /// CTQ labels joined with `", "`.
    pub fn ctq_labels(&self) -> String {
        self.ctqs
            .iter()
            .map(|c| c.label())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// CTQ tree construction.
pub struct CtqBuilder;

impl CtqBuilder {
    /// Classifies a single line.
    pub fn classify(line: &str) -> CtqNode {
        let need = line.strip_suffix('.').unwrap_or(line).to_string();

        let mut ctqs = all_matches(&CTQ_RULES, line);
        if ctqs.is_empty() {
            ctqs.push(DEFAULT_CTQ);
        }
        let specs = ctqs.iter().map(|c| c.spec().to_string()).collect();

        CtqNode { need, ctqs, specs }
    }

    /// Builds one node per line, in input order.
    pub fn build(lines: &[String]) -> Vec<CtqNode> {
        lines.iter().map(|line| Self::classify(line)).collect()
    }
}
