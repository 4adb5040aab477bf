//! Static domain rule profiles.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a domain rule profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DomainKey {
    Healthcare,
    Fintech,
    Generic,
}

impl DomainKey {
    pub fn key(&self) -> &'static str {
        match self {
            DomainKey::Healthcare => "healthcare",
            DomainKey::Fintech => "fintech",
            DomainKey::Generic => "generic",
        }
    }
}

impl fmt::Display for DomainKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// A domain profile: the substrings that select it and the advice it carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DomainRule {
    pub key: DomainKey,
    /// Lower-case substrings; any one present in the domain text selects the rule.
    pub matches: &'static [&'static str],
    pub layout: &'static [&'static str],
    pub navigation: &'static [&'static str],
    pub components: &'static [&'static str],
    pub color_hints: &'static [&'static str],
    pub tone: &'static [&'static str],
    pub dataviz: &'static [&'static str],
    pub access_focus: &'static [&'static str],
}

impl DomainRule {
    /// True if any match substring occurs in `lowered`.
    ///
    /// `lowered` must already be lower-cased.
    pub fn matches(&self, lowered: &str) -> bool {
        self.matches.iter().any(|needle| lowered.contains(needle))
    }
}

/// Rules in evaluation order. The catch-all `generic` rule matches the empty
/// string and must stay last.
pub static DOMAIN_RULES: &[DomainRule] = &[
    DomainRule {
        key: DomainKey::Healthcare,
        matches: &["health", "patient", "clinic", "hospital", "ehr", "emr", "care"],
        layout: &[
            "Role-based dashboard",
            "Global patient search",
            "Timeline of encounters",
            "Split-view notes vs results",
        ],
        navigation: &[
            "Task-driven left nav",
            "Quick actions bar",
            "Contextual breadcrumbs",
            "Universal search",
        ],
        components: &[
            "Order entry validation",
            "Medication list + allergies",
            "Vitals chart",
            "Structured forms",
            "Audit log",
        ],
        color_hints: &[
            "Trust blues/greens",
            "High contrast for safety",
            "Clear error messages",
        ],
        tone: &["Clinical, precise, calm"],
        dataviz: &["Sparklines for vitals", "Critical alerts with icon+text"],
        access_focus: &[
            "≥4.5:1 contrast",
            "48px targets",
            "Keyboard-friendly forms",
            "Error prevention/recovery",
        ],
    },
    DomainRule {
        key: DomainKey::Fintech,
        matches: &["bank", "finance", "trading", "payments", "wallet", "fintech"],
        layout: &[
            "Accounts overview",
            "Transactions table",
            "Transfer wizard",
            "Risk/compliance alerts",
        ],
        navigation: &["Left rail + quick actions", "Status center", "Saved payees"],
        components: &["Data grid with filters", "Balance charts", "2FA prompts", "Export CSV"],
        color_hints: &["Conservative neutrals + accent"],
        tone: &["Trustful, compliant, simple"],
        dataviz: &["Line/area balances", "Bar categories"],
        access_focus: &["Accessible tables", "Clear money labels"],
    },
    DomainRule {
        key: DomainKey::Generic,
        matches: &[""],
        layout: &[
            "Dashboard with KPI cards",
            "Global search",
            "Modular content",
            "Progressive disclosure",
        ],
        navigation: &[
            "Sticky header",
            "Left rail modules",
            "Quick actions",
            "Search-first design",
        ],
        components: &["Data grid", "Filters", "Notifications", "Help panel"],
        color_hints: &["Neutral base + 1 accent"],
        tone: &["Clear, concise"],
        dataviz: &["Simple trends"],
        access_focus: &["Keyboard accessible", "Readable type"],
    },
];

/// Returns the catch-all rule.
pub fn generic_rule() -> &'static DomainRule {
    DOMAIN_RULES
        .iter()
        .find(|rule| rule.key == DomainKey::Generic)
        .unwrap_or(&DOMAIN_RULES[DOMAIN_RULES.len() - 1])
}
