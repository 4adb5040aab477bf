//! Research input and the raw form it is parsed from.

use serde::{Deserialize, Serialize};

use super::{PainCategory, StyleTag};

/// Everything the user supplied for one analysis run.
///
/// Replaced wholesale by each analysis; never merged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResearchInput {
    pub domain: String,
    pub audience: String,
    pub tasks: Vec<String>,
    pub competitors: Vec<String>,
    pub voc: Vec<String>,
    pub styles: Vec<StyleTag>,
    pub pains: Vec<PainCategory>,
}

impl ResearchInput {
    /// True until a domain has been analysed.
    pub fn is_blank(&self) -> bool {
        self.domain.is_empty()
    }
}

/// Unparsed form fields as typed by the user.
#[derive(Debug, Clone, Default)]
pub struct ResearchForm {
    pub domain: String,
    pub audience: String,
    /// Comma separated.
    pub tasks: String,
    /// Comma separated.
    pub competitors: String,
    /// One line per entry.
    pub voc: String,
    pub styles: Vec<StyleTag>,
    pub pains: Vec<PainCategory>,
}

impl ResearchForm {
    /// Normalizes the form into a [`ResearchInput`].
    ///
    /// Text is trimmed, list pieces that are empty after trimming are
    /// dropped, and repeated tags collapse to their first occurrence.
    pub fn into_input(self) -> ResearchInput {
        ResearchInput {
            domain: self.domain.trim().to_string(),
            audience: self.audience.trim().to_string(),
            tasks: split_list(&self.tasks, ','),
            competitors: split_list(&self.competitors, ','),
            voc: split_list(&self.voc, '\n'),
            styles: dedup_preserving_order(self.styles),
            pains: dedup_preserving_order(self.pains),
        }
    }
}

/// Splits on `separator`, trims each piece and drops the empty ones.
pub fn split_list(raw: &str, separator: char) -> Vec<String> {
    raw.split(separator)
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

fn dedup_preserving_order<T: PartialEq>(items: Vec<T>) -> Vec<T> {
    let mut unique = Vec::with_capacity(items.len());
    for item in items {
        if !unique.contains(&item) {
            unique.push(item);
        }
    }
    unique
}
