//! Pareto Aggregator - Ranks pain-point categories by frequency.

use serde::{Deserialize, Serialize};

use crate::domain::research::PainCategory;

/// Occurrence count of one pain category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParetoEntry {
    pub category: PainCategory,
    pub count: usize,
}

/// Pareto ranking.
pub struct ParetoAggregator;

impl ParetoAggregator {
    /// Counts each category and sorts descending by count.
    ///
    /// All seven categories are always present. The sort is stable, so ties
    /// keep the declared category order.
    pub fn aggregate(pains: &[PainCategory]) -> Vec<ParetoEntry> {
        let mut entries: Vec<ParetoEntry> = PainCategory::ALL
            .into_iter()
            .map(|category| ParetoEntry {
                category,
                count: pains.iter().filter(|p| **p == category).count(),
            })
            .collect();

        entries.sort_by(|a, b| b.count.cmp(&a.count));
        entries
    }

    /// Largest count, never below 1, for scaling bars.
    pub fn scale(entries: &[ParetoEntry]) -> usize {
        entries.iter().map(|e| e.count).max().unwrap_or(0).max(1)
    }
}
