//! ScoreHeuristicsHandler - Command handler for recording Nielsen heuristic scores.

use crate::application::{AppError, StateRepository};
use crate::domain::heuristics::{HeuristicResult, HeuristicScorer, ScoreNote, ScoreOrigin};

/// Command carrying up to ten raw ratings in heuristic order.
#[derive(Debug, Clone, Default)]
pub struct ScoreHeuristicsCommand {
    pub raw_scores: Vec<String>,
}

/// Result of scoring.
#[derive(Debug, Clone)]
pub struct ScoreHeuristicsResult {
    /// Ranked lowest score first.
    pub results: Vec<HeuristicResult>,
    /// Ratings that were defaulted or adjusted while reading.
    pub notes: Vec<ScoreNote>,
}

/// Handler for heuristic scoring.
pub struct ScoreHeuristicsHandler {
    repository: StateRepository,
}

impl ScoreHeuristicsHandler {
    pub fn new(repository: StateRepository) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: ScoreHeuristicsCommand,
    ) -> Result<ScoreHeuristicsResult, AppError> {
        // 1. Read raw ratings at the boundary
        let (scores, notes) = HeuristicScorer::parse(&cmd.raw_scores);
        for note in &notes {
            if let ScoreOrigin::Adjusted { raw } = note.origin {
                tracing::warn!(heuristic = note.label, raw, "Heuristic score clamped to 1-5");
            }
        }

        // 2. Load, replace, persist
        let mut state = self.repository.load().await?;
        let results = HeuristicScorer::rank(scores);
        state.derived.heuristics = results.clone();
        self.repository.save(&state).await?;

        tracing::info!(
            lowest = results.first().map(|r| r.label.as_str()).unwrap_or_default(),
            "Heuristics scored"
        );

        Ok(ScoreHeuristicsResult { results, notes })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryKeyValueStore;
    use crate::domain::heuristics::HeuristicScore;
    use std::sync::Arc;

    fn raw(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[tokio::test]
    async fn scores_are_ranked_and_persisted() {
        let repo = StateRepository::new(Arc::new(InMemoryKeyValueStore::new()), "state");
        let handler = ScoreHeuristicsHandler::new(repo.clone());

        let result = handler
            .handle(ScoreHeuristicsCommand {
                raw_scores: raw(&["5", "4", "3", "2", "1", "5", "4", "3", "2", "5"]),
            })
            .await
            .unwrap();

        assert_eq!(result.results.len(), 10);
        assert_eq!(result.results[0].label, "Error prevention");
        assert_eq!(result.results[9].score, HeuristicScore::clamped(5));
        assert!(result.notes.is_empty());

        let stored = repo.load().await.unwrap();
        assert_eq!(stored.derived.heuristics, result.results);
    }

    #[tokio::test]
    async fn unreadable_and_out_of_range_scores_are_noted() {
        let repo = StateRepository::new(Arc::new(InMemoryKeyValueStore::new()), "state");
        let handler = ScoreHeuristicsHandler::new(repo);

        let result = handler
            .handle(ScoreHeuristicsCommand {
                raw_scores: raw(&["9", "abc", "3"]),
            })
            .await
            .unwrap();

        // "9" is adjusted, "abc" and the seven missing ratings are defaulted
        assert_eq!(result.notes.len(), 9);
        assert_eq!(result.notes[0].label, "Visibility of status");
        assert!(matches!(result.notes[0].origin, ScoreOrigin::Adjusted { .. }));
        let visibility = result
            .results
            .iter()
            .find(|r| r.label == "Visibility of status")
            .unwrap();
        assert_eq!(visibility.score.value(), 5);
    }
}
