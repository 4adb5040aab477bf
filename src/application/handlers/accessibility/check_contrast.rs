//! CheckContrastHandler - Query handler for palette contrast checks.

use crate::application::{AppError, StateRepository};
use crate::domain::accessibility::{ContrastCheck, ContrastEvaluator};

/// Outcome of a contrast check.
#[derive(Debug, Clone, PartialEq)]
pub enum ContrastOutcome {
    /// No palette yet; the analyzer has to run first.
    NoPalette,
    Checked(Vec<ContrastCheck>),
}

/// Handler for evaluating the stored palette.
pub struct CheckContrastHandler {
    repository: StateRepository,
}

impl CheckContrastHandler {
    pub fn new(repository: StateRepository) -> Self {
        Self { repository }
    }

    pub async fn handle(&self) -> Result<ContrastOutcome, AppError> {
        let state = self.repository.load().await?;

        let Some(palette) = state.derived.palette.as_ref() else {
            return Ok(ContrastOutcome::NoPalette);
        };

        let checks = ContrastEvaluator::evaluate(palette);
        tracing::debug!(
            failing = checks.iter().filter(|c| !c.passes).count(),
            "Contrast evaluated"
        );

        Ok(ContrastOutcome::Checked(checks))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryKeyValueStore;
    use crate::domain::analysis::Analyzer;
    use crate::domain::research::ResearchInput;
    use crate::domain::state::AppState;
    use std::sync::Arc;

    #[tokio::test]
    async fn prompts_when_no_palette() {
        let repo = StateRepository::new(Arc::new(InMemoryKeyValueStore::new()), "state");
        let outcome = CheckContrastHandler::new(repo).handle().await.unwrap();
        assert_eq!(outcome, ContrastOutcome::NoPalette);
    }

    #[tokio::test]
    async fn evaluates_five_pairs_without_persisting() {
        let store = Arc::new(InMemoryKeyValueStore::new());
        let repo = StateRepository::new(store.clone(), "state");
        let input = ResearchInput {
            domain: "Bank".to_string(),
            ..Default::default()
        };
        let mut state = AppState::default();
        state.apply_analysis(input.clone(), Analyzer::run(&input));
        repo.save(&state).await.unwrap();

        let outcome = CheckContrastHandler::new(repo.clone()).handle().await.unwrap();

        let ContrastOutcome::Checked(checks) = outcome else {
            panic!("expected contrast checks");
        };
        assert_eq!(checks.len(), 5);
        assert_eq!(checks[0].label(), "bg on text");
        assert_eq!(repo.load().await.unwrap(), state);
    }
}
