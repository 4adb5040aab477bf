//! AnalyzeHandler - Command handler for the "analyze" action.

use crate::application::{AppError, StateRepository};
use crate::domain::analysis::Analyzer;
use crate::domain::research::ResearchForm;
use crate::domain::state::AppState;

/// Command to analyze a filled research form.
#[derive(Debug, Clone)]
pub struct AnalyzeCommand {
    pub form: ResearchForm,
}

/// Result of a completed analysis.
#[derive(Debug, Clone)]
pub struct AnalyzeResult {
    pub state: AppState,
}

/// Handler for running the classifiers over the research input.
pub struct AnalyzeHandler {
    repository: StateRepository,
}

impl AnalyzeHandler {
    pub fn new(repository: StateRepository) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: AnalyzeCommand) -> Result<AnalyzeResult, AppError> {
        // 1. Load state
        let mut state = self.repository.load().await?;

        // 2. Normalize input and run every classifier
        let input = cmd.form.into_input();
        let analysis = Analyzer::run(&input);

        // 3. Replace input and analysis-owned results; Kano and heuristics stay
        state.apply_analysis(input, analysis);

        // 4. Persist
        self.repository.save(&state).await?;

        tracing::info!(
            domain = %state.input.domain,
            voc_lines = state.input.voc.len(),
            pains = state.input.pains.len(),
            "Analysis completed"
        );

        Ok(AnalyzeResult { state })
    }
}
