//! Command dispatch: wires adapters into handlers and renders their results.

use std::sync::Arc;

use crate::adapters::report::{HtmlReportRenderer, LocalReportSink};
use crate::adapters::storage::FileKeyValueStore;
use crate::application::{
    AddKanoItemCommand, AddKanoItemHandler, AnalyzeCommand, AnalyzeHandler, AppError,
    CheckContrastHandler, ClearKanoCommand, ClearKanoHandler, ContrastOutcome,
    ExportReportCommand, ExportReportHandler, GetStateHandler, RemoveKanoItemCommand,
    RemoveKanoItemHandler, ResetStateHandler, ScoreHeuristicsCommand, ScoreHeuristicsHandler,
    StateRepository,
};
use crate::config::AppConfig;
use crate::domain::accessibility::ContrastEvaluator;
use crate::domain::foundation::Timestamp;
use crate::domain::heuristics::ScoreOrigin;
use crate::domain::report::ReportComposer;
use crate::ports::{ReportRenderer, StorageError};

use super::args::{AnalyzeArgs, Command, KanoCommand, View};
use super::views;

/// Execute one command against the configured storage.
///
/// Returns the text to print on stdout.
pub async fn run_command(command: Command, config: &AppConfig) -> Result<String, AppError> {
    let repository = StateRepository::new(
        Arc::new(FileKeyValueStore::new(&config.storage.data_dir)),
        config.storage.state_key.clone(),
    );

    match command {
        Command::Analyze(args) => run_analyze(repository, args).await,
        Command::Kano(args) => run_kano(repository, args.command).await,
        Command::Heuristics(args) => {
            let result = ScoreHeuristicsHandler::new(repository)
                .handle(ScoreHeuristicsCommand {
                    raw_scores: args.scores,
                })
                .await?;

            let mut out = String::new();
            for note in &result.notes {
                if let ScoreOrigin::Adjusted { raw } = note.origin {
                    out.push_str(&format!("Note: {} score {} adjusted to 1-5\n", note.label, raw));
                }
            }
            out.push_str(&views::heuristics_view(&result.results));
            Ok(out)
        }
        Command::Contrast => {
            let outcome = CheckContrastHandler::new(repository).handle().await?;
            Ok(match outcome {
                ContrastOutcome::NoPalette => views::contrast_view(None),
                ContrastOutcome::Checked(checks) => views::contrast_view(Some(checks.as_slice())),
            })
        }
        Command::Show(args) => {
            let state = GetStateHandler::new(repository).handle().await?;
            Ok(match args.view {
                View::Summary => views::summary_view(&state),
                View::Voc => views::voc_view(&state),
                View::Recommendations => views::recommendations_view(&state),
                View::Accessibility => {
                    let checks = state.derived.palette.as_ref().map(ContrastEvaluator::evaluate);
                    views::accessibility_view(&state, checks.as_deref())
                }
                View::Report => {
                    let model = ReportComposer::compose(&state, Timestamp::now());
                    HtmlReportRenderer::new().render(&model)
                }
            })
        }
        Command::Export => {
            let handler = ExportReportHandler::new(
                repository,
                Arc::new(HtmlReportRenderer::new()),
                Arc::new(LocalReportSink::new(&config.export.output_dir)),
            )
            .with_file_prefix(config.export.file_prefix.clone());

            let result = handler.handle(ExportReportCommand::now()).await?;
            Ok(format!("Report written to {}\n", result.path.display()))
        }
        Command::Reset => {
            ResetStateHandler::new(repository).handle().await?;
            Ok("State reset.\n".to_string())
        }
    }
}

async fn run_analyze(repository: StateRepository, args: AnalyzeArgs) -> Result<String, AppError> {
    let voc_file_contents = match &args.voc_file {
        Some(path) => Some(
            tokio::fs::read_to_string(path)
                .await
                .map_err(|e| StorageError::IoError(format!("{}: {}", path.display(), e)))?,
        ),
        None => None,
    };

    let form = args.into_form(voc_file_contents);
    let result = AnalyzeHandler::new(repository)
        .handle(AnalyzeCommand { form })
        .await?;

    Ok(views::summary_view(&result.state))
}

async fn run_kano(repository: StateRepository, command: KanoCommand) -> Result<String, AppError> {
    match command {
        KanoCommand::Add { bucket, name } => {
            let result = AddKanoItemHandler::new(repository)
                .handle(AddKanoItemCommand { bucket, name })
                .await?;
            let mut out = String::new();
            if !result.added {
                out.push_str("Nothing added: feature name is empty.\n");
            }
            out.push_str(&views::kano_view(&result.registry));
            Ok(out)
        }
        KanoCommand::Remove { bucket, index } => {
            let result = RemoveKanoItemHandler::new(repository)
                .handle(RemoveKanoItemCommand { bucket, index })
                .await?;
            let mut out = match &result.removed {
                Some(name) => format!("Removed '{}' from {}.\n", name, bucket.title()),
                None => format!("No item at index {} in {}; nothing removed.\n", index, bucket.title()),
            };
            out.push_str(&views::kano_view(&result.registry));
            Ok(out)
        }
        KanoCommand::Clear { bucket } => {
            let registry = ClearKanoHandler::new(repository)
                .handle(ClearKanoCommand { bucket })
                .await?;
            Ok(views::kano_view(&registry))
        }
        KanoCommand::List => {
            let state = GetStateHandler::new(repository).handle().await?;
            Ok(views::kano_view(&state.derived.kano))
        }
    }
}
