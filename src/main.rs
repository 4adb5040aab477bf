//! UX VOC Analyzer CLI
//!
//! One action per invocation; state persists between runs.
//!
//! # Usage
//!
//! ```bash
//! # Analyze research input
//! ux-voc-analyzer analyze --domain "Clinic portal" --voc "Can't find results" --pain navigation
//!
//! # Review results
//! ux-voc-analyzer show voc
//!
//! # Export the HTML report
//! ux-voc-analyzer export
//! ```

use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use ux_voc_analyzer::adapters::cli::{run_command, Cli};
use ux_voc_analyzer::config::{AppConfig, LoggingConfig};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match AppConfig::load() {
        Ok(config) => config.with_overrides(cli.data_dir.clone(), cli.export_dir.clone()),
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config.logging, cli.verbose, cli.quiet);

    if let Err(e) = config.validate() {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }

    match run_command(cli.command, &config).await {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Command failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so stdout carries only views and report previews.
fn init_tracing(logging: &LoggingConfig, verbose: bool, quiet: bool) {
    let filter = EnvFilter::try_new(logging.filter_directive(verbose, quiet))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    if logging.is_json() {
        builder.json().init();
    } else {
        builder.init();
    }
}
