//! Command-line adapter
//!
//! Parses arguments with clap, dispatches to the application handlers and
//! renders their results as terminal text.
//!
//! # Usage
//!
//! ```bash
//! ux-voc-analyzer analyze --domain "Patient portal" --voc "Search is slow" --pain navigation
//! ux-voc-analyzer kano add must "Secure login"
//! ux-voc-analyzer heuristics 4 3 5 2 4 3 3 4 2 1
//! ux-voc-analyzer show accessibility
//! ux-voc-analyzer export --export-dir ./reports
//! ```

mod args;
mod commands;
pub mod views;

pub use args::{
    parse_args, AnalyzeArgs, Cli, Command, HeuristicsArgs, KanoArgs, KanoCommand, ShowArgs, View,
};
pub use commands::run_command;
