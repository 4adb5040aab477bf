//! Command-line argument model.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::domain::kano::KanoBucket;
use crate::domain::research::{PainCategory, ResearchForm, StyleTag};

/// UX VOC Analyzer: rule-based UX research analysis
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "ux-voc-analyzer")]
#[command(version)]
#[command(
    about = "Turn UX research input into recommendations, palettes, CTQ trees, affinity groups, Pareto charts and reports"
)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Override the state directory
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Override the report output directory
    #[arg(long, global = true, value_name = "DIR")]
    pub export_dir: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Run every classifier over the research input and store the results
    Analyze(AnalyzeArgs),

    /// Manage the Kano register
    Kano(KanoArgs),

    /// Score the ten Nielsen heuristics (1-5, in order)
    Heuristics(HeuristicsArgs),

    /// Check contrast of the generated palette
    Contrast,

    /// Print a view of the stored state
    Show(ShowArgs),

    /// Write the HTML report to the export directory
    Export,

    /// Discard all stored state
    Reset,
}

/// Arguments for the analyze command
#[derive(Args, Debug, Clone, PartialEq, Default)]
pub struct AnalyzeArgs {
    /// Product domain, e.g. "Hospital patient portal"
    #[arg(long, default_value = "")]
    pub domain: String,

    /// Target audience
    #[arg(long, default_value = "")]
    pub audience: String,

    /// Top tasks, comma separated
    #[arg(long, default_value = "")]
    pub tasks: String,

    /// Competitors, comma separated
    #[arg(long, default_value = "")]
    pub competitors: String,

    /// One voice-of-customer line (repeatable)
    #[arg(long = "voc", value_name = "LINE")]
    pub voc: Vec<String>,

    /// File with one voice-of-customer line per line
    #[arg(long, value_name = "FILE")]
    pub voc_file: Option<PathBuf>,

    /// Style tags: modern, minimalistic, corporate, playful, futuristic
    #[arg(long = "style", value_delimiter = ',')]
    pub styles: Vec<StyleTag>,

    /// Pain categories: navigation, usability, performance, visual, content, accessibility, trust
    #[arg(long = "pain", value_delimiter = ',')]
    pub pains: Vec<PainCategory>,
}

impl AnalyzeArgs {
    /// Builds the raw form, appending `voc_file_contents` after the inline lines.
    pub fn into_form(self, voc_file_contents: Option<String>) -> ResearchForm {
        let mut voc = self.voc.join("\n");
        if let Some(contents) = voc_file_contents {
            if !voc.is_empty() {
                voc.push('\n');
            }
            voc.push_str(&contents);
        }

        ResearchForm {
            domain: self.domain,
            audience: self.audience,
            tasks: self.tasks,
            competitors: self.competitors,
            voc,
            styles: self.styles,
            pains: self.pains,
        }
    }
}

/// Arguments for the kano command
#[derive(Args, Debug, Clone, PartialEq)]
pub struct KanoArgs {
    #[command(subcommand)]
    pub command: KanoCommand,
}

/// Kano register operations
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum KanoCommand {
    /// Add a feature to a bucket (must, performance, delighter)
    Add {
        bucket: KanoBucket,
        /// Feature name
        name: String,
    },

    /// Remove the feature at INDEX (as listed by `kano list`)
    Remove { bucket: KanoBucket, index: usize },

    /// Empty one bucket, or every bucket when none is given
    Clear { bucket: Option<KanoBucket> },

    /// List the register with indices
    List,
}

/// Arguments for the heuristics command
#[derive(Args, Debug, Clone, PartialEq)]
pub struct HeuristicsArgs {
    /// Up to ten ratings; missing or unreadable ones count as 1
    #[arg(value_name = "SCORE", allow_hyphen_values = true)]
    pub scores: Vec<String>,
}

/// Arguments for the show command
#[derive(Args, Debug, Clone, PartialEq)]
pub struct ShowArgs {
    /// View to print: summary, voc, recommendations, accessibility, report
    #[arg(default_value = "summary")]
    pub view: View,
}

/// Printable views of the state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Summary,
    Voc,
    Recommendations,
    Accessibility,
    Report,
}

impl std::str::FromStr for View {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "summary" => Ok(View::Summary),
            "voc" => Ok(View::Voc),
            "recommendations" | "recs" => Ok(View::Recommendations),
            "accessibility" | "a11y" => Ok(View::Accessibility),
            "report" => Ok(View::Report),
            _ => Err(format!(
                "Unknown view: {s}. Valid views: summary, voc, recommendations, accessibility, report"
            )),
        }
    }
}

/// Parse arguments from an iterator (for testing)
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_analyze_command() {
        let cli = parse_args([
            "ux-voc-analyzer",
            "analyze",
            "--domain",
            "Hospital portal",
            "--tasks",
            "Book, Pay",
            "--voc",
            "Search is slow",
            "--voc",
            "Too cluttered",
            "--style",
            "minimalistic,futuristic",
            "--pain",
            "navigation",
            "--pain",
            "trust",
        ])
        .unwrap();

        match cli.command {
            Command::Analyze(args) => {
                assert_eq!(args.domain, "Hospital portal");
                assert_eq!(args.voc.len(), 2);
                assert_eq!(args.styles, vec![StyleTag::Minimalistic, StyleTag::Futuristic]);
                assert_eq!(args.pains, vec![PainCategory::Navigation, PainCategory::Trust]);
            }
            _ => panic!("Expected Analyze command"),
        }
    }

    #[test]
    fn test_unknown_tag_rejected() {
        let result = parse_args(["ux-voc-analyzer", "analyze", "--style", "neon"]);
        assert!(result.is_err());

        let result = parse_args(["ux-voc-analyzer", "analyze", "--pain", "billing"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_into_form_merges_voc_sources() {
        let args = AnalyzeArgs {
            voc: vec!["First".to_string()],
            ..Default::default()
        };
        let form = args.into_form(Some("Second\nThird\n".to_string()));
        assert_eq!(form.voc, "First\nSecond\nThird\n");

        let input = form.into_input();
        assert_eq!(input.voc, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_parse_kano_commands() {
        let cli = parse_args(["ux-voc-analyzer", "kano", "add", "must-be", "Login"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Kano(KanoArgs {
                command: KanoCommand::Add {
                    bucket: KanoBucket::Must,
                    name: "Login".to_string()
                }
            })
        );

        let cli = parse_args(["ux-voc-analyzer", "kano", "remove", "delighter", "2"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Kano(KanoArgs {
                command: KanoCommand::Remove {
                    bucket: KanoBucket::Delighter,
                    index: 2
                }
            })
        );

        let cli = parse_args(["ux-voc-analyzer", "kano", "clear"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Kano(KanoArgs {
                command: KanoCommand::Clear { bucket: None }
            })
        );
    }

    #[test]
    fn test_parse_heuristics_accepts_raw_strings() {
        let cli = parse_args(["ux-voc-analyzer", "heuristics", "5", "-2", "abc"]).unwrap();
        match cli.command {
            Command::Heuristics(args) => assert_eq!(args.scores, vec!["5", "-2", "abc"]),
            _ => panic!("Expected Heuristics command"),
        }
    }

    #[test]
    fn test_parse_show_views() {
        let cli = parse_args(["ux-voc-analyzer", "show"]).unwrap();
        assert_eq!(cli.command, Command::Show(ShowArgs { view: View::Summary }));

        let cli = parse_args(["ux-voc-analyzer", "show", "a11y"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Show(ShowArgs {
                view: View::Accessibility
            })
        );

        assert!(parse_args(["ux-voc-analyzer", "show", "charts"]).is_err());
    }

    #[test]
    fn test_global_flags() {
        let cli = parse_args([
            "ux-voc-analyzer",
            "export",
            "-v",
            "--data-dir",
            "/tmp/state",
            "--export-dir",
            "/tmp/out",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert!(!cli.quiet);
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/state")));
        assert_eq!(cli.export_dir, Some(PathBuf::from("/tmp/out")));
    }
}
