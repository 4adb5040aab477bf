//! Heuristic scoring command handlers.

mod score_heuristics;

pub use score_heuristics::{
    ScoreHeuristicsCommand, ScoreHeuristicsHandler, ScoreHeuristicsResult,
};
