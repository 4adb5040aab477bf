//! Heuristics module - Nielsen heuristic scoring, lowest first.

mod score;
mod scorer;

pub use score::{HeuristicScore, ScoreOrigin, DEFAULT_SCORE, MAX_SCORE, MIN_SCORE};
pub use scorer::{HeuristicResult, HeuristicScorer, ScoreNote, NIELSEN_HEURISTICS};
