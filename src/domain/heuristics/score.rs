//! Heuristic score value object (1-5 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Score used when a rating is missing or cannot be read as a number.
pub const DEFAULT_SCORE: u8 = 1;

pub const MIN_SCORE: u8 = 1;
pub const MAX_SCORE: u8 = 5;

/// A heuristic rating between 1 and 5 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HeuristicScore(u8);

/// How a raw rating became a score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScoreOrigin {
    /// Read as given.
    Parsed,
    /// Missing, blank, zero or not a number.
    Defaulted,
    /// A number outside 1-5 or with a fraction, rounded and clamped.
    Adjusted { raw: f64 },
}

impl HeuristicScore {
    /// Creates a score, returning error if out of range.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if !(MIN_SCORE..=MAX_SCORE).contains(&value) {
            return Err(ValidationError::out_of_range(
                "heuristic score",
                i32::from(MIN_SCORE),
                i32::from(MAX_SCORE),
                i32::from(value),
            ));
        }
        Ok(Self(value))
    }

    /// Creates a score, clamping to 1-5.
    pub fn clamped(value: u8) -> Self {
        Self(value.clamp(MIN_SCORE, MAX_SCORE))
    }

    /// Reads a raw form value without ever failing.
    ///
    /// Missing, blank, zero and non-numeric input become [`DEFAULT_SCORE`].
    /// Other numbers are rounded and clamped into range.
    pub fn parse_lenient(raw: Option<&str>) -> (Self, ScoreOrigin) {
        let value = raw
            .map(str::trim)
            .and_then(|s| s.parse::<f64>().ok())
            .filter(|v| v.is_finite() && *v != 0.0);

        let Some(value) = value else {
            return (Self(DEFAULT_SCORE), ScoreOrigin::Defaulted);
        };

        let rounded = value.round().clamp(f64::from(MIN_SCORE), f64::from(MAX_SCORE));
        let score = Self(rounded as u8);
        if rounded == value {
            (score, ScoreOrigin::Parsed)
        } else {
            (score, ScoreOrigin::Adjusted { raw: value })
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// Bar width as a percentage of the maximum score.
    pub fn percent(&self) -> f64 {
        f64::from(self.0) / f64::from(MAX_SCORE) * 100.0
    }
}

impl Default for HeuristicScore {
    fn default() -> Self {
        Self(DEFAULT_SCORE)
    }
}

impl fmt::Display for HeuristicScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, MAX_SCORE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_new_accepts_range() {
        for v in 1..=5 {
            assert_eq!(HeuristicScore::try_new(v).unwrap().value(), v);
        }
    }

    #[test]
    fn try_new_rejects_out_of_range() {
        assert!(matches!(
            HeuristicScore::try_new(0),
            Err(ValidationError::OutOfRange { .. })
        ));
        assert!(HeuristicScore::try_new(7).is_err());
    }

    #[test]
    fn lenient_defaults_unreadable_input() {
        for raw in [None, Some(""), Some("   "), Some("abc"), Some("0"), Some("NaN")] {
            let (score, origin) = HeuristicScore::parse_lenient(raw);
            assert_eq!(score.value(), DEFAULT_SCORE, "raw = {:?}", raw);
            assert_eq!(origin, ScoreOrigin::Defaulted);
        }
    }

    #[test]
    fn lenient_reads_valid_numbers() {
        assert_eq!(
            HeuristicScore::parse_lenient(Some(" 4 ")),
            (HeuristicScore(4), ScoreOrigin::Parsed)
        );
    }

    #[test]
    fn lenient_clamps_and_rounds() {
        assert_eq!(
            HeuristicScore::parse_lenient(Some("7")),
            (HeuristicScore(5), ScoreOrigin::Adjusted { raw: 7.0 })
        );
        assert_eq!(
            HeuristicScore::parse_lenient(Some("-3")),
            (HeuristicScore(1), ScoreOrigin::Adjusted { raw: -3.0 })
        );
        assert_eq!(HeuristicScore::parse_lenient(Some("3.6")).0.value(), 4);
    }

    #[test]
    fn percent_and_display() {
        let score = HeuristicScore::clamped(3);
        assert!((score.percent() - 60.0).abs() < f64::EPSILON);
        assert_eq!(score.to_string(), "3/5");
        assert_eq!(HeuristicScore::clamped(9).value(), 5);
    }
}
