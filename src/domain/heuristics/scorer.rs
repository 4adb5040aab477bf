//! Heuristic Scorer - Ranks Nielsen heuristics for remediation.

use serde::{Deserialize, Serialize};

use super::score::{HeuristicScore, ScoreOrigin};

/// The ten usability heuristics, in form order.
pub const NIELSEN_HEURISTICS: [&str; 10] = [
    "Visibility of status",
    "Match to real world",
    "User control/freedom",
    "Consistency/standards",
    "Error prevention",
    "Recognition vs recall",
    "Flexibility/efficiency",
    "Aesthetic/minimalist",
    "Help users recover",
    "Help & docs",
];

/// A labelled score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeuristicResult {
    pub label: String,
    pub score: HeuristicScore,
}

/// A raw rating that did not read cleanly.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreNote {
    pub label: &'static str,
    pub origin: ScoreOrigin,
}

/// Heuristic scoring.
pub struct HeuristicScorer;

impl HeuristicScorer {
    /// Pairs scores with labels and sorts ascending, lowest first.
    ///
    /// The sort is stable, so equal scores keep label order.
    pub fn rank(scores: [HeuristicScore; 10]) -> Vec<HeuristicResult> {
        let mut results: Vec<HeuristicResult> = NIELSEN_HEURISTICS
            .iter()
            .zip(scores)
            .map(|(label, score)| HeuristicResult {
                label: label.to_string(),
                score,
            })
            .collect();

        results.sort_by_key(|r| r.score);
        results
    }

    /// Reads up to ten raw ratings; missing positions take the default score.
    ///
    /// Returns the scores in label order together with a note for every
    /// rating that was defaulted or adjusted.
    pub fn parse(raw: &[String]) -> ([HeuristicScore; 10], Vec<ScoreNote>) {
        let mut scores = [HeuristicScore::default(); 10];
        let mut notes = Vec::new();

        for (i, label) in NIELSEN_HEURISTICS.into_iter().enumerate() {
            let (score, origin) = HeuristicScore::parse_lenient(raw.get(i).map(String::as_str));
            scores[i] = score;
            if origin != ScoreOrigin::Parsed {
                notes.push(ScoreNote { label, origin });
            }
        }

        (scores, notes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn rank_sorts_ascending_and_is_stable() {
        let (scores, notes) =
            HeuristicScorer::parse(&raw(&["3", "2", "5", "2", "4", "1", "5", "3", "4", "2"]));
        assert!(notes.is_empty());

        let ranked = HeuristicScorer::rank(scores);
        let labels: Vec<_> = ranked.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "Recognition vs recall",
                "Match to real world",
                "Consistency/standards",
                "Help & docs",
                "Visibility of status",
                "Aesthetic/minimalist",
                "Error prevention",
                "Help users recover",
                "User control/freedom",
                "Flexibility/efficiency",
            ]
        );
        assert!(ranked.windows(2).all(|w| w[0].score <= w[1].score));
    }

    #[test]
    fn missing_and_garbage_default_to_one() {
        let (scores, notes) = HeuristicScorer::parse(&raw(&["5", "x", ""]));
        assert_eq!(scores[0].value(), 5);
        assert!(scores[1..].iter().all(|s| s.value() == 1));
        assert_eq!(notes.len(), 9);
        assert_eq!(notes[0].label, "Match to real world");
        assert_eq!(notes[0].origin, ScoreOrigin::Defaulted);
    }

    #[test]
    fn extra_inputs_are_ignored() {
        let values: Vec<String> = (0..12).map(|_| "4".to_string()).collect();
        let (scores, notes) = HeuristicScorer::parse(&values);
        assert!(scores.iter().all(|s| s.value() == 4));
        assert!(notes.is_empty());
    }

    #[test]
    fn all_equal_keeps_label_order() {
        let ranked = HeuristicScorer::rank([HeuristicScore::default(); 10]);
        let labels: Vec<_> = ranked.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, NIELSEN_HEURISTICS.to_vec());
    }
}
