//! Report model - Structured content of the exported VOC report.
//!
//! Carries raw, unescaped strings. Escaping belongs to the renderer.

use serde::Serialize;

use crate::domain::foundation::{HexColor, Timestamp};
use crate::domain::kano::KanoBucket;
use crate::domain::state::AppState;
use crate::domain::voc::{CtqNode, ParetoAggregator};

pub const REPORT_TITLE: &str = "UX Feedback Analyzer — VOC Report";

/// Placeholder shown for empty values.
pub const EMPTY_MARK: &str = "—";

/// A labelled horizontal bar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    pub label: String,
    /// Width as a percentage of the track, 0-100.
    pub width_percent: f64,
    /// Trailing value text, e.g. `"2"` or `"3/5"`.
    pub value_text: String,
}

/// A palette swatch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Swatch {
    pub name: String,
    pub color: HexColor,
}

/// A titled list of items.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NamedList {
    pub title: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectSection {
    pub domain: String,
    pub audience: String,
    pub tasks: Vec<String>,
    pub styles: Vec<String>,
    pub pains: Vec<String>,
    pub competitors: Vec<String>,
}

/// Everything the exported document shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportModel {
    pub title: String,
    pub generated_at: Timestamp,
    pub project: ProjectSection,
    pub layout: Vec<String>,
    pub navigation: Vec<String>,
    pub ctq: Vec<CtqNode>,
    pub kano: Vec<NamedList>,
    pub affinity: Vec<NamedList>,
    pub pareto: Vec<Bar>,
    pub palette: Vec<Swatch>,
    pub access_focus: Vec<String>,
    pub heuristics: Vec<Bar>,
}

/// Builds the report model from state.
pub struct ReportComposer;

impl ReportComposer {
    /// Pure function of the state and the supplied generation time.
    pub fn compose(state: &AppState, generated_at: Timestamp) -> ReportModel {
        let input = &state.input;
        let derived = &state.derived;
        let recs = derived.recs.as_ref();

        let project = ProjectSection {
            domain: input.domain.clone(),
            audience: input.audience.clone(),
            tasks: input.tasks.clone(),
            styles: input.styles.iter().map(|s| s.key().to_string()).collect(),
            pains: input.pains.iter().map(|p| p.key().to_string()).collect(),
            competitors: input.competitors.clone(),
        };

        let kano = KanoBucket::ALL
            .into_iter()
            .map(|bucket| NamedList {
                title: bucket.title().to_string(),
                items: derived.kano.bucket(bucket).to_vec(),
            })
            .collect();

        let affinity = derived
            .affinity
            .iter()
            .map(|group| NamedList {
                title: group.category.label().to_string(),
                items: group.lines.clone(),
            })
            .collect();

        let scale = ParetoAggregator::scale(&derived.pareto) as f64;
        let pareto = derived
            .pareto
            .iter()
            .map(|entry| Bar {
                label: entry.category.key().to_string(),
                width_percent: entry.count as f64 / scale * 100.0,
                value_text: entry.count.to_string(),
            })
            .collect();

        let palette = derived
            .palette
            .as_ref()
            .map(|p| {
                p.entries()
                    .map(|(slot, color)| Swatch {
                        name: slot.key().to_string(),
                        color: color.clone(),
                    })
                    .collect()
            })
            .unwrap_or_default();

        let heuristics = derived
            .heuristics
            .iter()
            .map(|h| Bar {
                label: h.label.clone(),
                width_percent: h.score.percent(),
                value_text: h.score.to_string(),
            })
            .collect();

        ReportModel {
            title: REPORT_TITLE.to_string(),
            generated_at,
            project,
            layout: recs.map(|r| r.layout.clone()).unwrap_or_default(),
            navigation: recs.map(|r| r.navigation.clone()).unwrap_or_default(),
            ctq: derived.ctq.clone(),
            kano,
            affinity,
            pareto,
            palette,
            access_focus: recs.map(|r| r.access_focus.clone()).unwrap_or_default(),
            heuristics,
        }
    }
}

/// Joins items with `separator`, or returns [`EMPTY_MARK`] when there are none.
pub fn join_or_dash(items: &[String], separator: &str) -> String {
    if items.is_empty() {
        EMPTY_MARK.to_string()
    } else {
        items.join(separator)
    }
}

/// Returns the text, or [`EMPTY_MARK`] when it is empty.
pub fn text_or_dash(text: &str) -> &str {
    if text.is_empty() {
        EMPTY_MARK
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::Analyzer;
    use crate::domain::heuristics::{HeuristicScore, HeuristicScorer};
    use crate::domain::research::{PainCategory, ResearchInput};

    fn analysed_state() -> AppState {
        let input = ResearchInput {
            domain: "hospital".to_string(),
            voc: vec!["Hard to find results".to_string()],
            pains: vec![
                PainCategory::Navigation,
                PainCategory::Navigation,
                PainCategory::Trust,
                PainCategory::Trust,
                PainCategory::Visual,
            ],
            ..Default::default()
        };
        let mut state = AppState::default();
        state.apply_analysis(input.clone(), Analyzer::run(&input));
        state
    }

    #[test]
    fn empty_state_composes_without_panicking() {
        let model = ReportComposer::compose(&AppState::default(), Timestamp::now());
        assert_eq!(model.title, REPORT_TITLE);
        assert!(model.layout.is_empty());
        assert!(model.palette.is_empty());
        assert!(model.pareto.is_empty());
        assert!(model.affinity.is_empty());
        assert_eq!(model.kano.len(), 3);
        assert_eq!(model.kano[0].title, "Must-be");
    }

    #[test]
    fn pareto_bars_scale_to_max() {
        let model = ReportComposer::compose(&analysed_state(), Timestamp::now());
        assert_eq!(model.pareto.len(), 7);
        assert_eq!(model.pareto[0].label, "navigation");
        assert!((model.pareto[0].width_percent - 100.0).abs() < 1e-9);
        assert!((model.pareto[2].width_percent - 50.0).abs() < 1e-9);
        assert_eq!(model.pareto[6].width_percent, 0.0);
    }

    #[test]
    fn heuristic_bars_scale_to_five() {
        let mut state = analysed_state();
        let mut scores = [HeuristicScore::default(); 10];
        scores[3] = HeuristicScore::clamped(4);
        state.derived.heuristics = HeuristicScorer::rank(scores);

        let model = ReportComposer::compose(&state, Timestamp::now());
        let last = model.heuristics.last().unwrap();
        assert_eq!(last.label, "Consistency/standards");
        assert!((last.width_percent - 80.0).abs() < 1e-9);
        assert_eq!(last.value_text, "4/5");
    }

    #[test]
    fn carries_recommendation_and_palette() {
        let model = ReportComposer::compose(&analysed_state(), Timestamp::now());
        assert!(model.layout.contains(&"Role-based dashboard".to_string()));
        assert_eq!(model.access_focus.len(), 4);
        assert_eq!(model.palette.len(), 9);
        assert_eq!(model.palette[8].name, "bg");
    }

    #[test]
    fn dash_helpers() {
        assert_eq!(join_or_dash(&[], ", "), "—");
        assert_eq!(join_or_dash(&["a".to_string(), "b".to_string()], ", "), "a, b");
        assert_eq!(text_or_dash(""), "—");
        assert_eq!(text_or_dash("x"), "x");
    }
}
