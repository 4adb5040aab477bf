//! Terminal renderings of the stored state.
//!
//! Every view is a pure function from state to text so the command layer
//! only decides where the text goes.

use std::fmt::Write;

use crate::domain::accessibility::ContrastCheck;
use crate::domain::heuristics::{HeuristicResult, MAX_SCORE};
use crate::domain::kano::{KanoBucket, KanoRegistry};
use crate::domain::recommendation::{Palette, FALLBACK_COMPONENTS};
use crate::domain::report::{join_or_dash, text_or_dash, EMPTY_MARK};
use crate::domain::state::AppState;
use crate::domain::voc::{AffinityGroups, CtqNode, ParetoAggregator, ParetoEntry};

pub const FILL_FORM_PROMPT: &str = "Fill the form and run analyze to see results.";
pub const RUN_ANALYZE_PROMPT: &str = "Run analyze first.";
pub const NO_PALETTE_PROMPT: &str = "Run analyze first to generate a palette.";
pub const CONTRAST_TARGET_NOTE: &str = "Aim for ≥ 4.5:1 for body text.";
pub const HEURISTICS_FOCUS_NOTE: &str = "Focus on the lowest scores first.";
pub const NO_SCORING_PROMPT: &str = "No scoring yet.";

const BAR_WIDTH: usize = 20;

pub fn summary_view(state: &AppState) -> String {
    let input = &state.input;
    if input.is_blank() {
        return format!("{}\n", FILL_FORM_PROMPT);
    }

    let styles: Vec<String> = input.styles.iter().map(|s| s.key().to_string()).collect();
    let pains: Vec<String> = input.pains.iter().map(|p| p.key().to_string()).collect();

    let mut out = String::new();
    out.push_str("Summary\n");
    let _ = writeln!(out, "  Domain:      {}", input.domain);
    let _ = writeln!(out, "  Audience:    {}", text_or_dash(&input.audience));
    let _ = writeln!(out, "  Top Tasks:   {}", join_or_dash(&input.tasks, ", "));
    let _ = writeln!(out, "  Pain Points: {}", join_or_dash(&pains, ", "));
    let _ = writeln!(out, "  Styles:      {}", join_or_dash(&styles, ", "));

    let recs = state.derived.recs.as_ref();
    out.push_str("\nHigh-level Recommendation\n");
    bullets(&mut out, recs.map(|r| r.layout.as_slice()).unwrap_or(&[]));
    out.push_str("\nNavigation\n");
    bullets(&mut out, recs.map(|r| r.navigation.as_slice()).unwrap_or(&[]));
    out
}

pub fn voc_view(state: &AppState) -> String {
    let derived = &state.derived;
    let mut out = String::new();

    out.push_str("CTQ Tree\n");
    ctq_section(&mut out, &derived.ctq);

    out.push_str("\nAffinity Groups\n");
    affinity_section(&mut out, &derived.affinity);

    out.push_str("\nPareto of Issues\n");
    pareto_section(&mut out, &derived.pareto);

    out.push('\n');
    out.push_str(&kano_view(&derived.kano));
    out
}

fn ctq_section(out: &mut String, ctq: &[CtqNode]) {
    if ctq.is_empty() {
        out.push_str("  Add VOC lines and run analyze to generate a CTQ tree.\n");
        return;
    }
    for node in ctq {
        let _ = writeln!(out, "  Need:  {}", node.need);
        let _ = writeln!(out, "  CTQs:  {}", node.ctq_labels());
        let _ = writeln!(out, "  Specs: {}", node.specs.join(" • "));
        out.push('\n');
    }
}

fn affinity_section(out: &mut String, affinity: &AffinityGroups) {
    if affinity.is_empty() {
        out.push_str("  Provide VOC to see affinity groups.\n");
        return;
    }
    for group in affinity.iter() {
        let _ = writeln!(
            out,
            "  {}: {}",
            group.category.label(),
            join_or_dash(&group.lines, " | ")
        );
    }
}

fn pareto_section(out: &mut String, pareto: &[ParetoEntry]) {
    if pareto.is_empty() {
        out.push_str("  Select pain points to build Pareto.\n");
        return;
    }
    let max = ParetoAggregator::scale(pareto);
    for entry in pareto {
        let _ = writeln!(
            out,
            "  {:<14} {} {}",
            entry.category.key(),
            bar(entry.count, max),
            entry.count
        );
    }
}

/// Kano buckets with the zero-based indices `kano remove` expects.
pub fn kano_view(kano: &KanoRegistry) -> String {
    let mut out = String::from("Kano\n");
    for bucket in KanoBucket::ALL {
        let _ = writeln!(out, "  {}", bucket.title());
        let items = kano.bucket(bucket);
        if items.is_empty() {
            let _ = writeln!(out, "    Add features with `kano add {}`.", bucket.key());
        }
        for (i, item) in items.iter().enumerate() {
            let _ = writeln!(out, "    [{}] {}", i, item);
        }
    }
    out
}

pub fn recommendations_view(state: &AppState) -> String {
    let mut out = String::new();

    match state.derived.recs.as_ref() {
        None => {
            let _ = writeln!(out, "{}", RUN_ANALYZE_PROMPT);
        }
        Some(recs) => {
            section(&mut out, "Navigation & IA", &recs.navigation);
            section(&mut out, "Layout", &recs.layout);
            section(&mut out, "Copy Tone", &recs.tone);
            section(&mut out, "Data Viz", &recs.dataviz);
            section(&mut out, "Accessibility Focus", &recs.access_focus);
            out.push_str("Style Notes\n");
            if recs.style_notes.is_empty() {
                let _ = writeln!(out, "  - {}", EMPTY_MARK);
            }
            bullets(&mut out, &recs.style_notes);
            out.push('\n');
        }
    }

    if let Some(palette) = state.derived.palette.as_ref() {
        out.push_str("Palette\n");
        palette_lines(&mut out, palette);
        out.push('\n');
    }

    out.push_str("Component Checklist\n");
    match state.derived.recs.as_ref() {
        Some(recs) => bullets(&mut out, &recs.components),
        None => {
            for component in FALLBACK_COMPONENTS {
                let _ = writeln!(out, "  - {}", component);
            }
        }
    }
    out
}

fn palette_lines(out: &mut String, palette: &Palette) {
    for (slot, color) in palette.entries() {
        let _ = writeln!(out, "  {:<10} {}", slot.key(), color);
    }
}

pub fn accessibility_view(state: &AppState, checks: Option<&[ContrastCheck]>) -> String {
    let mut out = String::from("Contrast\n");
    out.push_str(&contrast_lines(checks));
    out.push_str("\nNielsen Heuristics\n");
    out.push_str(&heuristics_lines(&state.derived.heuristics));
    out
}

/// Contrast results, or the prompt when no palette exists yet.
pub fn contrast_view(checks: Option<&[ContrastCheck]>) -> String {
    contrast_lines(checks)
}

fn contrast_lines(checks: Option<&[ContrastCheck]>) -> String {
    let Some(checks) = checks else {
        return format!("  {}\n", NO_PALETTE_PROMPT);
    };

    let mut out = String::new();
    for check in checks {
        let _ = writeln!(
            out,
            "  {:<18} {:>8}  {}",
            check.label(),
            check.ratio_display(),
            if check.passes { "pass" } else { "fail" }
        );
    }
    let _ = writeln!(out, "  {}", CONTRAST_TARGET_NOTE);
    out
}

/// Ranked heuristic bars followed by the focus note.
pub fn heuristics_view(results: &[HeuristicResult]) -> String {
    heuristics_lines(results)
}

fn heuristics_lines(results: &[HeuristicResult]) -> String {
    if results.is_empty() {
        return format!("  {}\n", NO_SCORING_PROMPT);
    }

    let mut out = String::new();
    for result in results {
        let _ = writeln!(
            out,
            "  {:<24} {} {}",
            result.label,
            bar(result.score.value() as usize, MAX_SCORE as usize),
            result.score
        );
    }
    let _ = writeln!(out, "  {}", HEURISTICS_FOCUS_NOTE);
    out
}

fn section(out: &mut String, title: &str, items: &[String]) {
    let _ = writeln!(out, "{}", title);
    bullets(out, items);
    out.push('\n');
}

fn bullets(out: &mut String, items: &[String]) {
    for item in items {
        let _ = writeln!(out, "  - {}", item);
    }
}

/// Fixed-width text bar filled in proportion to `value / max`.
fn bar(value: usize, max: usize) -> String {
    let filled = if max == 0 {
        0
    } else {
        (value.min(max) * BAR_WIDTH + max / 2) / max
    };
    format!("[{}{}]", "#".repeat(filled), " ".repeat(BAR_WIDTH - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::accessibility::ContrastEvaluator;
    use crate::domain::analysis::Analyzer;
    use crate::domain::heuristics::{HeuristicScore, HeuristicScorer};
    use crate::domain::research::{PainCategory, ResearchInput, StyleTag};

    fn analysed_state() -> AppState {
        let input = ResearchInput {
            domain: "Clinic".to_string(),
            audience: String::new(),
            tasks: vec!["Book".to_string(), "Pay".to_string()],
            voc: vec!["Search is confusing".to_string()],
            styles: vec![StyleTag::Playful],
            pains: vec![PainCategory::Navigation, PainCategory::Navigation, PainCategory::Trust],
            ..Default::default()
        };
        let mut state = AppState::default();
        state.apply_analysis(input.clone(), Analyzer::run(&input));
        state
    }

    #[test]
    fn summary_prompts_before_analysis() {
        assert_eq!(summary_view(&AppState::default()), format!("{}\n", FILL_FORM_PROMPT));
    }

    #[test]
    fn summary_lists_input_with_dashes() {
        let view = summary_view(&analysed_state());
        assert!(view.contains("Domain:      Clinic"));
        assert!(view.contains("Audience:    —"));
        assert!(view.contains("Top Tasks:   Book, Pay"));
        assert!(view.contains("Pain Points: navigation, trust"));
        assert!(view.contains("Styles:      playful"));
        assert!(view.contains("High-level Recommendation"));
    }

    #[test]
    fn voc_view_empty_prompts() {
        let view = voc_view(&AppState::default());
        assert!(view.contains("Add VOC lines and run analyze to generate a CTQ tree."));
        assert!(view.contains("Provide VOC to see affinity groups."));
        assert!(view.contains("Select pain points to build Pareto."));
        assert!(view.contains("Add features with `kano add must`."));
    }

    #[test]
    fn voc_view_shows_results() {
        let view = voc_view(&analysed_state());
        assert!(view.contains("Need:  Search is confusing"));
        assert!(view.contains("CTQs:  Findability"));
        assert!(view.contains("Navigation: Search is confusing"));
        assert!(view.contains("Performance: —"));
        assert!(view.contains(&format!("navigation     {} 2", bar(2, 2))));
        assert!(view.contains(&format!("trust          {} 1", bar(1, 2))));
    }

    #[test]
    fn kano_view_lists_indices() {
        let mut kano = KanoRegistry::new();
        kano.add(KanoBucket::Performance, "Fast search");
        kano.add(KanoBucket::Performance, "Bulk edit");

        let view = kano_view(&kano);
        assert!(view.contains("    [0] Fast search\n    [1] Bulk edit"));
        assert!(view.contains("Must-be"));
    }

    #[test]
    fn recommendations_fallback_components() {
        let view = recommendations_view(&AppState::default());
        assert!(view.starts_with(RUN_ANALYZE_PROMPT));
        assert!(view.contains("  - Data grid\n  - Filters\n  - Notifications\n  - Help panel\n"));
        assert!(!view.contains("Palette"));
    }

    #[test]
    fn recommendations_with_analysis() {
        let view = recommendations_view(&analysed_state());
        assert!(view.contains("Navigation & IA"));
        assert!(view.contains("Copy Tone"));
        assert!(view.contains("Style Notes"));
        assert!(view.contains("Palette\n  primary"));
        assert!(!view.contains("Help panel"));
    }

    #[test]
    fn contrast_view_without_palette_prompts() {
        assert_eq!(contrast_view(None), format!("  {}\n", NO_PALETTE_PROMPT));
    }

    #[test]
    fn contrast_view_lists_pairs() {
        let state = analysed_state();
        let checks = ContrastEvaluator::evaluate(state.derived.palette.as_ref().unwrap());

        let view = contrast_view(Some(checks.as_slice()));

        assert_eq!(view.lines().count(), 6);
        assert!(view.starts_with("  bg on text"));
        assert!(view.contains(":1  pass") || view.contains(":1  fail"));
        assert!(view.ends_with(&format!("{}\n", CONTRAST_TARGET_NOTE)));
    }

    #[test]
    fn heuristics_view_ranks_and_notes() {
        assert_eq!(heuristics_view(&[]), format!("  {}\n", NO_SCORING_PROMPT));

        let mut scores = [HeuristicScore::clamped(3); 10];
        scores[9] = HeuristicScore::clamped(1);
        let view = heuristics_view(&HeuristicScorer::rank(scores));

        assert!(view.starts_with("  Help & docs"));
        assert!(view.contains(&format!("{} 1/5", bar(1, 5))));
        assert!(view.ends_with(&format!("{}\n", HEURISTICS_FOCUS_NOTE)));
    }

    #[test]
    fn accessibility_view_combines_sections() {
        let view = accessibility_view(&AppState::default(), None);
        assert!(view.contains(NO_PALETTE_PROMPT));
        assert!(view.contains(NO_SCORING_PROMPT));
    }

    #[test]
    fn bar_scales_to_width() {
        assert_eq!(bar(0, 1), format!("[{}]", " ".repeat(BAR_WIDTH)));
        assert_eq!(bar(5, 5), format!("[{}]", "#".repeat(BAR_WIDTH)));
        assert_eq!(bar(1, 2), format!("[{}{}]", "#".repeat(10), " ".repeat(10)));
    }
}
