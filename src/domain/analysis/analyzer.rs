//! Analyzer - Runs every classifier over one research input.

use crate::domain::recommendation::{DomainClassifier, Palette, PaletteGenerator, Recommendation};
use crate::domain::research::ResearchInput;
use crate::domain::voc::{
    AffinityGrouper, AffinityGroups, CtqBuilder, CtqNode, ParetoAggregator, ParetoEntry,
};

/// Everything one analysis run produces.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub recommendation: Recommendation,
    pub palette: Palette,
    pub ctq: Vec<CtqNode>,
    pub affinity: AffinityGroups,
    pub pareto: Vec<ParetoEntry>,
}

/// Pure analysis pipeline.
pub struct Analyzer;

impl Analyzer {
    /// Runs the domain classifier, palette generator and the three VOC engines.
    pub fn run(input: &ResearchInput) -> Analysis {
        Analysis {
            recommendation: DomainClassifier::recommend(&input.domain, &input.styles),
            palette: PaletteGenerator::generate(&input.domain, &input.styles),
            ctq: CtqBuilder::build(&input.voc),
            affinity: AffinityGrouper::group(&input.voc),
            pareto: ParetoAggregator::aggregate(&input.pains),
        }
    }
}
