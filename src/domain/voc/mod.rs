//! VOC Module - Rule engines over voice-of-customer lines and pain points.
//!
//! # Components
//!
//! - `CtqBuilder` - every matching category contributes; default `Usefulness`
//! - `AffinityGrouper` - first matching category wins; default `Usability`
//! - `ParetoAggregator` - pain-point frequency ranking, stable on ties
//!
//! All engines are total: empty input yields empty output.

mod affinity;
mod ctq;
mod pareto;
mod rules;

pub use affinity::{
    AffinityCategory, AffinityGroup, AffinityGroups, AffinityGrouper, FALLBACK_AFFINITY,
};
pub use ctq::{CtqBuilder, CtqCategory, CtqNode, DEFAULT_CTQ};
pub use pareto::{ParetoAggregator, ParetoEntry};
pub use rules::{all_matches, first_match, KeywordRule};
