//! Application state: the research input and everything derived from it.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::analysis::Analysis;
use crate::domain::heuristics::HeuristicResult;
use crate::domain::kano::KanoRegistry;
use crate::domain::recommendation::{Palette, Recommendation};
use crate::domain::research::ResearchInput;
use crate::domain::voc::{AffinityGroups, CtqNode, ParetoEntry};

/// Derived results.
///
/// `recs` through `pareto` are replaced together by each analysis. `kano` and
/// `heuristics` are side registries that analysis never touches.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Derived {
    pub recs: Option<Recommendation>,
    pub palette: Option<Palette>,
    pub ctq: Vec<CtqNode>,
    pub affinity: AffinityGroups,
    pub pareto: Vec<ParetoEntry>,
    pub kano: KanoRegistry,
    pub heuristics: Vec<HeuristicResult>,
}

impl Derived {
    /// Replaces every analysis-owned field; side registries are kept.
    pub fn apply_analysis(&mut self, analysis: Analysis) {
        self.recs = Some(analysis.recommendation);
        self.palette = Some(analysis.palette);
        self.ctq = analysis.ctq;
        self.affinity = analysis.affinity;
        self.pareto = analysis.pareto;
    }
}

/// The whole persisted state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppState {
    pub input: ResearchInput,
    pub derived: Derived,
}

/// Result of decoding a stored snapshot.
#[derive(Debug, Clone, Default)]
pub struct DecodedSnapshot {
    pub state: AppState,
    /// Human-readable descriptions of what was discarded.
    pub discarded: Vec<String>,
}

impl AppState {
    /// Replaces the input and every analysis-owned result.
    pub fn apply_analysis(&mut self, input: ResearchInput, analysis: Analysis) {
        self.input = input;
        self.derived.apply_analysis(analysis);
    }

    /// Serializes the full snapshot.
    pub fn to_snapshot(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Decodes a snapshot without ever failing.
    ///
    /// Unparsable JSON, or JSON that is not an object, yields the default
    /// state. Otherwise `input` and `derived` are each merged key by key onto
    /// their defaults; a key whose value does not fit is dropped and reported.
    pub fn from_snapshot(json: &str) -> DecodedSnapshot {
        let mut discarded = Vec::new();

        let root = match serde_json::from_str::<Value>(json) {
            Ok(Value::Object(map)) => map,
            Ok(_) => {
                discarded.push("snapshot is not a JSON object".to_string());
                return DecodedSnapshot { state: AppState::default(), discarded };
            }
            Err(e) => {
                discarded.push(format!("snapshot is not valid JSON: {}", e));
                return DecodedSnapshot { state: AppState::default(), discarded };
            }
        };

        let mut state = AppState::default();
        if let Some(stored) = root.get("input") {
            state.input = merge_section("input", stored, &mut discarded);
        }
        if let Some(stored) = root.get("derived") {
            state.derived = merge_section("derived", stored, &mut discarded);
        }

        DecodedSnapshot { state, discarded }
    }
}

/// Shallow merge of a stored object onto `T::default()`.
fn merge_section<T>(section: &str, stored: &Value, discarded: &mut Vec<String>) -> T
where
    T: Default + Serialize + DeserializeOwned,
{
    let Some(stored) = stored.as_object() else {
        discarded.push(format!("{} is not an object", section));
        return T::default();
    };

    let mut merged: Map<String, Value> = match serde_json::to_value(T::default()) {
        Ok(Value::Object(map)) => map,
        _ => return T::default(),
    };

    for (key, value) in stored {
        let mut candidate = merged.clone();
        candidate.insert(key.clone(), value.clone());
        if serde_json::from_value::<T>(Value::Object(candidate.clone())).is_ok() {
            merged = candidate;
        } else {
            discarded.push(format!("{}.{}", section, key));
        }
    }

    serde_json::from_value(Value::Object(merged)).unwrap_or_default()
}
