//! Kano registry - Features classified by the value they deliver.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Kano classification bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KanoBucket {
    Must,
    Performance,
    Delighter,
}

impl KanoBucket {
    pub const ALL: [KanoBucket; 3] = [KanoBucket::Must, KanoBucket::Performance, KanoBucket::Delighter];

    pub fn key(&self) -> &'static str {
        match self {
            KanoBucket::Must => "must",
            KanoBucket::Performance => "performance",
            KanoBucket::Delighter => "delighter",
        }
    }

    /// Heading used in views and reports.
    pub fn title(&self) -> &'static str {
        match self {
            KanoBucket::Must => "Must-be",
            KanoBucket::Performance => "Performance",
            KanoBucket::Delighter => "Delighter",
        }
    }
}

impl fmt::Display for KanoBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for KanoBucket {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "must" | "must-be" => Ok(KanoBucket::Must),
            "performance" => Ok(KanoBucket::Performance),
            "delighter" => Ok(KanoBucket::Delighter),
            other => Err(ValidationError::invalid_format(
                "kano bucket",
                format!("unknown bucket '{}'", other),
            )),
        }
    }
}

/// Three ordered feature lists.
///
/// Changed only by explicit add/remove/clear; analysis never touches it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KanoRegistry {
    pub must: Vec<String>,
    pub performance: Vec<String>,
    pub delighter: Vec<String>,
}

impl KanoRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Features in a bucket.
    pub fn bucket(&self, bucket: KanoBucket) -> &[String] {
        match bucket {
            KanoBucket::Must => &self.must,
            KanoBucket::Performance => &self.performance,
            KanoBucket::Delighter => &self.delighter,
        }
    }

    fn bucket_mut(&mut self, bucket: KanoBucket) -> &mut Vec<String> {
        match bucket {
            KanoBucket::Must => &mut self.must,
            KanoBucket::Performance => &mut self.performance,
            KanoBucket::Delighter => &mut self.delighter,
        }
    }

    /// Appends a feature. Returns false (and changes nothing) when the name is
    /// empty after trimming.
    pub fn add(&mut self, bucket: KanoBucket, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }
        self.bucket_mut(bucket).push(name.to_string());
        true
    }

    /// Removes the feature at `index`. Out-of-range indices change nothing.
    pub fn remove(&mut self, bucket: KanoBucket, index: usize) -> Option<String> {
        let items = self.bucket_mut(bucket);
        if index < items.len() {
            Some(items.remove(index))
        } else {
            None
        }
    }

    /// Empties one bucket.
    pub fn clear_bucket(&mut self, bucket: KanoBucket) {
        self.bucket_mut(bucket).clear();
    }

    /// Empties every bucket.
    pub fn clear(&mut self) {
        for bucket in KanoBucket::ALL {
            self.clear_bucket(bucket);
        }
    }

    /// Total features across buckets.
    pub fn len(&self) -> usize {
        self.must.len() + self.performance.len() + self.delighter.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn add_appends_trimmed_name() {
        let mut kano = KanoRegistry::new();
        assert!(kano.add(KanoBucket::Must, "  Login  "));
        assert!(kano.add(KanoBucket::Must, "Search"));
        assert_eq!(kano.bucket(KanoBucket::Must), &["Login".to_string(), "Search".to_string()]);
        assert!(kano.bucket(KanoBucket::Delighter).is_empty());
    }

    #[test]
    fn add_ignores_blank_names() {
        let mut kano = KanoRegistry::new();
        assert!(!kano.add(KanoBucket::Performance, "   "));
        assert!(!kano.add(KanoBucket::Performance, ""));
        assert!(kano.is_empty());
    }

    #[test]
    fn remove_out_of_range_is_noop() {
        let mut kano = KanoRegistry::new();
        kano.add(KanoBucket::Delighter, "Confetti");
        assert_eq!(kano.remove(KanoBucket::Delighter, 5), None);
        assert_eq!(kano.remove(KanoBucket::Must, 0), None);
        assert_eq!(kano.len(), 1);
    }

    #[test]
    fn remove_returns_removed_item_and_keeps_order() {
        let mut kano = KanoRegistry::new();
        for name in ["a", "b", "c"] {
            kano.add(KanoBucket::Performance, name);
        }
        assert_eq!(kano.remove(KanoBucket::Performance, 1), Some("b".to_string()));
        assert_eq!(kano.bucket(KanoBucket::Performance), &["a".to_string(), "c".to_string()]);
    }

    #[test]
    fn clear_bucket_and_clear_all() {
        let mut kano = KanoRegistry::new();
        kano.add(KanoBucket::Must, "x");
        kano.add(KanoBucket::Delighter, "y");

        kano.clear_bucket(KanoBucket::Must);
        assert!(kano.must.is_empty());
        assert_eq!(kano.len(), 1);

        kano.clear();
        assert!(kano.is_empty());
    }

    #[test]
    fn bucket_parses_from_str() {
        assert_eq!("must".parse::<KanoBucket>().unwrap(), KanoBucket::Must);
        assert_eq!("Must-be".parse::<KanoBucket>().unwrap(), KanoBucket::Must);
        assert_eq!("DELIGHTER".parse::<KanoBucket>().unwrap(), KanoBucket::Delighter);
        assert!("nice-to-have".parse::<KanoBucket>().is_err());
    }

    proptest! {
        #[test]
        fn add_then_remove_restores_bucket(
            existing in prop::collection::vec("[a-z]{1,8}", 0..6),
            name in "[a-z]{1,8}",
        ) {
            let mut kano = KanoRegistry::new();
            for item in &existing {
                kano.add(KanoBucket::Must, item);
            }
            let before = kano.clone();

            prop_assert!(kano.add(KanoBucket::Must, &name));
            let index = kano.bucket(KanoBucket::Must).len() - 1;
            prop_assert_eq!(kano.remove(KanoBucket::Must, index), Some(name));
            prop_assert_eq!(kano, before);
        }
    }
}
