//! Final outcome histogram

use crate::generator::Outcome;
use serde::ser::{Serialize, Serializer};
use std::collections::BTreeMap;

/// Occurrences of each final outcome, ordered ascending by outcome
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutcomeTally(BTreeMap<Outcome, u64>);

impl OutcomeTally {
    /// Tally a sample sequence
    pub fn from_samples(samples: &[Outcome]) -> Self {
        let mut tally = BTreeMap::new();
        for &sample in samples {
            *tally.entry(sample).or_insert(0) += 1;
        }
        Self(tally)
    }

    pub fn get(&self, outcome: Outcome) -> u64 {
        self.0.get(&outcome).copied().unwrap_or(0)
    }

    /// Entries sorted ascending (H before T, faces numerically)
    pub fn iter(&self) -> impl Iterator<Item = (Outcome, u64)> + '_ {
        self.0.iter().map(|(k, v)| (*k, *v))
    }

    pub fn total(&self) -> u64 {
        self.0.values().sum()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for OutcomeTally {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(k, v)| (k.to_string(), v)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tally_orders_faces_numerically() {
        let samples = [
            Outcome::Face(6),
            Outcome::Face(2),
            Outcome::Face(6),
            Outcome::Face(1),
        ];
        let tally = OutcomeTally::from_samples(&samples);
        let entries: Vec<_> = tally.iter().collect();
        assert_eq!(
            entries,
            vec![(Outcome::Face(1), 1), (Outcome::Face(2), 1), (Outcome::Face(6), 2)]
        );
        assert_eq!(tally.total(), 4);
    }

    #[test]
    fn test_tally_heads_before_tails() {
        let samples = [Outcome::Tails, Outcome::Heads, Outcome::Tails];
        let tally = OutcomeTally::from_samples(&samples);
        let labels: Vec<String> = tally.iter().map(|(o, _)| o.to_string()).collect();
        assert_eq!(labels, vec!["H", "T"]);
        assert_eq!(tally.get(Outcome::Tails), 2);
        assert_eq!(tally.get(Outcome::Face(3)), 0);
    }

    #[test]
    fn test_tally_serializes_with_labels() {
        let tally = OutcomeTally::from_samples(&[Outcome::Face(3), Outcome::Face(3)]);
        assert_eq!(serde_json::to_string(&tally).unwrap(), r#"{"3":2}"#);
    }
}
