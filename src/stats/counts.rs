//! Bit-pattern frequency mapping
//!
//! `Counts` is what a backend returns for one batch: measured bit-pattern to
//! number of occurrences. Keys are kept in lexicographic order so iteration,
//! truncation and reporting are all deterministic.

use serde::{Deserialize, Serialize};
use std::collections::btree_map;
use std::collections::BTreeMap;

/// Frequency mapping from bit-pattern to occurrence count
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Counts(BTreeMap<String, u64>);

impl Counts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `count` occurrences of `key`
    pub fn add(&mut self, key: impl Into<String>, count: u64) {
        *self.0.entry(key.into()).or_insert(0) += count;
    }

    /// Occurrences recorded for `key` (0 if absent)
    pub fn get(&self, key: &str) -> u64 {
        self.0.get(key).copied().unwrap_or(0)
    }

    /// Sum of all occurrences
    pub fn total(&self) -> u64 {
        self.0.values().sum()
    }

    /// Accumulate another mapping into this one, summing per key
    pub fn merge(&mut self, other: &Counts) {
        for (key, count) in other.iter() {
            self.add(key, count);
        }
    }

    /// Iterate entries in ascending key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, u64)> for Counts {
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        let mut counts = Counts::new();
        for (key, count) in iter {
            counts.add(key, count);
        }
        counts
    }
}

impl<'a> IntoIterator for &'a Counts {
    type Item = (&'a String, &'a u64);
    type IntoIter = btree_map::Iter<'a, String, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_sorted_iteration() {
        let counts: Counts = [("111", 2), ("000", 5), ("010", 1)].into_iter().collect();
        let keys: Vec<&str> = counts.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["000", "010", "111"]);
        assert_eq!(counts.total(), 8);
    }

    #[test]
    fn test_counts_merge_sums_per_key() {
        let mut total: Counts = [("000", 2), ("110", 1), ("111", 2)].into_iter().collect();
        let second: Counts = [("000", 1), ("101", 4)].into_iter().collect();
        total.merge(&second);

        assert_eq!(total.get("000"), 3);
        assert_eq!(total.get("101"), 4);
        assert_eq!(total.get("110"), 1);
        assert_eq!(total.get("111"), 2);
        assert_eq!(total.get("011"), 0);
        assert_eq!(total.total(), 10);
        assert_eq!(total.len(), 4);
    }

    #[test]
    fn test_counts_duplicate_keys_accumulate() {
        let counts: Counts = [("1", 3), ("1", 4)].into_iter().collect();
        assert_eq!(counts.get("1"), 7);
        assert_eq!(counts.len(), 1);
    }

    #[test]
    fn test_counts_json_is_plain_map() {
        let counts: Counts = [("0", 7), ("1", 3)].into_iter().collect();
        let json = serde_json::to_string(&counts).unwrap();
        assert_eq!(json, r#"{"0":7,"1":3}"#);
    }
}
