//! Final outcome labels

use serde::{Serialize, Serializer};
use std::fmt;

/// A single realized result
///
/// Ordering puts heads before tails and compares die faces numerically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Outcome {
    Heads,
    Tails,
    /// Die face, 1 through 6
    Face(u8),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Heads => write!(f, "H"),
            Outcome::Tails => write!(f, "T"),
            Outcome::Face(n) => write!(f, "{}", n),
        }
    }
}

impl Serialize for Outcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Outcome::Face(n) => serializer.serialize_u8(*n),
            other => serializer.collect_str(other),
        }
    }
}
