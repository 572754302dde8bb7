//! Configuration module
//!
//! Handles CLI argument parsing, TOML run files, and validation.

pub mod cli;
pub mod toml;
pub mod validator;

use crate::generator::GenerateOptions;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Largest accepted `shots` value
///
/// Every sample is held in memory and written to the report.
pub const MAX_SHOTS: u64 = 10_000_000;

/// What to simulate
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Single-qubit coin toss (H/T)
    Coin,
    /// Three-qubit die with rejection of 6 and 7 (1-6)
    #[default]
    Dice,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Coin => write!(f, "coin"),
            Mode::Dice => write!(f, "dice"),
        }
    }
}

/// Complete run configuration
///
/// Built once per invocation and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    /// Coin or dice
    pub mode: Mode,
    /// Number of final samples to produce
    pub shots: u64,
    /// Output directory for the report and images
    pub out: PathBuf,
    /// Simulator seed (entropy when unset)
    pub seed: Option<u64>,
    /// Upper bound on dice batches (unbounded when unset)
    pub max_batches: Option<usize>,
    /// Also write results.json
    pub json: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            mode: Mode::Dice,
            shots: 100,
            out: PathBuf::from("results"),
            seed: None,
            max_batches: None,
            json: false,
        }
    }
}

impl RunConfig {
    pub fn generate_options(&self) -> GenerateOptions {
        GenerateOptions {
            max_batches: self.max_batches,
        }
    }
}

impl fmt::Display for RunConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  Mode:        {}", self.mode)?;
        writeln!(f, "  Shots:       {}", self.shots)?;
        writeln!(f, "  Output:      {}", self.out.display())?;
        match self.seed {
            Some(seed) => writeln!(f, "  Seed:        {}", seed)?,
            None => writeln!(f, "  Seed:        (entropy)")?,
        }
        if let Some(limit) = self.max_batches {
            writeln!(f, "  Max batches: {}", limit)?;
        }
        write!(f, "  JSON:        {}", if self.json { "yes" } else { "no" })
    }
}
