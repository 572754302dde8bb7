//! CLI argument parsing using clap

use super::Mode;
use clap::Parser;
use std::path::PathBuf;

/// qdice - Quantum Coin Toss & Dice Simulator
///
/// Flags left unset fall back to the TOML run file (if any), then to the
/// built-in defaults: dice mode, 100 shots, output in "results".
#[derive(Parser, Debug, Default)]
#[command(name = "qdice")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// What to simulate [default: dice]
    #[arg(long, value_enum)]
    pub mode: Option<Mode>,

    /// Number of samples to produce (positive integer) [default: 100]
    #[arg(long)]
    pub shots: Option<u64>,

    /// Output directory [default: results]
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Seed the simulator for reproducible runs
    #[arg(long)]
    pub seed: Option<u64>,

    /// Give up after this many dice batches
    #[arg(long)]
    pub max_batches: Option<usize>,

    /// Also write results.json
    #[arg(long)]
    pub json: bool,

    /// TOML run file
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Validate and print configuration without running
    #[arg(long)]
    pub dry_run: bool,
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
