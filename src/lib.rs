//! qdice - Quantum Coin Toss & Dice Simulator
//!
//! Uses a quantum-circuit backend as its randomness source: a Hadamard on
//! every qubit followed by measurement gives uniformly random bits. One qubit
//! makes a coin; three qubits make values 0-7, and rejecting 6 and 7 makes a
//! fair six-sided die.
//!
//! # Architecture
//!
//! - **Circuits**: fixed coin and dice circuit descriptions
//! - **Backends**: pluggable executors (statevector simulator, mock)
//! - **Generator**: batch loop with rejection sampling
//! - **Output**: text report, PNG histograms, optional JSON
//!
//! # Example
//!
//! ```
//! use qdice::backend::statevector::StatevectorSimulator;
//! use qdice::config::Mode;
//! use qdice::generator::{generate, GenerateOptions, Outcome};
//!
//! let mut backend = StatevectorSimulator::with_seed(1);
//! let generation = generate(&mut backend, Mode::Dice, 20, GenerateOptions::default()).unwrap();
//! assert_eq!(generation.samples.len(), 20);
//! assert!(generation.samples.iter().all(|s| matches!(s, Outcome::Face(1..=6))));
//! ```

pub mod backend;
pub mod circuit;
pub mod config;
pub mod generator;
pub mod output;
pub mod stats;

// Re-export commonly used types
pub use backend::Backend;
pub use config::{Mode, RunConfig};
pub use generator::{Generation, Outcome};

/// Result type used throughout qdice
pub type Result<T> = anyhow::Result<T>;

/// Run the full pipeline: generate samples, then write every report artifact
pub fn run(config: &RunConfig, backend: &mut dyn Backend) -> Result<(Generation, output::ReportPaths)> {
    use anyhow::Context;

    config::validator::validate_config(config).context("Configuration validation failed")?;

    let generation = generator::generate(backend, config.mode, config.shots, config.generate_options())?;
    let paths = output::report(config, &generation)?;
    Ok((generation, paths))
}
