//! Outcome generation
//!
//! Turns backend frequency batches into labeled coin or dice outcomes.
//!
//! - **Coin**: one batch of `shots` trials on the 1-qubit circuit; '0' is
//!   heads, '1' is tails.
//! - **Dice**: batches of `shots` trials on the 3-qubit circuit until enough
//!   values in 0-5 have been accepted. Values 6 and 7 are rejected, which
//!   keeps the remaining six faces uniform.
//!
//! Batches are expanded in key order, so truncation is deterministic for a
//! given set of counts.

use crate::backend::{execute, Backend};
use crate::circuit::{coin_circuit, dice_circuit};
use crate::config::{Mode, MAX_SHOTS};
use crate::stats::Counts;
use anyhow::{Context, Result};
use std::fmt;
use tracing::{debug, info, warn};

pub mod outcome;

pub use outcome::Outcome;

/// Largest decoded dice value that is kept (maps to face 6)
const MAX_ACCEPTED_DICE_VALUE: u64 = 5;

/// Generator options beyond mode and shot count
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Fail instead of issuing more than this many dice batches
    pub max_batches: Option<usize>,
}

/// Result of one generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generation {
    /// Sum of every batch's frequency mapping, rejected patterns included
    pub raw_counts: Counts,

    /// Exactly `shots` outcomes
    pub samples: Vec<Outcome>,

    /// Number of backend executions
    pub batches: usize,
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} samples from {} batch(es), {} raw shots",
            self.samples.len(),
            self.batches,
            self.raw_counts.total()
        )
    }
}

/// Generate `shots` outcomes for `mode`
pub fn generate(
    backend: &mut dyn Backend,
    mode: Mode,
    shots: u64,
    options: GenerateOptions,
) -> Result<Generation> {
    if shots == 0 {
        anyhow::bail!("shots must be a positive integer, got 0");
    }
    if shots > MAX_SHOTS {
        anyhow::bail!("shots must be between 1 and {}, got {}", MAX_SHOTS, shots);
    }

    let generation = match mode {
        Mode::Coin => generate_coin(backend, shots)?,
        Mode::Dice => generate_dice(backend, shots, options)?,
    };

    info!(mode = %mode, backend = backend.name(), "{}", generation);
    Ok(generation)
}

/// Simulate coin tosses: '0' is heads, '1' is tails
fn generate_coin(backend: &mut dyn Backend, shots: u64) -> Result<Generation> {
    let counts = execute(backend, &coin_circuit(), shots)
        .context("Failed to execute coin circuit")?;

    let mut samples = Vec::new();
    for (key, freq) in counts.iter() {
        let outcome = match bitstring_to_int(key)? {
            0 => Outcome::Heads,
            _ => Outcome::Tails,
        };
        samples.extend(std::iter::repeat(outcome).take(freq as usize));
    }
    samples.truncate(shots as usize);

    Ok(Generation {
        raw_counts: counts,
        samples,
        batches: 1,
    })
}

/// Simulate dice rolls (1-6) with rejection sampling over 3-bit values
fn generate_dice(
    backend: &mut dyn Backend,
    shots: u64,
    options: GenerateOptions,
) -> Result<Generation> {
    let circuit = dice_circuit();
    let target = shots as usize;
    let mut raw_counts = Counts::new();
    let mut samples = Vec::new();
    let mut batches = 0usize;

    loop {
        if let Some(limit) = options.max_batches {
            if batches >= limit {
                anyhow::bail!(
                    "accepted only {} of {} dice samples after {} batches (max_batches reached)",
                    samples.len(),
                    shots,
                    batches
                );
            }
        }

        let counts = execute(backend, &circuit, shots)
            .with_context(|| format!("Failed to execute dice circuit (batch {})", batches + 1))?;
        batches += 1;
        raw_counts.merge(&counts);

        let before = samples.len();
        let mut rejected = 0u64;
        for (key, freq) in counts.iter() {
            let value = bitstring_to_int(key)?;
            if value <= MAX_ACCEPTED_DICE_VALUE {
                let face = Outcome::Face(value as u8 + 1);
                let room = target - samples.len();
                samples.extend(std::iter::repeat(face).take((freq as usize).min(room)));
            } else {
                rejected += freq;
            }
        }

        if samples.len() == before {
            warn!(batch = batches, rejected, "dice batch accepted no samples");
        }
        debug!(batch = batches, accepted = samples.len(), rejected, "dice batch merged");

        if samples.len() >= target {
            break;
        }
    }

    Ok(Generation {
        raw_counts,
        samples,
        batches,
    })
}

/// Convert a bitstring (e.g. "101") to an integer, most significant bit first
pub fn bitstring_to_int(bits: &str) -> Result<u64> {
    if bits.is_empty() || bits.len() > 64 {
        anyhow::bail!("invalid bitstring length {} in backend result", bits.len());
    }
    u64::from_str_radix(bits, 2)
        .with_context(|| format!("invalid bitstring '{}' in backend result", bits))
}
