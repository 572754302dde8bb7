//! Statevector simulator backend
//!
//! Simulates the circuit exactly and then samples measurement outcomes from
//! the Born-rule probabilities. H, X and Z all map real amplitudes to real
//! amplitudes, so the state is kept as a vector of `f64`.
//!
//! # Performance
//!
//! Memory is `2^n` amplitudes; sampling is one weighted draw per shot using
//! the xoshiro256++ PRNG.
//!
//! # Example
//!
//! ```
//! use qdice::backend::{Backend, statevector::StatevectorSimulator};
//! use qdice::circuit::dice_circuit;
//!
//! let mut sim = StatevectorSimulator::with_seed(42);
//! let counts = sim.run(&dice_circuit(), 1000).unwrap();
//! assert_eq!(counts.total(), 1000);
//! assert!(counts.iter().all(|(key, _)| key.len() == 3));
//! ```

use super::{Backend, BackendCapabilities, BackendError};
use crate::circuit::{Circuit, GateKind, Instruction};
use crate::stats::Counts;
use rand::distributions::{Distribution, WeightedIndex};
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;
use std::f64::consts::FRAC_1_SQRT_2;

/// Exact statevector simulator with sampled measurement
pub struct StatevectorSimulator {
    rng: Xoshiro256PlusPlus,
    max_qubits: usize,
}

impl StatevectorSimulator {
    /// Default width limit
    pub const DEFAULT_MAX_QUBITS: usize = 16;

    /// Create a simulator seeded from OS entropy
    pub fn new() -> Self {
        Self {
            rng: Xoshiro256PlusPlus::from_entropy(),
            max_qubits: Self::DEFAULT_MAX_QUBITS,
        }
    }

    /// Create a simulator with a specific seed
    ///
    /// Useful for reproducible runs and tests.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Xoshiro256PlusPlus::seed_from_u64(seed),
            max_qubits: Self::DEFAULT_MAX_QUBITS,
        }
    }

    /// Seeded when `seed` is given, entropy-seeded otherwise
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::with_seed(seed),
            None => Self::new(),
        }
    }

    /// Final amplitudes after applying every gate to |0...0>
    ///
    /// Callers check the circuit width against `max_qubits` first.
    fn statevector(circuit: &Circuit) -> Vec<f64> {
        let mut state = vec![0.0; 1usize << circuit.num_qubits()];
        state[0] = 1.0;

        for inst in circuit.instructions() {
            if let Instruction::Gate { kind, qubit } = *inst {
                apply_gate(&mut state, kind, qubit);
            }
        }
        state
    }
}

impl Default for StatevectorSimulator {
    fn default() -> Self {
        Self::new()
    }
}

impl Backend for StatevectorSimulator {
    fn name(&self) -> &str {
        "statevector"
    }

    fn capabilities(&self) -> BackendCapabilities {
        BackendCapabilities {
            max_qubits: self.max_qubits,
            supported_gates: vec![GateKind::H, GateKind::X, GateKind::Z],
        }
    }

    fn run(&mut self, circuit: &Circuit, shots: u64) -> Result<Counts, BackendError> {
        if circuit.num_qubits() > self.max_qubits {
            return Err(BackendError::TooManyQubits {
                num_qubits: circuit.num_qubits(),
                max_qubits: self.max_qubits,
            });
        }

        let state = Self::statevector(circuit);
        let probabilities: Vec<f64> = state.iter().map(|amp| amp * amp).collect();
        let dist = WeightedIndex::new(&probabilities)
            .map_err(|e| BackendError::Execution(format!("invalid probability vector: {}", e)))?;

        let mut hits = vec![0u64; state.len()];
        for _ in 0..shots {
            hits[dist.sample(&mut self.rng)] += 1;
        }

        let measurements: Vec<(usize, usize)> = circuit.measurements().collect();
        let counts = hits
            .iter()
            .enumerate()
            .filter(|(_, &n)| n > 0)
            .map(|(basis, &n)| (bitstring(basis, &measurements, circuit.num_clbits()), n))
            .collect();
        Ok(counts)
    }
}

fn apply_gate(state: &mut [f64], kind: GateKind, qubit: usize) {
    let mask = 1usize << qubit;
    match kind {
        GateKind::H => {
            for i in 0..state.len() {
                if i & mask == 0 {
                    let j = i | mask;
                    let (a, b) = (state[i], state[j]);
                    state[i] = (a + b) * FRAC_1_SQRT_2;
                    state[j] = (a - b) * FRAC_1_SQRT_2;
                }
            }
        }
        GateKind::X => {
            for i in 0..state.len() {
                if i & mask == 0 {
                    state.swap(i, i | mask);
                }
            }
        }
        GateKind::Z => {
            for (i, amp) in state.iter_mut().enumerate() {
                if i & mask != 0 {
                    *amp = -*amp;
                }
            }
        }
    }
}

/// Classical register contents for a basis state, highest clbit first
fn bitstring(basis: usize, measurements: &[(usize, usize)], num_clbits: usize) -> String {
    let mut clbits = vec!['0'; num_clbits];
    for &(qubit, clbit) in measurements {
        clbits[clbit] = if (basis >> qubit) & 1 == 1 { '1' } else { '0' };
    }
    clbits.iter().rev().collect()
}
