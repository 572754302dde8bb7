//! Circuit execution backends
//!
//! A backend takes a circuit description and a shot count and returns the
//! frequency of each measured bit-pattern. The generator never talks to a
//! backend directly; it goes through [`execute`], which transpiles the circuit
//! against the backend's capabilities, runs it, and checks the result.
//!
//! # Backends
//!
//! - **Statevector**: in-process simulator, seedable for reproducible runs
//! - **Mock**: scripted responses for tests
//!
//! # Example
//!
//! ```
//! use qdice::backend::{execute, statevector::StatevectorSimulator};
//! use qdice::circuit::coin_circuit;
//!
//! let mut backend = StatevectorSimulator::with_seed(7);
//! let counts = execute(&mut backend, &coin_circuit(), 100).unwrap();
//! assert_eq!(counts.total(), 100);
//! ```

use crate::circuit::{Circuit, GateKind, Instruction};
use crate::stats::Counts;
use thiserror::Error;
use tracing::debug;

pub mod mock;
pub mod statevector;

/// Backend trait for all circuit executors
///
/// Backends only need to handle circuits that passed [`transpile`] against
/// their own capabilities.
pub trait Backend {
    /// Short backend name used in logs
    fn name(&self) -> &str;

    /// Describe what circuits this backend accepts
    fn capabilities(&self) -> BackendCapabilities;

    /// Execute `circuit` for `shots` trials
    ///
    /// Returns a mapping from measured bit-pattern (highest classical bit
    /// first) to its number of occurrences. The counts must sum to `shots`.
    fn run(&mut self, circuit: &Circuit, shots: u64) -> Result<Counts, BackendError>;
}

/// Backend capabilities
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendCapabilities {
    /// Widest circuit the backend can execute
    pub max_qubits: usize,

    /// Gates the backend implements natively
    pub supported_gates: Vec<GateKind>,
}

impl Default for BackendCapabilities {
    fn default() -> Self {
        Self {
            max_qubits: 16,
            supported_gates: vec![GateKind::H, GateKind::X, GateKind::Z],
        }
    }
}

/// Errors raised while preparing or running a circuit
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    #[error("circuit uses {num_qubits} qubits but backend supports at most {max_qubits}")]
    TooManyQubits { num_qubits: usize, max_qubits: usize },

    #[error("gate '{0}' is not supported by this backend")]
    UnsupportedGate(GateKind),

    #[error("gate '{kind}' applied to qubit {qubit} after it was measured")]
    GateAfterMeasure { kind: GateKind, qubit: usize },

    #[error("circuit has no measurements")]
    NoMeasurements,

    #[error("backend returned {actual} total counts for {expected} shots")]
    CountMismatch { expected: u64, actual: u64 },

    #[error("execution failed: {0}")]
    Execution(String),
}

/// Check a circuit against backend capabilities
///
/// Measurements must be terminal: a gate on a qubit that has already been
/// measured is rejected.
pub fn transpile(circuit: &Circuit, caps: &BackendCapabilities) -> Result<Circuit, BackendError> {
    if circuit.num_qubits() > caps.max_qubits {
        return Err(BackendError::TooManyQubits {
            num_qubits: circuit.num_qubits(),
            max_qubits: caps.max_qubits,
        });
    }

    let mut measured = vec![false; circuit.num_qubits()];
    for inst in circuit.instructions() {
        match *inst {
            Instruction::Gate { kind, qubit } => {
                if !caps.supported_gates.contains(&kind) {
                    return Err(BackendError::UnsupportedGate(kind));
                }
                if measured[qubit] {
                    return Err(BackendError::GateAfterMeasure { kind, qubit });
                }
            }
            Instruction::Measure { qubit, .. } => measured[qubit] = true,
        }
    }

    if !measured.iter().any(|&m| m) {
        return Err(BackendError::NoMeasurements);
    }

    Ok(circuit.clone())
}

/// Transpile, run, and verify one batch
pub fn execute(
    backend: &mut dyn Backend,
    circuit: &Circuit,
    shots: u64,
) -> Result<Counts, BackendError> {
    let compiled = transpile(circuit, &backend.capabilities())?;
    let counts = backend.run(&compiled, shots)?;

    let actual = counts.total();
    if actual != shots {
        return Err(BackendError::CountMismatch {
            expected: shots,
            actual,
        });
    }

    debug!(
        backend = backend.name(),
        shots,
        distinct = counts.len(),
        "batch executed"
    );
    Ok(counts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuit::{coin_circuit, dice_circuit};
    use super::mock::MockBackend;

    #[test]
    fn test_transpile_accepts_builtin_circuits() {
        let caps = BackendCapabilities::default();
        assert_eq!(transpile(&coin_circuit(), &caps).unwrap(), coin_circuit());
        assert_eq!(transpile(&dice_circuit(), &caps).unwrap(), dice_circuit());
    }

    #[test]
    fn test_transpile_rejects_wide_circuit() {
        let caps = BackendCapabilities {
            max_qubits: 2,
            ..Default::default()
        };
        assert_eq!(
            transpile(&dice_circuit(), &caps).unwrap_err(),
            BackendError::TooManyQubits { num_qubits: 3, max_qubits: 2 }
        );
    }

    #[test]
    fn test_transpile_rejects_unsupported_gate() {
        let caps = BackendCapabilities {
            max_qubits: 4,
            supported_gates: vec![GateKind::X],
        };
        assert_eq!(
            transpile(&coin_circuit(), &caps).unwrap_err(),
            BackendError::UnsupportedGate(GateKind::H)
        );
    }

    #[test]
    fn test_transpile_rejects_gate_after_measure() {
        let mut qc = Circuit::new(1, 1);
        qc.measure(0, 0).unwrap().h(0).unwrap();
        assert_eq!(
            transpile(&qc, &BackendCapabilities::default()).unwrap_err(),
            BackendError::GateAfterMeasure { kind: GateKind::H, qubit: 0 }
        );
    }

    #[test]
    fn test_transpile_rejects_unmeasured_circuit() {
        let mut qc = Circuit::new(1, 1);
        qc.h(0).unwrap();
        assert_eq!(
            transpile(&qc, &BackendCapabilities::default()).unwrap_err(),
            BackendError::NoMeasurements
        );
    }

    #[test]
    fn test_execute_detects_count_mismatch() {
        let backend = MockBackend::new();
        backend.push_response([("0", 3), ("1", 3)].into_iter().collect());

        let mut runner = backend.clone();
        let err = execute(&mut runner, &coin_circuit(), 10).unwrap_err();
        assert_eq!(err, BackendError::CountMismatch { expected: 10, actual: 6 });
    }

    #[test]
    fn test_execute_does_not_run_rejected_circuit() {
        let backend = MockBackend::with_capabilities(BackendCapabilities {
            max_qubits: 1,
            ..Default::default()
        });

        let mut runner = backend.clone();
        assert!(execute(&mut runner, &dice_circuit(), 10).is_err());
        assert_eq!(backend.run_count(), 0);
    }
}
