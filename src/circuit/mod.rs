//! Quantum circuit descriptions
//!
//! A circuit is a flat list of instructions over a fixed number of qubits and
//! classical bits. Only the gates needed by the coin and dice programs (plus a
//! couple of deterministic ones useful for checking backends) are modeled.
//!
//! # Example
//!
//! ```
//! use qdice::circuit::Circuit;
//!
//! let mut qc = Circuit::new(1, 1);
//! qc.h(0).unwrap();
//! qc.measure(0, 0).unwrap();
//! assert_eq!(qc.num_qubits(), 1);
//! assert_eq!(qc.instructions().len(), 2);
//! ```

use std::fmt;
use thiserror::Error;

/// Errors raised while building a circuit
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CircuitError {
    #[error("qubit index {index} out of range for {num_qubits}-qubit circuit")]
    QubitOutOfRange { index: usize, num_qubits: usize },

    #[error("classical bit index {index} out of range for circuit with {num_clbits} classical bits")]
    ClbitOutOfRange { index: usize, num_clbits: usize },
}

/// Single-qubit gate kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GateKind {
    /// Hadamard: maps |0> to an equal superposition of |0> and |1>
    H,
    /// Pauli-X (bit flip)
    X,
    /// Pauli-Z (phase flip)
    Z,
}

impl fmt::Display for GateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GateKind::H => write!(f, "h"),
            GateKind::X => write!(f, "x"),
            GateKind::Z => write!(f, "z"),
        }
    }
}

/// One circuit instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    /// Apply a gate to a qubit
    Gate { kind: GateKind, qubit: usize },
    /// Measure a qubit into a classical bit
    Measure { qubit: usize, clbit: usize },
}

/// Circuit description handed to a backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Circuit {
    num_qubits: usize,
    num_clbits: usize,
    instructions: Vec<Instruction>,
}

impl Circuit {
    /// Create an empty circuit
    pub fn new(num_qubits: usize, num_clbits: usize) -> Self {
        Self {
            num_qubits,
            num_clbits,
            instructions: Vec::new(),
        }
    }

    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    pub fn num_clbits(&self) -> usize {
        self.num_clbits
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Apply a Hadamard gate
    pub fn h(&mut self, qubit: usize) -> Result<&mut Self, CircuitError> {
        self.gate(GateKind::H, qubit)
    }

    /// Apply a Pauli-X gate
    pub fn x(&mut self, qubit: usize) -> Result<&mut Self, CircuitError> {
        self.gate(GateKind::X, qubit)
    }

    /// Apply a Pauli-Z gate
    pub fn z(&mut self, qubit: usize) -> Result<&mut Self, CircuitError> {
        self.gate(GateKind::Z, qubit)
    }

    /// Apply an arbitrary supported gate
    pub fn gate(&mut self, kind: GateKind, qubit: usize) -> Result<&mut Self, CircuitError> {
        self.check_qubit(qubit)?;
        self.instructions.push(Instruction::Gate { kind, qubit });
        Ok(self)
    }

    /// Measure `qubit` into classical bit `clbit`
    pub fn measure(&mut self, qubit: usize, clbit: usize) -> Result<&mut Self, CircuitError> {
        self.check_qubit(qubit)?;
        if clbit >= self.num_clbits {
            return Err(CircuitError::ClbitOutOfRange {
                index: clbit,
                num_clbits: self.num_clbits,
            });
        }
        self.instructions.push(Instruction::Measure { qubit, clbit });
        Ok(self)
    }

    /// Iterate over (qubit, clbit) measurement pairs in program order
    pub fn measurements(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.instructions.iter().filter_map(|inst| match *inst {
            Instruction::Measure { qubit, clbit } => Some((qubit, clbit)),
            Instruction::Gate { .. } => None,
        })
    }

    fn check_qubit(&self, qubit: usize) -> Result<(), CircuitError> {
        if qubit >= self.num_qubits {
            return Err(CircuitError::QubitOutOfRange {
                index: qubit,
                num_qubits: self.num_qubits,
            });
        }
        Ok(())
    }
}

/// 1-qubit coin toss circuit: Hadamard then measure
pub fn coin_circuit() -> Circuit {
    uniform_circuit(1)
}

/// 3-qubit dice circuit: Hadamard on each qubit, then measure all.
///
/// Produces values 0-7; the generator rejects 6 and 7.
pub fn dice_circuit() -> Circuit {
    uniform_circuit(3)
}

fn uniform_circuit(width: usize) -> Circuit {
    let mut instructions = Vec::with_capacity(width * 2);
    instructions.extend((0..width).map(|qubit| Instruction::Gate { kind: GateKind::H, qubit }));
    instructions.extend((0..width).map(|qubit| Instruction::Measure { qubit, clbit: qubit }));
    Circuit {
        num_qubits: width,
        num_clbits: width,
        instructions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coin_circuit_layout() {
        let qc = coin_circuit();
        assert_eq!(qc.num_qubits(), 1);
        assert_eq!(qc.num_clbits(), 1);
        assert_eq!(
            qc.instructions(),
            &[
                Instruction::Gate { kind: GateKind::H, qubit: 0 },
                Instruction::Measure { qubit: 0, clbit: 0 },
            ]
        );
    }

    #[test]
    fn test_dice_circuit_layout() {
        let qc = dice_circuit();
        assert_eq!(qc.num_qubits(), 3);
        assert_eq!(qc.num_clbits(), 3);

        let gates = qc
            .instructions()
            .iter()
            .filter(|i| matches!(i, Instruction::Gate { kind: GateKind::H, .. }))
            .count();
        assert_eq!(gates, 3);
        assert_eq!(qc.measurements().collect::<Vec<_>>(), vec![(0, 0), (1, 1), (2, 2)]);
    }

    #[test]
    fn test_builder_rejects_bad_indices() {
        let mut qc = Circuit::new(2, 1);
        assert_eq!(
            qc.h(2).unwrap_err(),
            CircuitError::QubitOutOfRange { index: 2, num_qubits: 2 }
        );
        assert_eq!(
            qc.measure(1, 1).unwrap_err(),
            CircuitError::ClbitOutOfRange { index: 1, num_clbits: 1 }
        );
        assert!(qc.instructions().is_empty());
    }

    #[test]
    fn test_builder_chaining() {
        let mut qc = Circuit::new(2, 2);
        qc.x(0).unwrap().z(1).unwrap().measure(0, 1).unwrap();
        assert_eq!(qc.instructions().len(), 3);
        assert_eq!(qc.measurements().collect::<Vec<_>>(), vec![(0, 1)]);
    }
}
