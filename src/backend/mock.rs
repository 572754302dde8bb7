//! Mock backend for testing
//!
//! Returns scripted frequency mappings instead of simulating anything, so
//! generator and report tests can pin exact counts.
//!
//! # Features
//!
//! - Scripted responses, consumed one per run in FIFO order
//! - Default response when the script is empty: every shot on the all-zero key
//! - Configurable failure
//! - Tracks every run for verification
//!
//! # Example
//!
//! ```
//! use qdice::backend::{Backend, mock::MockBackend};
//! use qdice::circuit::coin_circuit;
//!
//! let backend = MockBackend::new();
//! backend.push_response([("0", 7), ("1", 3)].into_iter().collect());
//!
//! let mut runner = backend.clone();
//! let counts = runner.run(&coin_circuit(), 10).unwrap();
//! assert_eq!(counts.get("0"), 7);
//! assert_eq!(backend.run_count(), 1);
//! ```

use super::{Backend, BackendCapabilities, BackendError};
use crate::circuit::Circuit;
use crate::stats::Counts;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Mock backend for testing
///
/// Clones share their script and run history, so a test can keep one handle
/// for inspection while the generator drives another.
#[derive(Clone)]
pub struct MockBackend {
    /// Responses returned by upcoming runs
    responses: Arc<Mutex<VecDeque<Counts>>>,

    /// Whether runs should fail
    should_fail: Arc<Mutex<bool>>,

    /// Error message to return when runs fail
    error_message: Arc<Mutex<String>>,

    /// Capabilities to report
    capabilities: BackendCapabilities,

    /// Every run seen so far
    runs: Arc<Mutex<Vec<RunRecord>>>,
}

/// Record of one run for test verification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunRecord {
    pub num_qubits: usize,
    pub num_clbits: usize,
    pub shots: u64,
}

impl MockBackend {
    /// Create a mock backend with an empty script
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            should_fail: Arc::new(Mutex::new(false)),
            error_message: Arc::new(Mutex::new("Mock backend error".to_string())),
            capabilities: BackendCapabilities::default(),
            runs: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a mock backend reporting custom capabilities
    pub fn with_capabilities(capabilities: BackendCapabilities) -> Self {
        Self {
            capabilities,
            ..Self::new()
        }
    }

    /// Queue a response for a future run
    pub fn push_response(&self, counts: Counts) {
        self.responses.lock().unwrap().push_back(counts);
    }

    /// Configure the backend to fail all runs
    pub fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.lock().unwrap() = should_fail;
    }

    pub fn set_error_message(&self, message: String) {
        *self.error_message.lock().unwrap() = message;
    }

    /// Number of responses still queued
    pub fn pending_responses(&self) -> usize {
        self.responses.lock().unwrap().len()
    }

    /// Get a copy of all runs for verification
    pub fn runs(&self) -> Vec<RunRecord> {
        self.runs.lock().unwrap().clone()
    }

    pub fn run_count(&self) -> usize {
        self.runs.lock().unwrap().len()
    }
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl Backend for MockBackend {
    fn name(&self) -> &str {
        "mock"
    }

    fn capabilities(&self) -> BackendCapabilities {
        self.capabilities.clone()
    }

    fn run(&mut self, circuit: &Circuit, shots: u64) -> Result<Counts, BackendError> {
        self.runs.lock().unwrap().push(RunRecord {
            num_qubits: circuit.num_qubits(),
            num_clbits: circuit.num_clbits(),
            shots,
        });

        if *self.should_fail.lock().unwrap() {
            let message = self.error_message.lock().unwrap().clone();
            return Err(BackendError::Execution(message));
        }

        let scripted = self.responses.lock().unwrap().pop_front();
        Ok(scripted.unwrap_or_else(|| {
            let zeros = "0".repeat(circuit.num_clbits());
            [(zeros, shots)].into_iter().collect()
        }))
    }
}
