//! Error types for secgate

use thiserror::Error;

/// Failures at the boundary of the gate library
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GateError {
    /// Input is not exactly 0 or 1
    #[error("Invalid signal: {0} (expected 0 or 1)")]
    InvalidSignal(i64),

    /// Wrong number of inputs for a gate or circuit
    #[error("Arity mismatch for {gate}: expected {expected} inputs, got {actual}")]
    ArityMismatch {
        gate: String,
        expected: usize,
        actual: usize,
    },

    /// Input domain too large to enumerate
    #[error("Arity {arity} too large to enumerate (maximum {max})")]
    ArityTooLarge { arity: usize, max: usize },

    /// Report could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Gate name not recognized
    #[error("Unknown gate: {0}")]
    UnknownGate(String),
}

pub type Result<T> = std::result::Result<T, GateError>;
