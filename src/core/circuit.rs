//! Access circuit: decides whether the security gate opens
//!
//! OUT = (A AND B) AND (NOT C)
//!
//! - A: authentication valid
//! - B: permission valid
//! - C: emergency alarm active

use crate::core::gates::{self, check_arity, LogicFunction};
use crate::types::{CircuitTrace, Result, Signal};
use crate::{INPUT_AUTHENTICATION, INPUT_EMERGENCY, INPUT_PERMISSION};

/// Formula printed alongside the circuit table
pub const ACCESS_FORMULA: &str = "OUT = (A AND B) AND (NOT C)";

/// Evaluate the circuit. 1 means access granted.
pub fn access_circuit(a: Signal, b: Signal, c: Signal) -> Signal {
    trace(a, b, c).output
}

/// Evaluate the circuit and keep the intermediate wires
pub fn trace(a: Signal, b: Signal, c: Signal) -> CircuitTrace {
    let authorized = gates::and(a, b);
    let clear = gates::not(c);
    let output = gates::and(authorized, clear);
    CircuitTrace {
        a,
        b,
        c,
        authorized,
        clear,
        output,
    }
}

/// Integer entry point; inputs other than 0 or 1 are rejected
pub fn access_circuit_raw(a: i64, b: i64, c: i64) -> Result<i64> {
    AccessCircuit.evaluate_raw(&[a, b, c])
}

/// The circuit as a three-input logic function
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AccessCircuit;

impl LogicFunction for AccessCircuit {
    fn name(&self) -> &str {
        "ACCESS"
    }

    fn arity(&self) -> usize {
        3
    }

    fn input_labels(&self) -> Vec<String> {
        vec![
            INPUT_AUTHENTICATION.to_string(),
            INPUT_PERMISSION.to_string(),
            INPUT_EMERGENCY.to_string(),
        ]
    }

    fn evaluate(&self, inputs: &[Signal]) -> Result<Signal> {
        check_arity(self.name(), self.arity(), inputs)?;
        Ok(access_circuit(inputs[0], inputs[1], inputs[2]))
    }
}

// =============================================================================
// TESTS
// =============================================================================
