//! Gate library: six pure boolean operators over `Signal`
//!
//! AND, OR, NOT and XOR are primitive. NAND and NOR are built from them:
//! - NAND(a, b) = NOT(AND(a, b))
//! - NOR(a, b)  = NOT(OR(a, b))

use crate::types::{GateError, GateKind, Result, Signal};

/// Anything that maps a fixed number of signals to one signal.
///
/// Implemented by every gate and by the access circuit so that tables and
/// reports can treat them uniformly.
pub trait LogicFunction {
    /// Display name
    fn name(&self) -> &str;

    /// Number of inputs
    fn arity(&self) -> usize;

    /// Column headers for the inputs, one per input
    fn input_labels(&self) -> Vec<String> {
        (0..self.arity()).map(input_label).collect()
    }

    /// Evaluate on exactly `arity()` inputs
    fn evaluate(&self, inputs: &[Signal]) -> Result<Signal>;

    /// Evaluate integer inputs, rejecting anything other than 0 or 1
    fn evaluate_raw(&self, inputs: &[i64]) -> Result<i64> {
        let signals = inputs
            .iter()
            .map(|&value| Signal::try_from(value))
            .collect::<Result<Vec<_>>>()?;
        self.evaluate(&signals).map(i64::from)
    }
}

/// Header for input `index`: A..Z, then I26, I27, ...
pub fn input_label(index: usize) -> String {
    match u8::try_from(index) {
        Ok(i) if i < 26 => char::from(b'A' + i).to_string(),
        _ => format!("I{}", index),
    }
}

/// Check the input count before evaluation
pub(crate) fn check_arity(name: &str, expected: usize, inputs: &[Signal]) -> Result<()> {
    if inputs.len() != expected {
        return Err(GateError::ArityMismatch {
            gate: name.to_string(),
            expected,
            actual: inputs.len(),
        });
    }
    Ok(())
}

/// 1 iff both inputs are 1
pub fn and(a: Signal, b: Signal) -> Signal {
    if a == Signal::High && b == Signal::High {
        Signal::High
    } else {
        Signal::Low
    }
}

/// 1 iff at least one input is 1
pub fn or(a: Signal, b: Signal) -> Signal {
    if a == Signal::High || b == Signal::High {
        Signal::High
    } else {
        Signal::Low
    }
}

/// 1 iff the input is 0
pub fn not(a: Signal) -> Signal {
    match a {
        Signal::High => Signal::Low,
        Signal::Low => Signal::High,
    }
}

pub fn nand(a: Signal, b: Signal) -> Signal {
    not(and(a, b))
}

pub fn nor(a: Signal, b: Signal) -> Signal {
    not(or(a, b))
}

/// 1 iff the inputs differ
pub fn xor(a: Signal, b: Signal) -> Signal {
    Signal::from(a != b)
}

impl LogicFunction for GateKind {
    fn name(&self) -> &str {
        GateKind::name(self)
    }

    fn arity(&self) -> usize {
        GateKind::arity(self)
    }

    fn evaluate(&self, inputs: &[Signal]) -> Result<Signal> {
        check_arity(GateKind::name(self), GateKind::arity(self), inputs)?;
        let out = match self {
            GateKind::Not => not(inputs[0]),
            GateKind::And => and(inputs[0], inputs[1]),
            GateKind::Or => or(inputs[0], inputs[1]),
            GateKind::Nand => nand(inputs[0], inputs[1]),
            GateKind::Nor => nor(inputs[0], inputs[1]),
            GateKind::Xor => xor(inputs[0], inputs[1]),
        };
        Ok(out)
    }
}

// =============================================================================
// TESTS
// =============================================================================
