//! Gate identifiers

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use crate::types::GateError;

/// The six standard two-valued gates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GateKind {
    And,
    Or,
    Not,
    /// NOT(AND)
    Nand,
    /// NOT(OR)
    Nor,
    Xor,
}

impl GateKind {
    /// All gates in display order
    pub const ALL: [GateKind; 6] = [
        GateKind::And,
        GateKind::Or,
        GateKind::Not,
        GateKind::Nand,
        GateKind::Nor,
        GateKind::Xor,
    ];

    /// Upper-case gate name
    pub fn name(&self) -> &'static str {
        match self {
            GateKind::And => "AND",
            GateKind::Or => "OR",
            GateKind::Not => "NOT",
            GateKind::Nand => "NAND",
            GateKind::Nor => "NOR",
            GateKind::Xor => "XOR",
        }
    }

    /// Number of inputs
    pub fn arity(&self) -> usize {
        match self {
            GateKind::Not => 1,
            _ => 2,
        }
    }

    /// When the output is 1
    pub fn description(&self) -> &'static str {
        match self {
            GateKind::And => "1 only when both inputs are 1",
            GateKind::Or => "1 when at least one input is 1",
            GateKind::Not => "inverts its input",
            GateKind::Nand => "0 only when both inputs are 1",
            GateKind::Nor => "1 only when both inputs are 0",
            GateKind::Xor => "1 when the inputs differ",
        }
    }
}

impl FromStr for GateKind {
    type Err = GateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        GateKind::ALL
            .iter()
            .copied()
            .find(|gate| gate.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| GateError::UnknownGate(wanted.to_string()))
    }
}

impl std::fmt::Display for GateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
