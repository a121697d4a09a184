//! Binary signal definitions

use serde::{Deserialize, Serialize};
use crate::types::GateError;

/// A logic level: the only value a gate accepts or produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Signal {
    /// Logic 0
    Low,
    /// Logic 1
    High,
}

impl Signal {
    /// Both levels, Low first
    pub const ALL: [Signal; 2] = [Signal::Low, Signal::High];

    /// Numeric value (0 or 1)
    pub fn bit(self) -> u8 {
        match self {
            Signal::Low => 0,
            Signal::High => 1,
        }
    }

    /// Is this logic 1?
    pub fn is_high(self) -> bool {
        self == Signal::High
    }

    /// Permissive conversion: exactly 1 is High, anything else is Low.
    ///
    /// Never applied implicitly; callers that want the strict rule use
    /// `Signal::try_from`.
    pub fn coerce(value: i64) -> Self {
        if value == 1 {
            Signal::High
        } else {
            Signal::Low
        }
    }
}

impl From<bool> for Signal {
    fn from(value: bool) -> Self {
        if value {
            Signal::High
        } else {
            Signal::Low
        }
    }
}

impl From<Signal> for bool {
    fn from(signal: Signal) -> Self {
        signal.is_high()
    }
}

impl From<Signal> for u8 {
    fn from(signal: Signal) -> Self {
        signal.bit()
    }
}

impl From<Signal> for i64 {
    fn from(signal: Signal) -> Self {
        signal.bit() as i64
    }
}

impl TryFrom<i64> for Signal {
    type Error = GateError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Signal::Low),
            1 => Ok(Signal::High),
            other => Err(GateError::InvalidSignal(other)),
        }
    }
}

impl TryFrom<u8> for Signal {
    type Error = GateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Signal::try_from(value as i64)
    }
}

impl std::fmt::Display for Signal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.bit())
    }
}
