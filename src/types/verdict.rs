//! Access verdicts and the reason codes behind them

use serde::{Deserialize, Serialize};
use crate::types::Signal;

/// Outcome of the access circuit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    /// Circuit output 1
    Granted,
    /// Circuit output 0
    Denied,
}

impl Verdict {
    /// Verdict carried by a circuit output
    pub fn from_output(output: Signal) -> Self {
        match output {
            Signal::High => Verdict::Granted,
            Signal::Low => Verdict::Denied,
        }
    }

    /// Get emoji for verdict
    pub fn emoji(&self) -> &'static str {
        match self {
            Verdict::Granted => "🔓",
            Verdict::Denied => "🔒",
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Verdict::Granted => "GRANTED",
            Verdict::Denied => "DENIED",
        };
        write!(f, "{}", name)
    }
}

/// Why the circuit produced its output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[allow(non_camel_case_types)]
pub enum ReasonCode {
    /// Authenticated, permitted, no alarm
    A001_ACCESS_GRANTED,
    /// Alarm active; overrides any credentials
    A002_EMERGENCY_ACTIVE,
    /// Neither authentication nor permission
    A003_NO_CREDENTIALS,
    /// Permission present but authentication missing
    A004_MISSING_AUTHENTICATION,
    /// Authentication present but permission missing
    A005_MISSING_PERMISSION,
}

impl ReasonCode {
    /// Classify an input triple.
    ///
    /// Precedence for denials: alarm, then no credentials at all, then the
    /// single missing credential.
    pub fn classify(a: Signal, b: Signal, c: Signal) -> Self {
        match (a, b, c) {
            (_, _, Signal::High) => Self::A002_EMERGENCY_ACTIVE,
            (Signal::High, Signal::High, Signal::Low) => Self::A001_ACCESS_GRANTED,
            (Signal::Low, Signal::Low, Signal::Low) => Self::A003_NO_CREDENTIALS,
            (Signal::Low, Signal::High, Signal::Low) => Self::A004_MISSING_AUTHENTICATION,
            (Signal::High, Signal::Low, Signal::Low) => Self::A005_MISSING_PERMISSION,
        }
    }

    /// Get the code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::A001_ACCESS_GRANTED => "A001_ACCESS_GRANTED",
            Self::A002_EMERGENCY_ACTIVE => "A002_EMERGENCY_ACTIVE",
            Self::A003_NO_CREDENTIALS => "A003_NO_CREDENTIALS",
            Self::A004_MISSING_AUTHENTICATION => "A004_MISSING_AUTHENTICATION",
            Self::A005_MISSING_PERMISSION => "A005_MISSING_PERMISSION",
        }
    }

    /// Get human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            Self::A001_ACCESS_GRANTED => "Valid credentials and no alarm",
            Self::A002_EMERGENCY_ACTIVE => "Emergency alarm overrides valid credentials",
            Self::A003_NO_CREDENTIALS => "No authentication and no permission",
            Self::A004_MISSING_AUTHENTICATION => "Authentication missing",
            Self::A005_MISSING_PERMISSION => "Permission missing",
        }
    }

    pub fn is_denial(&self) -> bool {
        *self != Self::A001_ACCESS_GRANTED
    }
}

impl std::fmt::Display for ReasonCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code(), self.description())
    }
}
