//! Circuit traces and walkthrough scenarios

use serde::{Deserialize, Serialize};
use crate::types::{ReasonCode, Signal, Verdict};

/// Every wire of one access-circuit evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CircuitTrace {
    /// Authentication valid
    pub a: Signal,
    /// Permission valid
    pub b: Signal,
    /// Emergency alarm active
    pub c: Signal,
    /// AND(A, B)
    pub authorized: Signal,
    /// NOT(C)
    pub clear: Signal,
    /// AND(authorized, clear)
    pub output: Signal,
}

impl CircuitTrace {
    pub fn verdict(&self) -> Verdict {
        Verdict::from_output(self.output)
    }

    pub fn reason(&self) -> ReasonCode {
        ReasonCode::classify(self.a, self.b, self.c)
    }
}

/// A named input triple with its expected circuit output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    /// 1-based position in the walkthrough
    pub number: usize,
    pub title: String,
    pub a: Signal,
    pub b: Signal,
    pub c: Signal,
    pub expected: Signal,
}

impl Scenario {
    pub fn new(
        number: usize,
        title: impl Into<String>,
        a: Signal,
        b: Signal,
        c: Signal,
        expected: Signal,
    ) -> Self {
        Self {
            number,
            title: title.into(),
            a,
            b,
            c,
            expected,
        }
    }
}

/// Result of running one scenario through the circuit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioOutcome {
    pub scenario: Scenario,
    pub trace: CircuitTrace,
    pub verdict: Verdict,
    pub reason: ReasonCode,
    /// Did the circuit produce the expected output?
    pub matches_expected: bool,
}

impl ScenarioOutcome {
    pub fn new(scenario: Scenario, trace: CircuitTrace) -> Self {
        let matches_expected = trace.output == scenario.expected;
        Self {
            verdict: trace.verdict(),
            reason: trace.reason(),
            scenario,
            trace,
            matches_expected,
        }
    }
}
