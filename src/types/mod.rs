//! Core types for secgate

mod error;
mod signal;
mod gate;
mod table;
mod verdict;
mod scenario;

pub use error::{GateError, Result};
pub use signal::Signal;
pub use gate::GateKind;
pub use table::{TruthRow, TruthTable};
pub use verdict::{Verdict, ReasonCode};
pub use scenario::{CircuitTrace, Scenario, ScenarioOutcome};
