//! The five fixed walkthrough scenarios

use crate::core::circuit;
use crate::types::{Scenario, ScenarioOutcome};
use crate::types::Signal::{High, Low};

/// Scenarios in walkthrough order
pub fn scenarios() -> Vec<Scenario> {
    vec![
        Scenario::new(1, "Authenticated user with permission, no alarm", High, High, Low, High),
        Scenario::new(2, "Valid credentials during an emergency", High, High, High, Low),
        Scenario::new(3, "Authenticated user without permission", High, Low, Low, Low),
        Scenario::new(4, "Permission without authentication", Low, High, Low, Low),
        Scenario::new(5, "No credentials at all", Low, Low, Low, Low),
    ]
}

/// Run one scenario through the access circuit
pub fn run_scenario(scenario: Scenario) -> ScenarioOutcome {
    let trace = circuit::trace(scenario.a, scenario.b, scenario.c);
    ScenarioOutcome::new(scenario, trace)
}

/// Run every scenario in order
pub fn run_scenarios() -> Vec<ScenarioOutcome> {
    scenarios().into_iter().map(run_scenario).collect()
}

// =============================================================================
// TESTS
// =============================================================================
