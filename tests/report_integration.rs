//! Integration tests for report output
//!
//! Tests that the report carries every table and scenario, and that
//! JSON and plain text outputs are well formed.

use secgate::core::{banner, render_circuit, render_gate, render_scenarios, Report};
use secgate::types::{GateKind, ScenarioOutcome};
use secgate::VERSION;

#[test]
fn test_report_contents() {
    let report = Report::build().unwrap();
    assert_eq!(report.version, VERSION);
    assert_eq!(report.gates.len(), 6);
    assert_eq!(report.circuit.len(), 8);
    assert_eq!(report.scenarios.len(), 5);
    assert!(report.all_scenarios_pass());
}

#[test]
fn test_json_output_valid() {
    let report = Report::build().unwrap();
    let json = report.to_json().unwrap();

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert!(value["generated_at"].is_string());
    assert_eq!(value["formula"], "OUT = (A AND B) AND (NOT C)");
    assert_eq!(value["circuit"]["rows"][6]["output"], 1);
    assert_eq!(value["scenarios"][1]["verdict"], "DENIED");
    assert_eq!(value["scenarios"][1]["reason"], "A002_EMERGENCY_ACTIVE");

    let outcomes: Vec<ScenarioOutcome> =
        serde_json::from_value(value["scenarios"].clone()).unwrap();
    assert_eq!(outcomes, report.scenarios);
}

#[test]
fn test_plain_text_sections() {
    let report = Report::build().unwrap();

    let head = banner(false);
    assert!(head.contains(VERSION));

    let circuit = render_circuit(&report.circuit, false);
    assert!(circuit.contains("OUT = (A AND B) AND (NOT C)"));
    assert!(circuit.contains(" A | B | C | OUT"));
    assert!(circuit.contains("1 of 8 rows HIGH"));

    let scenarios = render_scenarios(&report.scenarios, false);
    for n in 1..=5 {
        assert!(scenarios.contains(&format!("Scenario {}:", n)));
    }
    assert_eq!(scenarios.matches("GRANTED (").count(), 1);
    assert_eq!(scenarios.matches("DENIED (").count(), 4);
    assert!(scenarios.contains("(A005_MISSING_PERMISSION: Permission missing)"));
}

#[test]
fn test_single_gate_render() {
    let text = render_gate(GateKind::Not, false).unwrap();
    assert!(text.starts_with("NOT: inverts its input"));
    assert!(text.contains(" A | OUT"));
    assert!(text.contains("1 of 2 rows HIGH"));
}
