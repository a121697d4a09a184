//! Integration tests for the access circuit
//!
//! Tests the full path: signals → gates → circuit → verdict

use pretty_assertions::assert_eq;
use secgate::core::{
    access_circuit, access_circuit_raw, and, circuit_table, not, run_scenarios, scenarios, trace,
    AccessCircuit, LogicFunction,
};
use secgate::types::{GateError, ReasonCode, Signal, Verdict};
use secgate::types::Signal::{High, Low};

/// The five walkthrough scenarios produce the documented outputs
#[test]
fn test_walkthrough_outputs() {
    assert_eq!(access_circuit(High, High, Low), High);
    assert_eq!(access_circuit(High, High, High), Low);
    assert_eq!(access_circuit(High, Low, Low), Low);
    assert_eq!(access_circuit(Low, High, Low), Low);
    assert_eq!(access_circuit(Low, Low, Low), Low);
}

/// Circuit table equals AND(AND(A, B), NOT(C)) on every row
#[test]
fn test_table_matches_formula() {
    let table = circuit_table().unwrap();
    assert_eq!(table.name, "ACCESS");
    assert_eq!(table.input_labels, vec!["A", "B", "C"]);
    assert_eq!(table.len(), 8);

    for row in &table.rows {
        let (a, b, c) = (row.inputs[0], row.inputs[1], row.inputs[2]);
        assert_eq!(row.output, and(and(a, b), not(c)));
    }
}

#[test]
fn test_table_output_column() {
    let table = circuit_table().unwrap();
    assert_eq!(
        table.outputs(),
        vec![Low, Low, Low, Low, Low, Low, High, Low]
    );
    assert_eq!(table.output_for(&[High, High, Low]), Some(High));
    assert_eq!(table.output_for(&[High, High]), None);
}

/// Each call recomputes; the same inputs always give the same output
#[test]
fn test_determinism() {
    for _ in 0..3 {
        assert_eq!(trace(High, High, Low), trace(High, High, Low));
    }
}

#[test]
fn test_trace_reason_codes() {
    assert_eq!(trace(High, High, Low).reason(), ReasonCode::A001_ACCESS_GRANTED);
    assert_eq!(trace(Low, Low, High).reason(), ReasonCode::A002_EMERGENCY_ACTIVE);
    assert_eq!(trace(Low, High, Low).reason(), ReasonCode::A004_MISSING_AUTHENTICATION);
    assert!(!ReasonCode::A001_ACCESS_GRANTED.is_denial());
    assert!(ReasonCode::A005_MISSING_PERMISSION.is_denial());
}

/// Verdict and reason agree on every input triple
#[test]
fn test_verdict_agrees_with_reason() {
    for a in Signal::ALL {
        for b in Signal::ALL {
            for c in Signal::ALL {
                let t = trace(a, b, c);
                assert_eq!(t.verdict() == Verdict::Denied, t.reason().is_denial());
            }
        }
    }
}

#[test]
fn test_scenarios_through_circuit() {
    let outcomes = run_scenarios();
    assert_eq!(outcomes.len(), scenarios().len());
    assert!(outcomes.iter().all(|o| o.matches_expected));
    assert_eq!(outcomes[0].verdict, Verdict::Granted);
    assert_eq!(outcomes[1].reason, ReasonCode::A002_EMERGENCY_ACTIVE);
}

#[test]
fn test_raw_boundary() {
    assert_eq!(access_circuit_raw(1, 1, 0), Ok(1));
    assert_eq!(access_circuit_raw(1, 1, 1), Ok(0));
    assert_eq!(access_circuit_raw(2, 1, 0), Err(GateError::InvalidSignal(2)));
    assert_eq!(
        AccessCircuit.evaluate_raw(&[1, 1]),
        Err(GateError::ArityMismatch { gate: "ACCESS".to_string(), expected: 3, actual: 2 })
    );
}
