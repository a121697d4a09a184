//! Core modules for secgate

pub mod gates;
pub mod circuit;
pub mod truth_table;
pub mod scenarios;
pub mod report;

pub use gates::{and, or, not, nand, nor, xor, input_label, LogicFunction};
pub use circuit::{access_circuit, access_circuit_raw, trace, AccessCircuit, ACCESS_FORMULA};
pub use truth_table::{input_space, truth_table, gate_tables, circuit_table};
pub use scenarios::{scenarios, run_scenario, run_scenarios};
pub use report::{Report, Section, Selection, render_selection, heading, banner, render_table, render_gate, render_gates, render_circuit, render_scenario, render_scenarios};
