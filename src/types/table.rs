//! Truth table structures

use serde::{Deserialize, Serialize};
use crate::types::Signal;

/// One point of an input domain and the output it produces
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TruthRow {
    pub inputs: Vec<Signal>,
    pub output: Signal,
}

/// Full enumeration of a gate or circuit over its input domain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TruthTable {
    /// Gate or circuit name
    pub name: String,
    /// Column headers for the inputs (A, B, C)
    pub input_labels: Vec<String>,
    /// Rows in binary counting order, first input most significant
    pub rows: Vec<TruthRow>,
}

impl TruthTable {
    /// Number of inputs per row
    pub fn arity(&self) -> usize {
        self.input_labels.len()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows whose output is High
    pub fn ones(&self) -> impl Iterator<Item = &TruthRow> {
        self.rows.iter().filter(|row| row.output.is_high())
    }

    /// Output column only, in row order
    pub fn outputs(&self) -> Vec<Signal> {
        self.rows.iter().map(|row| row.output).collect()
    }

    /// Look up the output for a given input tuple
    pub fn output_for(&self, inputs: &[Signal]) -> Option<Signal> {
        self.rows
            .iter()
            .find(|row| row.inputs == inputs)
            .map(|row| row.output)
    }
}
