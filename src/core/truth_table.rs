//! Truth-table enumeration
//!
//! Pure: produces rows, never prints. Rows follow binary counting order
//! with the first input as the most significant bit.

use crate::core::gates::LogicFunction;
use crate::types::{GateError, GateKind, Result, Signal, TruthRow, TruthTable};
use crate::core::circuit::AccessCircuit;
use crate::MAX_TABLE_ARITY;

/// Every input tuple of the given arity, in binary counting order.
///
/// Fails with `ArityTooLarge` above `MAX_TABLE_ARITY`.
pub fn input_space(arity: usize) -> Result<Vec<Vec<Signal>>> {
    if arity > MAX_TABLE_ARITY {
        return Err(GateError::ArityTooLarge {
            arity,
            max: MAX_TABLE_ARITY,
        });
    }

    Ok((0..1usize << arity)
        .map(|index| {
            (0..arity)
                .rev()
                .map(|bit| Signal::from((index >> bit) & 1 == 1))
                .collect()
        })
        .collect())
}

/// Enumerate a gate or circuit over its full input domain
pub fn truth_table(function: &dyn LogicFunction) -> Result<TruthTable> {
    let rows = input_space(function.arity())?
        .into_iter()
        .map(|inputs| {
            let output = function.evaluate(&inputs)?;
            Ok(TruthRow { inputs, output })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(TruthTable {
        name: function.name().to_string(),
        input_labels: function.input_labels(),
        rows,
    })
}

/// Tables for all six gates, in display order
pub fn gate_tables() -> Result<Vec<TruthTable>> {
    GateKind::ALL.iter().map(|gate| truth_table(gate)).collect()
}

/// The 8-row access-circuit table
pub fn circuit_table() -> Result<TruthTable> {
    truth_table(&AccessCircuit)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Signal::{High, Low};

    #[test]
    fn test_input_space_sizes() {
        assert_eq!(input_space(0).unwrap(), vec![Vec::<Signal>::new()]);
        assert_eq!(input_space(1).unwrap().len(), 2);
        assert_eq!(input_space(2).unwrap().len(), 4);
        assert_eq!(input_space(3).unwrap().len(), 8);
    }

    #[test]
    fn test_input_space_bounded() {
        assert_eq!(input_space(MAX_TABLE_ARITY).unwrap().len(), 1 << MAX_TABLE_ARITY);
        assert_eq!(
            input_space(64),
            Err(GateError::ArityTooLarge { arity: 64, max: MAX_TABLE_ARITY })
        );
    }

    /// Five-input majority vote, wider than any built-in gate
    struct Majority5;

    impl LogicFunction for Majority5 {
        fn name(&self) -> &str {
            "MAJ5"
        }

        fn arity(&self) -> usize {
            5
        }

        fn evaluate(&self, inputs: &[Signal]) -> Result<Signal> {
            let highs = inputs.iter().filter(|s| s.is_high()).count();
            Ok(Signal::from(highs >= 3))
        }
    }

    /// Huge arity that must be refused rather than enumerated
    struct Wide;

    impl LogicFunction for Wide {
        fn name(&self) -> &str {
            "WIDE"
        }

        fn arity(&self) -> usize {
            64
        }

        fn evaluate(&self, _inputs: &[Signal]) -> Result<Signal> {
            Ok(Low)
        }
    }

    #[test]
    fn test_labels_follow_arity_past_four() {
        let table = truth_table(&Majority5).unwrap();
        assert_eq!(table.input_labels, vec!["A", "B", "C", "D", "E"]);
        assert_eq!(table.arity(), 5);
        assert!(table.rows.iter().all(|row| row.inputs.len() == table.arity()));
        assert_eq!(table.len(), 32);
        assert_eq!(table.ones().count(), 16);
    }

    #[test]
    fn test_oversized_table_refused() {
        assert_eq!(
            truth_table(&Wide),
            Err(GateError::ArityTooLarge { arity: 64, max: MAX_TABLE_ARITY })
        );
    }

    #[test]
    fn test_input_space_order() {
        assert_eq!(
            input_space(2).unwrap(),
            vec![vec![Low, Low], vec![Low, High], vec![High, Low], vec![High, High]]
        );
        let three = input_space(3).unwrap();
        assert_eq!(three[1], vec![Low, Low, High]);
        assert_eq!(three[6], vec![High, High, Low]);
    }

    #[test]
    fn test_and_table() {
        let table = truth_table(&GateKind::And).unwrap();
        assert_eq!(table.name, "AND");
        assert!(!table.is_empty());
        assert_eq!(table.outputs(), vec![Low, Low, Low, High]);
        assert_eq!(table.ones().count(), 1);
    }

    #[test]
    fn test_not_table() {
        let table = truth_table(&GateKind::Not).unwrap();
        assert_eq!(table.arity(), 1);
        assert_eq!(table.outputs(), vec![High, Low]);
    }

    #[test]
    fn test_gate_tables_cover_all_gates() {
        let tables = gate_tables().unwrap();
        let names: Vec<_> = tables.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["AND", "OR", "NOT", "NAND", "NOR", "XOR"]);
    }

    #[test]
    fn test_circuit_table_single_one() {
        let table = circuit_table().unwrap();
        assert_eq!(table.len(), 8);
        let ones: Vec<_> = table.ones().map(|row| row.inputs.clone()).collect();
        assert_eq!(ones, vec![vec![High, High, Low]]);
    }
}
