//! Secgate: boolean logic gates and the security-gate access circuit
//!
//! Layers, leaves first:
//! types::Signal → core::gates → core::circuit → truth tables, scenarios → report

pub mod core;
pub mod types;

// =============================================================================
// CIRCUIT INPUTS
// =============================================================================

/// Input A: authentication valid
pub const INPUT_AUTHENTICATION: &str = "A";

/// Input B: permission valid
pub const INPUT_PERMISSION: &str = "B";

/// Input C: emergency alarm active
pub const INPUT_EMERGENCY: &str = "C";

/// Largest arity a truth table will enumerate (2^16 rows)
pub const MAX_TABLE_ARITY: usize = 16;

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "1.0.0";
