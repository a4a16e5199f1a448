//! Action and operator types for the calculator reducer
//!
//! Actions are the only way the presentation layer mutates calculator
//! state. They are processed by [`apply`](super::apply), which takes
//! ownership of the current state and returns the next one.

use serde::{Deserialize, Serialize};

/// Pending binary operation between the two operand buffers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    /// Percent-of: `operand1 × (operand2 / 100)`
    Percent,
    /// Exponentiation: `operand1 ^ operand2`
    Power,
}

impl BinaryOp {
    /// Display symbol used in equation history strings
    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Subtract => "-",
            BinaryOp::Multiply => "×",
            BinaryOp::Divide => "÷",
            BinaryOp::Percent => "%",
            BinaryOp::Power => "^",
        }
    }
}

/// Single-operand scientific function applied to operand1
///
/// `Pi` and `E` are constants rather than functions: they populate
/// operand1 with the constant even when no input has been entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScientificFn {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    /// Base-10 logarithm
    Log,
    /// Natural logarithm
    Ln,
    Square,
    Cube,
    /// e raised to the operand
    EPower,
    /// 10 raised to the operand
    TenPower,
    Sqrt,
    Cbrt,
    /// Defined for non-negative integral operands only
    Factorial,
    /// 1/x; undefined at zero
    Reciprocal,
    Pi,
    E,
}

/// All operations accepted by the calculator reducer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CalculatorAction {
    /// Append a digit (0-9) to the active operand buffer
    Digit(u8),
    /// Append a decimal point to the active operand buffer
    Decimal,
    /// Set the pending binary operation
    Operation(BinaryOp),
    /// Apply a scientific function to operand1
    Scientific(ScientificFn),
    /// Evaluate the pending binary operation
    Calculate,
    /// Reset operands and operation; mode, shift, and history survive
    Clear,
    /// Backspace: operand2 first, then the operation, then operand1
    Delete,
    /// Flip Basic/Scientific display mode
    ToggleMode,
    /// Flip Degrees/Radians; does not re-evaluate prior results
    ToggleAngleUnit,
    /// Flip the shift flag selecting secondary scientific functions
    Shift,
    ShowHistory,
    HideHistory,
    /// Empty the history and persist the empty list
    ClearHistory,
    /// Seed history from the external store, once at startup
    HistoryLoaded(Vec<String>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_op_symbols() {
        assert_eq!(BinaryOp::Add.symbol(), "+");
        assert_eq!(BinaryOp::Divide.symbol(), "÷");
        assert_eq!(BinaryOp::Power.symbol(), "^");
    }

    #[test]
    fn test_action_clone_round_trip() {
        let action = CalculatorAction::Operation(BinaryOp::Multiply);
        assert_eq!(action.clone(), action);
    }
}
