//! Calculator state record

use serde::{Deserialize, Serialize};

use super::action::BinaryOp;

/// Display/feature mode toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CalculatorMode {
    #[default]
    Basic,
    Scientific,
}

/// Angle unit for trigonometric evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AngleUnit {
    #[default]
    Degrees,
    Radians,
}

/// Calculator state
///
/// Operands are kept as text buffers, not numeric types, so the exact
/// keystrokes survive until evaluation. `operand2` only accepts digits
/// once `operation` is set; history is ordered most-recent-first.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CalculatorState {
    /// Left-hand operand buffer
    pub operand1: String,
    /// Right-hand operand buffer; populated only while `operation` is set
    pub operand2: String,
    /// Pending binary operation, if any
    pub operation: Option<BinaryOp>,
    /// Basic/Scientific display mode
    pub mode: CalculatorMode,
    /// Angle unit for trig evaluation
    pub angle_unit: AngleUnit,
    /// Whether the secondary scientific functions are selected
    pub is_shifted: bool,
    /// Equation history, most recent first
    pub history: Vec<String>,
    /// Whether the history panel is shown
    pub is_history_visible: bool,
}

impl CalculatorState {
    /// Create the initial state for a fresh calculator session
    pub fn new() -> Self {
        Self::default()
    }

    /// The buffer currently accepting digit entry
    ///
    /// operand2 once an operation is pending, operand1 otherwise.
    pub fn active_operand(&self) -> &str {
        if self.operation.is_some() {
            &self.operand2
        } else {
            &self.operand1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_empty() {
        let state = CalculatorState::new();
        assert_eq!(state.operand1, "");
        assert_eq!(state.operand2, "");
        assert_eq!(state.operation, None);
        assert_eq!(state.mode, CalculatorMode::Basic);
        assert_eq!(state.angle_unit, AngleUnit::Degrees);
        assert!(state.history.is_empty());
        assert!(!state.is_history_visible);
        assert!(!state.is_shifted);
    }

    #[test]
    fn test_active_operand_follows_operation() {
        let mut state = CalculatorState::new();
        state.operand1 = "12".to_string();
        assert_eq!(state.active_operand(), "12");

        state.operation = Some(BinaryOp::Add);
        state.operand2 = "3".to_string();
        assert_eq!(state.active_operand(), "3");
    }
}
