//! Functional-boundary apply function for the calculator
//!
//! `apply()` is the single entry point for calculator state mutation. It
//! takes ownership of the current state, applies one action, and returns
//! the next state together with an optional side effect for the caller to
//! execute.
//!
//! ## Contract
//!
//! - **Total**: every action produces a valid next state; rejected input
//!   (full buffer, duplicate decimal point, operator with no left operand,
//!   unparseable operand) leaves the state unchanged.
//! - **No panics**: defensive parsing failures are silent no-ops.
//! - **Pure**: the only side channel is the returned [`Effect`]; the
//!   reducer itself performs no I/O.

use super::action::{BinaryOp, CalculatorAction, ScientificFn};
use super::eval::{self, MAX_INPUT_LENGTH};
use super::state::{AngleUnit, CalculatorMode, CalculatorState};

/// Side effect requested by the reducer, executed by the caller
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Persist the full updated history list (fire-and-forget write)
    PersistHistory(Vec<String>),
}

/// Result of applying one action: the next state plus an optional effect
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub state: CalculatorState,
    pub effect: Option<Effect>,
}

impl Transition {
    fn new(state: CalculatorState) -> Self {
        Self {
            state,
            effect: None,
        }
    }

    fn with_effect(state: CalculatorState, effect: Effect) -> Self {
        Self {
            state,
            effect: Some(effect),
        }
    }
}

/// Apply a calculator action, returning the next state
///
/// # Example
///
/// ```
/// use reckon_core::calculator::{apply, CalculatorAction, CalculatorState, BinaryOp};
///
/// let mut state = CalculatorState::new();
/// for action in [
///     CalculatorAction::Digit(6),
///     CalculatorAction::Operation(BinaryOp::Divide),
///     CalculatorAction::Digit(2),
///     CalculatorAction::Calculate,
/// ] {
///     state = apply(state, action).state;
/// }
/// assert_eq!(state.operand1, "3");
/// ```
pub fn apply(state: CalculatorState, action: CalculatorAction) -> Transition {
    match action {
        CalculatorAction::Digit(d) => Transition::new(enter_digit(state, d)),
        CalculatorAction::Decimal => Transition::new(enter_decimal(state)),
        CalculatorAction::Operation(op) => Transition::new(enter_operation(state, op)),
        CalculatorAction::Scientific(f) => Transition::new(apply_scientific(state, f)),
        CalculatorAction::Calculate => calculate(state),
        CalculatorAction::Clear => Transition::new(CalculatorState {
            operand1: String::new(),
            operand2: String::new(),
            operation: None,
            ..state
        }),
        CalculatorAction::Delete => Transition::new(delete(state)),
        CalculatorAction::ToggleMode => Transition::new(CalculatorState {
            mode: match state.mode {
                CalculatorMode::Basic => CalculatorMode::Scientific,
                CalculatorMode::Scientific => CalculatorMode::Basic,
            },
            ..state
        }),
        CalculatorAction::ToggleAngleUnit => Transition::new(CalculatorState {
            angle_unit: match state.angle_unit {
                AngleUnit::Degrees => AngleUnit::Radians,
                AngleUnit::Radians => AngleUnit::Degrees,
            },
            ..state
        }),
        CalculatorAction::Shift => Transition::new(CalculatorState {
            is_shifted: !state.is_shifted,
            ..state
        }),
        CalculatorAction::ShowHistory => Transition::new(CalculatorState {
            is_history_visible: true,
            ..state
        }),
        CalculatorAction::HideHistory => Transition::new(CalculatorState {
            is_history_visible: false,
            ..state
        }),
        CalculatorAction::ClearHistory => Transition::with_effect(
            CalculatorState {
                history: Vec::new(),
                ..state
            },
            Effect::PersistHistory(Vec::new()),
        ),
        CalculatorAction::HistoryLoaded(history) => {
            Transition::new(CalculatorState { history, ..state })
        }
    }
}

/// Append a digit to the active operand, refusing past the length cap
fn enter_digit(mut state: CalculatorState, digit: u8) -> CalculatorState {
    if digit > 9 {
        return state;
    }
    let buffer = if state.operation.is_some() {
        &mut state.operand2
    } else {
        &mut state.operand1
    };
    if buffer.chars().count() >= MAX_INPUT_LENGTH {
        return state;
    }
    buffer.push((b'0' + digit) as char);
    state
}

/// Append a decimal point, refusing duplicates and empty buffers
fn enter_decimal(mut state: CalculatorState) -> CalculatorState {
    let buffer = if state.operation.is_some() {
        &mut state.operand2
    } else {
        &mut state.operand1
    };
    if buffer.is_empty() || buffer.contains('.') {
        return state;
    }
    buffer.push('.');
    state
}

/// Set the pending operation, refused until a left-hand value exists
fn enter_operation(mut state: CalculatorState, op: BinaryOp) -> CalculatorState {
    if !state.operand1.is_empty() {
        state.operation = Some(op);
    }
    state
}

/// Backspace with strict priority: operand2, then operation, then operand1
fn delete(mut state: CalculatorState) -> CalculatorState {
    if !state.operand2.is_empty() {
        state.operand2.pop();
    } else if state.operation.is_some() {
        state.operation = None;
    } else if !state.operand1.is_empty() {
        state.operand1.pop();
    }
    state
}

/// Apply a scientific function to operand1
///
/// Pi and E overwrite operand1 with the constant even when it is empty;
/// every other function requires a parseable operand and is otherwise a
/// no-op. The result replaces operand1, truncated for display.
fn apply_scientific(mut state: CalculatorState, f: ScientificFn) -> CalculatorState {
    if matches!(f, ScientificFn::Pi | ScientificFn::E) {
        let constant = eval::eval_scientific(f, 0.0, state.angle_unit);
        state.operand1 = eval::truncate(&constant.to_string());
        return state;
    }

    let Ok(value) = state.operand1.parse::<f64>() else {
        return state;
    };

    let result = eval::eval_scientific(f, value, state.angle_unit);
    state.operand1 = eval::format_result(result);
    state
}

/// Evaluate the pending binary operation
///
/// The Percent variant bypasses the general dispatch and records no
/// history entry. A successful general-case calculation prepends the
/// formatted equation (built from the pre-calculation values) to history
/// and requests exactly one persistence write.
fn calculate(mut state: CalculatorState) -> Transition {
    let Some(op) = state.operation else {
        return Transition::new(state);
    };
    let (Ok(lhs), Ok(rhs)) = (state.operand1.parse::<f64>(), state.operand2.parse::<f64>())
    else {
        return Transition::new(state);
    };

    if op == BinaryOp::Percent {
        state.operand1 = eval::format_result(lhs * (rhs / 100.0));
        state.operand2.clear();
        state.operation = None;
        return Transition::new(state);
    }

    let result = eval::format_result(eval::eval_binary(op, lhs, rhs));
    let equation = format!(
        "{} {} {} = {}",
        state.operand1,
        op.symbol(),
        state.operand2,
        result
    );
    tracing::debug!(equation = %equation, "calculation completed");

    state.operand1 = result;
    state.operand2.clear();
    state.operation = None;
    state.history.insert(0, equation);

    let effect = Effect::PersistHistory(state.history.clone());
    Transition::with_effect(state, effect)
}
