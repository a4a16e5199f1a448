//! Calculator engine
//!
//! Arithmetic/scientific calculator state and its reducer. State holds the
//! two operand text buffers exactly as keyed in, the pending binary
//! operator, display flags, and the equation history. All mutation goes
//! through [`apply`].

mod action;
mod apply;
mod eval;
mod state;

pub use action::{BinaryOp, CalculatorAction, ScientificFn};
pub use apply::{apply, Effect, Transition};
pub use eval::{format_result, MAX_DISPLAY_LENGTH, MAX_INPUT_LENGTH};
pub use state::{AngleUnit, CalculatorMode, CalculatorState};
