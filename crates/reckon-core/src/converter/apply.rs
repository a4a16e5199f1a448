//! Functional-boundary apply function for the unit converter
//!
//! Same contract as the calculator reducer: total, no panics, rejected
//! input leaves the state unchanged. Every accepted action ends with
//! `to_value` recomputed from the other fields.

use super::convert::convert;
use super::keypad::edit_buffer;
use super::state::{ActiveInput, ConverterAction, ConverterState};

/// Apply a converter action, returning the next state
///
/// # Example
///
/// ```
/// use reckon_core::converter::{apply, ConversionCategory, ConverterAction, ConverterState, KeypadKey};
///
/// let state = ConverterState::for_category(ConversionCategory::Length);
/// let state = apply(state, ConverterAction::Key(KeypadKey::Digit(0)));
/// assert_eq!(state.from_value, "10");
/// assert_eq!(state.to_value, "0.01");
/// ```
pub fn apply(mut state: ConverterState, action: ConverterAction) -> ConverterState {
    match action {
        ConverterAction::SetCategory(category) => ConverterState::for_category(category),

        ConverterAction::Key(key) => {
            if state.active_input != ActiveInput::From {
                return state;
            }
            state.from_value = edit_buffer(&state.from_value, key);
            recompute(state)
        }

        ConverterAction::SetFromUnit(unit) => {
            if !state.category.contains(&unit) {
                return state;
            }
            state.from_unit = unit;
            recompute(state)
        }

        ConverterAction::SetToUnit(unit) => {
            if !state.category.contains(&unit) {
                return state;
            }
            state.to_unit = unit;
            recompute(state)
        }

        ConverterAction::SwapUnits => {
            std::mem::swap(&mut state.from_unit, &mut state.to_unit);
            state.from_value = std::mem::take(&mut state.to_value);
            recompute(state)
        }

        ConverterAction::SetActiveInput(input) => {
            state.active_input = input;
            state
        }
    }
}

fn recompute(mut state: ConverterState) -> ConverterState {
    state.to_value = convert(
        state.category,
        &state.from_unit,
        &state.to_unit,
        &state.from_value,
    );
    state
}
