//! Unit converter state and actions

use serde::{Deserialize, Serialize};

use super::convert::convert;
use super::keypad::KeypadKey;
use super::units::{ConversionCategory, UnitInfo};

/// Which side of the conversion the keypad edits
///
/// Only the From side is genuinely editable; the To side is always
/// derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ActiveInput {
    #[default]
    From,
    To,
}

/// All operations accepted by the unit converter reducer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ConverterAction {
    /// Switch to another category, resetting units and value
    SetCategory(ConversionCategory),
    /// A keypad press editing the From value
    Key(KeypadKey),
    /// Select a new From unit (must belong to the active category)
    SetFromUnit(UnitInfo),
    /// Select a new To unit (must belong to the active category)
    SetToUnit(UnitInfo),
    /// Exchange the units and carry the derived value back to From
    SwapUnits,
    SetActiveInput(ActiveInput),
}

/// Unit converter state
///
/// `to_value` is recomputed as a pure function of the other fields after
/// every accepted action; it is never edited directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConverterState {
    pub category: ConversionCategory,
    pub from_value: String,
    pub to_value: String,
    pub from_unit: UnitInfo,
    pub to_unit: UnitInfo,
    pub active_input: ActiveInput,
}

impl ConverterState {
    /// Initial state for a category: first two declared units (or the
    /// same unit twice), `from_value = "1"`, derived `to_value`.
    pub fn for_category(category: ConversionCategory) -> Self {
        let units = category.units();
        let from_unit = units[0].clone();
        let to_unit = units.get(1).unwrap_or(&units[0]).clone();
        let from_value = "1".to_string();
        let to_value = convert(category, &from_unit, &to_unit, &from_value);
        Self {
            category,
            from_value,
            to_value,
            from_unit,
            to_unit,
            active_input: ActiveInput::From,
        }
    }
}
