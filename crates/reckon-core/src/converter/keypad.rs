//! Virtual keypad buffer editing
//!
//! Shared by the unit and currency converters. The buffer always holds a
//! displayable number: clearing or backspacing to empty leaves the `"0"`
//! placeholder, and a digit replaces a bare placeholder instead of
//! appending to it.

use serde::{Deserialize, Serialize};

/// Maximum characters a converter input buffer accepts, counting the
/// decimal separator.
pub const KEYPAD_MAX_LENGTH: usize = 15;

/// One converter keypad press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeypadKey {
    Digit(u8),
    Decimal,
    /// Reset the buffer to the placeholder
    Clear,
    /// Drop the last character, leaving the placeholder when emptied
    Backspace,
}

/// Apply one keypad press to an input buffer
///
/// Returns the edited buffer; rejected edits (full buffer, duplicate
/// decimal point, out-of-range digit) return the input unchanged.
pub fn edit_buffer(current: &str, key: KeypadKey) -> String {
    match key {
        KeypadKey::Clear => "0".to_string(),
        KeypadKey::Backspace => {
            if current.chars().count() > 1 {
                let mut edited = current.to_string();
                edited.pop();
                edited
            } else {
                "0".to_string()
            }
        }
        KeypadKey::Decimal => {
            if current.contains('.') || current.chars().count() >= KEYPAD_MAX_LENGTH {
                current.to_string()
            } else {
                format!("{current}.")
            }
        }
        KeypadKey::Digit(d) => {
            if d > 9 {
                return current.to_string();
            }
            let digit = (b'0' + d) as char;
            if current == "0" || current == "0.0" {
                digit.to_string()
            } else if current.chars().count() < KEYPAD_MAX_LENGTH {
                format!("{current}{digit}")
            } else {
                current.to_string()
            }
        }
    }
}
