//! Unit and currency conversion engines
//!
//! Category-based unit conversion over static rate tables, plus the
//! currency variant whose rate table arrives from an external fetch. Both
//! are reducers over a flat state record; `to_value` is always derived,
//! never edited directly.

mod apply;
mod convert;
pub mod currency;
mod keypad;
mod state;
mod units;

pub use apply::apply;
pub use convert::convert;
pub use currency::{CurrencyAction, CurrencyState};
pub use keypad::{edit_buffer, KeypadKey, KEYPAD_MAX_LENGTH};
pub use state::{ActiveInput, ConverterAction, ConverterState};
pub use units::{ConversionCategory, UnitInfo};
