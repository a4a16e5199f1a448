//! Currency conversion engine
//!
//! Same reducer shape as the unit converter, but the rate table arrives
//! from an external one-shot fetch. Resolution of the fetch is fed back in
//! as a `RatesLoaded`/`RatesFailed` action so the reducer keeps
//! single-writer semantics; while the fetch is pending, keypad edits are
//! buffered into `from_value` without recomputing against the empty
//! table.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::keypad::{edit_buffer, KeypadKey};
use super::state::ActiveInput;
use super::units::UnitInfo;

/// Fixed user-facing message shown when the rate fetch fails
pub const FETCH_ERROR_MESSAGE: &str =
    "Failed to fetch exchange rates. Please check your internet connection.";

/// Base currency through which all conversions are composed
pub const BASE_CURRENCY: &str = "EUR";

/// All operations accepted by the currency reducer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CurrencyAction {
    /// A keypad press editing the From value
    Key(KeypadKey),
    SetFromUnit(UnitInfo),
    SetToUnit(UnitInfo),
    SetActiveInput(ActiveInput),
    /// Rate fetch resolved successfully with a code → rate mapping
    RatesLoaded(HashMap<String, f64>),
    /// Rate fetch failed; no partial data, no automatic retry
    RatesFailed,
}

/// Currency converter state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyState {
    pub from_value: String,
    pub to_value: String,
    pub from_unit: UnitInfo,
    pub to_unit: UnitInfo,
    /// Units derived from the fetched rate table, sorted by code
    pub available_units: Vec<UnitInfo>,
    /// Fetched rates keyed by currency code, base merged in at 1.0
    pub rates: HashMap<String, f64>,
    pub active_input: ActiveInput,
    /// True from screen entry until the one-shot fetch resolves
    pub is_loading: bool,
    pub error: Option<String>,
}

impl Default for CurrencyState {
    fn default() -> Self {
        Self::new()
    }
}

impl CurrencyState {
    /// Initial state for a currency screen session, fetch still pending
    pub fn new() -> Self {
        Self {
            from_value: "1".to_string(),
            to_value: String::new(),
            from_unit: UnitInfo::new("Euro", "EUR", 1.0),
            to_unit: UnitInfo::new("US Dollar", "USD", 0.0),
            available_units: Vec::new(),
            rates: HashMap::new(),
            active_input: ActiveInput::From,
            is_loading: true,
            error: None,
        }
    }
}

/// Apply a currency action, returning the next state
pub fn apply(mut state: CurrencyState, action: CurrencyAction) -> CurrencyState {
    match action {
        CurrencyAction::Key(key) => {
            if state.active_input != ActiveInput::From {
                return state;
            }
            state.from_value = edit_buffer(&state.from_value, key);
            recompute(state)
        }

        CurrencyAction::SetFromUnit(unit) => {
            state.from_unit = unit;
            recompute(state)
        }

        CurrencyAction::SetToUnit(unit) => {
            state.to_unit = unit;
            recompute(state)
        }

        CurrencyAction::SetActiveInput(input) => {
            state.active_input = input;
            state
        }

        CurrencyAction::RatesLoaded(mut rates) => {
            rates.insert(BASE_CURRENCY.to_string(), 1.0);

            let mut codes: Vec<&String> = rates.keys().collect();
            codes.sort();
            let units: Vec<UnitInfo> = codes
                .into_iter()
                .map(|code| UnitInfo::new(currency_name(code), code.clone(), 0.0))
                .collect();

            // A fetched table always contains at least the merged base.
            let from_unit = units
                .iter()
                .find(|u| u.symbol == BASE_CURRENCY)
                .or_else(|| units.first())
                .cloned();
            let to_unit = units
                .iter()
                .find(|u| u.symbol == "USD")
                .or_else(|| units.get(1))
                .or_else(|| units.first())
                .cloned();

            if let (Some(from_unit), Some(to_unit)) = (from_unit, to_unit) {
                state.from_unit = from_unit;
                state.to_unit = to_unit;
            }
            state.available_units = units;
            state.rates = rates;
            state.is_loading = false;
            state.error = None;
            recompute(state)
        }

        CurrencyAction::RatesFailed => {
            tracing::warn!("exchange rate fetch failed");
            state.is_loading = false;
            state.error = Some(FETCH_ERROR_MESSAGE.to_string());
            state
        }
    }
}

/// Recompute `to_value`: from-amount → base (EUR) → target, two decimals
///
/// Inert while the rate table is empty; a missing or zero from-rate
/// clears the derived value instead of dividing by zero.
fn recompute(mut state: CurrencyState) -> CurrencyState {
    if state.rates.is_empty() {
        return state;
    }

    let amount = state.from_value.parse::<f64>().unwrap_or(0.0);
    let from_rate = state
        .rates
        .get(&state.from_unit.symbol)
        .copied()
        .unwrap_or(0.0);
    let to_rate = state
        .rates
        .get(&state.to_unit.symbol)
        .copied()
        .unwrap_or(0.0);

    if from_rate != 0.0 {
        let amount_in_base = amount / from_rate;
        let result = amount_in_base * to_rate;
        state.to_value = format!("{result:.2}");
    } else {
        state.to_value = String::new();
    }
    state
}

/// Human-readable names for common ISO 4217 codes; others display as-is
pub fn currency_name(code: &str) -> String {
    match code {
        "USD" => "US Dollar",
        "EUR" => "Euro",
        "JPY" => "Japanese Yen",
        "GBP" => "British Pound",
        "AUD" => "Australian Dollar",
        "CAD" => "Canadian Dollar",
        "CHF" => "Swiss Franc",
        "CNY" => "Chinese Yuan",
        "INR" => "Indian Rupee",
        other => other,
    }
    .to_string()
}
