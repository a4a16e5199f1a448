//! `reckon rates` - currency conversion against live exchange rates
//!
//! Fetches the latest rates once, feeds the resolution into the currency
//! reducer as `RatesLoaded`/`RatesFailed`, and replays the amount through
//! the keypad path.

use clap::Args;
use reckon_core::converter::currency::{self, CurrencyAction, CurrencyState, BASE_CURRENCY};
use reckon_core::converter::KeypadKey;
use reckon_core::errors::{ReckonError, Result};
use reckon_rates::{HttpRateSource, RateSource};

#[derive(Debug, Args)]
pub struct RatesArgs {
    /// Source currency code, e.g. "EUR"
    #[arg(long, default_value = BASE_CURRENCY)]
    pub from: String,

    /// Target currency code, e.g. "USD"
    #[arg(long, default_value = "USD")]
    pub to: String,

    /// Amount to convert
    #[arg(long, default_value = "1")]
    pub amount: String,
}

pub fn execute(args: RatesArgs) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| ReckonError::Io {
            op: "runtime".to_string(),
            message: e.to_string(),
        })?;

    let source = HttpRateSource::new();
    let fetched = runtime.block_on(source.latest_rates(BASE_CURRENCY));

    let mut state = CurrencyState::new();
    state = match fetched {
        Ok(rates) => currency::apply(state, CurrencyAction::RatesLoaded(rates)),
        Err(e) => {
            state = currency::apply(state, CurrencyAction::RatesFailed);
            if let Some(message) = &state.error {
                eprintln!("{message}");
            }
            return Err(e);
        }
    };

    let from_unit = find_unit(&state, &args.from)?;
    let to_unit = find_unit(&state, &args.to)?;
    state = currency::apply(state, CurrencyAction::SetFromUnit(from_unit));
    state = currency::apply(state, CurrencyAction::SetToUnit(to_unit));

    state = currency::apply(state, CurrencyAction::Key(KeypadKey::Clear));
    for key in keypad_keys(&args.amount)? {
        state = currency::apply(state, CurrencyAction::Key(key));
    }

    println!(
        "{} {} = {} {}",
        state.from_value, state.from_unit.symbol, state.to_value, state.to_unit.symbol
    );
    Ok(())
}

fn find_unit(
    state: &CurrencyState,
    code: &str,
) -> Result<reckon_core::converter::UnitInfo> {
    state
        .available_units
        .iter()
        .find(|u| u.symbol.eq_ignore_ascii_case(code))
        .cloned()
        .ok_or_else(|| ReckonError::RateUnavailable {
            code: code.to_string(),
        })
}

/// Map an amount string onto keypad presses
fn keypad_keys(amount: &str) -> Result<Vec<KeypadKey>> {
    amount
        .chars()
        .map(|c| match c {
            '0'..='9' => Ok(KeypadKey::Digit(c as u8 - b'0')),
            '.' => Ok(KeypadKey::Decimal),
            key => Err(ReckonError::UnrecognizedKey { key }),
        })
        .collect()
}
