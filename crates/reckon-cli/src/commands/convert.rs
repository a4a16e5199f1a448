//! `reckon convert` - one-shot unit conversion

use clap::Args;
use reckon_core::converter::{convert, ConversionCategory};
use reckon_core::errors::{ReckonError, Result};

#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// Category name: length, mass, data, speed, temperature
    #[arg(long)]
    pub category: String,

    /// Source unit symbol, e.g. "m"
    #[arg(long)]
    pub from: String,

    /// Target unit symbol, e.g. "km"
    #[arg(long)]
    pub to: String,

    /// Value to convert
    #[arg(long)]
    pub value: String,
}

pub fn execute(args: ConvertArgs) -> Result<()> {
    let category = ConversionCategory::from_name(&args.category).ok_or_else(|| {
        ReckonError::UnknownCategory {
            name: args.category.clone(),
        }
    })?;
    let from_unit = category
        .unit(&args.from)
        .ok_or_else(|| ReckonError::UnknownUnit {
            category: category.name().to_string(),
            symbol: args.from.clone(),
        })?;
    let to_unit = category
        .unit(&args.to)
        .ok_or_else(|| ReckonError::UnknownUnit {
            category: category.name().to_string(),
            symbol: args.to.clone(),
        })?;

    let result = convert(category, &from_unit, &to_unit, &args.value);
    println!(
        "{} {} = {} {}",
        args.value, from_unit.symbol, result, to_unit.symbol
    );
    Ok(())
}
