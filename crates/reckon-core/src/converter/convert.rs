//! Value transformation between units
//!
//! Linear categories convert through the base unit; temperature uses the
//! closed-form pairwise formulas among Celsius, Fahrenheit, and Kelvin.

use super::units::{ConversionCategory, UnitInfo};

/// Convert a text value between two units of a category
///
/// Unparseable input is treated as 0. Linear results use the default
/// floating text form; temperature results are fixed to two decimals.
pub fn convert(
    category: ConversionCategory,
    from_unit: &UnitInfo,
    to_unit: &UnitInfo,
    from_value: &str,
) -> String {
    let value = from_value.parse::<f64>().unwrap_or(0.0);

    if category == ConversionCategory::Temperature {
        let result = convert_temperature(&from_unit.symbol, &to_unit.symbol, value);
        return format!("{result:.2}");
    }

    // A zero rate only appears on temperature units, handled above.
    if to_unit.to_base_rate == 0.0 {
        return 0.0f64.to_string();
    }
    let result = value * from_unit.to_base_rate / to_unit.to_base_rate;
    result.to_string()
}

/// Closed-form temperature conversion; same-unit pairs are the identity
fn convert_temperature(from_symbol: &str, to_symbol: &str, value: f64) -> f64 {
    match (from_symbol, to_symbol) {
        ("°C", "°F") => value * 9.0 / 5.0 + 32.0,
        ("°C", "K") => value + 273.15,
        ("°F", "°C") => (value - 32.0) * 5.0 / 9.0,
        ("°F", "K") => (value - 32.0) * 5.0 / 9.0 + 273.15,
        ("K", "°C") => value - 273.15,
        ("K", "°F") => (value - 273.15) * 9.0 / 5.0 + 32.0,
        _ => value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit(category: ConversionCategory, symbol: &str) -> UnitInfo {
        category.unit(symbol).unwrap()
    }

    #[test]
    fn test_meters_to_kilometers() {
        let from = unit(ConversionCategory::Length, "m");
        let to = unit(ConversionCategory::Length, "km");
        assert_eq!(convert(ConversionCategory::Length, &from, &to, "1000"), "1");
    }

    #[test]
    fn test_unparseable_input_is_zero() {
        let from = unit(ConversionCategory::Mass, "g");
        let to = unit(ConversionCategory::Mass, "kg");
        assert_eq!(convert(ConversionCategory::Mass, &from, &to, "abc"), "0");
    }

    #[test]
    fn test_freezing_point() {
        let c = unit(ConversionCategory::Temperature, "°C");
        let f = unit(ConversionCategory::Temperature, "°F");
        let k = unit(ConversionCategory::Temperature, "K");
        assert_eq!(convert(ConversionCategory::Temperature, &c, &f, "0"), "32.00");
        assert_eq!(convert(ConversionCategory::Temperature, &c, &k, "0"), "273.15");
    }

    #[test]
    fn test_boiling_point() {
        let c = unit(ConversionCategory::Temperature, "°C");
        let f = unit(ConversionCategory::Temperature, "°F");
        assert_eq!(convert(ConversionCategory::Temperature, &c, &f, "100"), "212.00");
    }

    #[test]
    fn test_same_temperature_unit_is_identity() {
        let k = unit(ConversionCategory::Temperature, "K");
        assert_eq!(convert(ConversionCategory::Temperature, &k, &k, "300"), "300.00");
    }

    #[test]
    fn test_zero_rate_guard() {
        let broken = UnitInfo::new("Broken", "x", 0.0);
        let from = unit(ConversionCategory::Length, "m");
        assert_eq!(convert(ConversionCategory::Length, &from, &broken, "5"), "0");
    }
}
