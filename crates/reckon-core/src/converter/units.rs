//! Conversion categories and their unit tables
//!
//! Every non-temperature category converts through a base unit with rate
//! 1.0; a unit's `to_base_rate` is how many base units one of it holds.
//! Temperature units carry a zero rate and are converted by closed-form
//! formulas instead.

use serde::{Deserialize, Serialize};

/// A selectable unit within a conversion category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitInfo {
    /// Human-readable name ("Kilometer")
    pub name: String,
    /// Short symbol ("km")
    pub symbol: String,
    /// Multiplier to the category's base unit; 0.0 for temperature units
    pub to_base_rate: f64,
}

impl UnitInfo {
    pub fn new(name: impl Into<String>, symbol: impl Into<String>, to_base_rate: f64) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
            to_base_rate,
        }
    }
}

/// Conversion category selecting the active unit table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConversionCategory {
    Length,
    Mass,
    Data,
    Speed,
    Temperature,
}

const LENGTH_UNITS: &[(&str, &str, f64)] = &[
    ("Meter", "m", 1.0),
    ("Kilometer", "km", 1000.0),
    ("Centimeter", "cm", 0.01),
    ("Millimeter", "mm", 0.001),
    ("Mile", "mi", 1609.34),
    ("Yard", "yd", 0.9144),
    ("Foot", "ft", 0.3048),
    ("Inch", "in", 0.0254),
];

const MASS_UNITS: &[(&str, &str, f64)] = &[
    ("Gram", "g", 1.0),
    ("Kilogram", "kg", 1000.0),
    ("Milligram", "mg", 0.001),
    ("Tonne", "t", 1_000_000.0),
    ("Pound", "lb", 453.592),
    ("Ounce", "oz", 28.3495),
];

const DATA_UNITS: &[(&str, &str, f64)] = &[
    ("Byte", "B", 1.0),
    ("Kilobyte", "KB", 1024.0),
    ("Megabyte", "MB", 1_048_576.0),
    ("Gigabyte", "GB", 1_073_741_824.0),
    ("Terabyte", "TB", 1_099_511_627_776.0),
];

const SPEED_UNITS: &[(&str, &str, f64)] = &[
    ("Meters/second", "m/s", 1.0),
    ("Kilometers/hour", "km/h", 0.277778),
    ("Miles/hour", "mph", 0.44704),
    ("Feet/second", "ft/s", 0.3048),
];

const TEMPERATURE_UNITS: &[(&str, &str, f64)] = &[
    ("Celsius", "°C", 0.0),
    ("Fahrenheit", "°F", 0.0),
    ("Kelvin", "K", 0.0),
];

impl ConversionCategory {
    /// All categories, in display order
    pub const ALL: [ConversionCategory; 5] = [
        ConversionCategory::Length,
        ConversionCategory::Mass,
        ConversionCategory::Data,
        ConversionCategory::Speed,
        ConversionCategory::Temperature,
    ];

    /// Display name of the category
    pub fn name(&self) -> &'static str {
        match self {
            ConversionCategory::Length => "Length",
            ConversionCategory::Mass => "Mass",
            ConversionCategory::Data => "Data",
            ConversionCategory::Speed => "Speed",
            ConversionCategory::Temperature => "Temperature",
        }
    }

    /// Look up a category by its display name (case-insensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(name))
    }

    /// The category's declared unit table, in declaration order
    pub fn units(&self) -> Vec<UnitInfo> {
        let table = match self {
            ConversionCategory::Length => LENGTH_UNITS,
            ConversionCategory::Mass => MASS_UNITS,
            ConversionCategory::Data => DATA_UNITS,
            ConversionCategory::Speed => SPEED_UNITS,
            ConversionCategory::Temperature => TEMPERATURE_UNITS,
        };
        table
            .iter()
            .map(|(name, symbol, rate)| UnitInfo::new(*name, *symbol, *rate))
            .collect()
    }

    /// Look up a unit in this category by symbol
    pub fn unit(&self, symbol: &str) -> Option<UnitInfo> {
        self.units().into_iter().find(|u| u.symbol == symbol)
    }

    /// Whether the given unit belongs to this category's unit set
    pub fn contains(&self, unit: &UnitInfo) -> bool {
        self.units().iter().any(|u| u == unit)
    }
}
