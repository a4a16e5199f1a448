//! Numeric evaluation and display formatting
//!
//! All arithmetic is `f64`; undefined computations (division by zero,
//! factorial of a non-integer, overflow) surface as non-finite values and
//! are converted to the `"Error"` sentinel string here, at the display
//! boundary.

use super::action::{BinaryOp, ScientificFn};
use super::state::AngleUnit;

/// Maximum characters an operand buffer accepts during entry,
/// counting the decimal separator.
pub const MAX_INPUT_LENGTH: usize = 8;

/// Maximum characters of a computed result kept for display.
pub const MAX_DISPLAY_LENGTH: usize = 15;

/// Display sentinel for undefined computation results.
pub const ERROR_SENTINEL: &str = "Error";

/// Format a computed value for display
///
/// Non-finite values become the `"Error"` sentinel; everything else is the
/// default decimal text form truncated to [`MAX_DISPLAY_LENGTH`].
pub fn format_result(value: f64) -> String {
    if !value.is_finite() {
        return ERROR_SENTINEL.to_string();
    }
    truncate(&value.to_string())
}

/// Truncate display text to the fixed character budget
pub(crate) fn truncate(text: &str) -> String {
    text.chars().take(MAX_DISPLAY_LENGTH).collect()
}

/// Evaluate the pending binary operation
///
/// Division by zero yields NaN rather than a panic or infinity; the
/// Percent variant is handled before the general dispatch by the reducer
/// and evaluates here as percent-of for completeness.
pub fn eval_binary(op: BinaryOp, lhs: f64, rhs: f64) -> f64 {
    match op {
        BinaryOp::Add => lhs + rhs,
        BinaryOp::Subtract => lhs - rhs,
        BinaryOp::Multiply => lhs * rhs,
        BinaryOp::Divide => {
            if rhs != 0.0 {
                lhs / rhs
            } else {
                f64::NAN
            }
        }
        BinaryOp::Percent => lhs * (rhs / 100.0),
        BinaryOp::Power => lhs.powf(rhs),
    }
}

/// Evaluate a scientific function against a parsed operand
///
/// Trig inputs are converted from degrees to radians first when
/// `angle_unit` is [`AngleUnit::Degrees`]; this applies to the inverse
/// functions as well. Undefined cases return NaN.
pub fn eval_scientific(f: ScientificFn, value: f64, angle_unit: AngleUnit) -> f64 {
    let angle = |v: f64| match angle_unit {
        AngleUnit::Degrees => v.to_radians(),
        AngleUnit::Radians => v,
    };

    match f {
        ScientificFn::Sin => angle(value).sin(),
        ScientificFn::Cos => angle(value).cos(),
        ScientificFn::Tan => angle(value).tan(),
        ScientificFn::Asin => angle(value).asin(),
        ScientificFn::Acos => angle(value).acos(),
        ScientificFn::Atan => angle(value).atan(),
        ScientificFn::Log => value.log10(),
        ScientificFn::Ln => value.ln(),
        ScientificFn::Square => value.powi(2),
        ScientificFn::Cube => value.powi(3),
        ScientificFn::EPower => value.exp(),
        ScientificFn::TenPower => 10f64.powf(value),
        ScientificFn::Sqrt => value.sqrt(),
        ScientificFn::Cbrt => value.cbrt(),
        ScientificFn::Factorial => factorial(value),
        ScientificFn::Reciprocal => {
            if value != 0.0 {
                1.0 / value
            } else {
                f64::NAN
            }
        }
        ScientificFn::Pi => std::f64::consts::PI,
        ScientificFn::E => std::f64::consts::E,
    }
}

/// Factorial over f64, defined only for non-negative integral values
fn factorial(value: f64) -> f64 {
    if value < 0.0 || value.fract() != 0.0 {
        return f64::NAN;
    }
    let n = value as u64;
    (1..=n).fold(1.0f64, |acc, i| acc * i as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_result_truncates_long_fractions() {
        let text = format_result(2.0 / 3.0);
        assert_eq!(text.chars().count(), MAX_DISPLAY_LENGTH);
        assert!(text.starts_with("0.6666666"));
    }

    #[test]
    fn test_format_result_whole_numbers_have_no_fraction() {
        assert_eq!(format_result(1024.0), "1024");
    }

    #[test]
    fn test_format_result_error_sentinel() {
        assert_eq!(format_result(f64::NAN), "Error");
        assert_eq!(format_result(f64::INFINITY), "Error");
    }

    #[test]
    fn test_divide_by_zero_is_nan() {
        assert!(eval_binary(BinaryOp::Divide, 6.0, 0.0).is_nan());
    }

    #[test]
    fn test_factorial_of_five() {
        assert_eq!(factorial(5.0), 120.0);
        assert_eq!(factorial(0.0), 1.0);
    }

    #[test]
    fn test_factorial_rejects_negative_and_fractional() {
        assert!(factorial(-1.0).is_nan());
        assert!(factorial(2.5).is_nan());
    }

    #[test]
    fn test_trig_converts_degrees() {
        let v = eval_scientific(ScientificFn::Sin, 90.0, AngleUnit::Degrees);
        assert!((v - 1.0).abs() < 1e-12);

        let v = eval_scientific(
            ScientificFn::Sin,
            std::f64::consts::FRAC_PI_2,
            AngleUnit::Radians,
        );
        assert!((v - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_reciprocal_of_zero_is_nan() {
        assert!(eval_scientific(ScientificFn::Reciprocal, 0.0, AngleUnit::Radians).is_nan());
    }
}
