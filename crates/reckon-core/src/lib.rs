//! Reckon Core - calculator and conversion reducer engines
//!
//! This crate provides the deterministic, single-threaded state engines
//! behind the Reckon calculator suite:
//! - Arithmetic/scientific calculator with equation history
//! - Unit conversion across static category tables (length, mass, data,
//!   speed, temperature)
//! - Currency conversion against an externally fetched rate table
//! - Small derived calculators (loan EMI, BMI, GST, date duration)
//!
//! Each engine is an explicit reducer: a pure function of
//! `(state, action) -> state`. Rejected input (max length exceeded,
//! duplicate decimal point, operator with no left operand) is a silent
//! no-op rather than an error. Persistence of the calculator history and
//! the currency rate fetch are external collaborators; the calculator
//! reducer surfaces the pending write as an [`calculator::Effect`] for the
//! caller to execute, and rate fetch resolution is fed back in as an
//! ordinary action.

pub mod calculator;
pub mod converter;
pub mod errors;
pub mod finance;
pub mod logging;

// Re-export commonly used types
pub use calculator::{apply as apply_calculator, CalculatorAction, CalculatorState};
pub use converter::{apply as apply_converter, ConverterAction, ConverterState};
pub use errors::{ReckonError, Result};
