//! Derived calculators: loan EMI, BMI, GST, and date duration
//!
//! Each is a small pure reducer whose derived fields are recomputed after
//! every accepted action.

pub mod bmi;
pub mod date;
pub mod gst;
pub mod loan;
