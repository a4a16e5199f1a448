pub mod calc;
pub mod convert;
pub mod history;
pub mod rates;
