//! Reckon Rates - exchange rate provider
//!
//! One-shot fetch of the latest exchange rates from the frankfurter.app
//! API, base currency EUR. The currency reducer in `reckon-core` consumes
//! the fetched mapping through a `RatesLoaded` action; a fetch failure
//! becomes `RatesFailed`. No retry and no caching: a screen session
//! fetches once and discards the result if the session ends first.

pub mod client;
pub mod wire;

pub use client::{HttpRateSource, RateSource};
pub use wire::RateResponse;
