//! Wire format of the frankfurter.app `/latest` endpoint

use std::collections::HashMap;

use serde::Deserialize;

/// Response payload of `GET /latest`
///
/// `rates` maps ISO 4217 codes to the amount of that currency one unit of
/// `base` buys; the base currency itself is absent from the map.
#[derive(Debug, Clone, Deserialize)]
pub struct RateResponse {
    pub amount: f64,
    pub base: String,
    pub date: String,
    pub rates: HashMap<String, f64>,
}

impl RateResponse {
    /// The rate mapping with the base currency merged in at 1.0
    pub fn rates_with_base(&self) -> HashMap<String, f64> {
        let mut rates = self.rates.clone();
        rates.insert(self.base.clone(), 1.0);
        rates
    }
}
