//! HTTP rate source
//!
//! Trait seam over the rate fetch so the CLI and tests can substitute a
//! canned source for the live API.

use std::collections::HashMap;

use async_trait::async_trait;
use reckon_core::errors::{ReckonError, Result};

use crate::wire::RateResponse;

const DEFAULT_BASE_URL: &str = "https://api.frankfurter.app";

/// Provider of the latest exchange rates against a base currency
#[async_trait]
pub trait RateSource: Send + Sync {
    /// Fetch the latest rates, returned with the base merged in at 1.0
    async fn latest_rates(&self, base: &str) -> Result<HashMap<String, f64>>;
}

/// Live rate source backed by the frankfurter.app API
pub struct HttpRateSource {
    client: reqwest::Client,
    base_url: String,
}

impl Default for HttpRateSource {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpRateSource {
    /// Create a source against the public API endpoint
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a source against a custom endpoint (for testing)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn external(message: impl std::fmt::Display) -> ReckonError {
        ReckonError::ExternalService {
            message: message.to_string(),
        }
    }
}

#[async_trait]
impl RateSource for HttpRateSource {
    async fn latest_rates(&self, base: &str) -> Result<HashMap<String, f64>> {
        let url = format!("{}/latest", self.base_url);
        tracing::debug!(url = %url, base = base, "fetching latest rates");

        let response = self
            .client
            .get(&url)
            .query(&[("from", base)])
            .send()
            .await
            .map_err(Self::external)?
            .error_for_status()
            .map_err(Self::external)?;

        let payload: RateResponse = response.json().await.map_err(Self::external)?;
        Ok(payload.rates_with_base())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Canned source used to exercise the trait seam without the network
    struct FixedRateSource(HashMap<String, f64>);

    #[async_trait]
    impl RateSource for FixedRateSource {
        async fn latest_rates(&self, _base: &str) -> Result<HashMap<String, f64>> {
            Ok(self.0.clone())
        }
    }

    #[tokio::test]
    async fn test_trait_object_dispatch() {
        let source: Box<dyn RateSource> =
            Box::new(FixedRateSource(HashMap::from([("USD".to_string(), 1.08)])));
        let rates = source.latest_rates("EUR").await.unwrap();
        assert_eq!(rates["USD"], 1.08);
    }

    #[tokio::test]
    async fn test_invalid_endpoint_is_external_service_error() {
        // Malformed URL fails before any connection attempt
        let source = HttpRateSource::with_base_url("http://[invalid");
        let err = source.latest_rates("EUR").await.unwrap_err();
        assert_eq!(err.code(), "ERR_EXTERNAL_SERVICE");
    }
}
