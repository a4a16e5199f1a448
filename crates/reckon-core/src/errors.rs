//! Error taxonomy for the Reckon workspace
//!
//! The reducer engines themselves never fail across their action
//! interface: rejected input is a silent no-op and undefined computation
//! results surface as the `"Error"` display sentinel. This type covers the
//! boundaries that do fail — persistence, the rate fetch, and CLI input
//! parsing.

use thiserror::Error;

/// Result type alias using ReckonError
pub type Result<T> = std::result::Result<T, ReckonError>;

/// Canonical error type for store, rate-provider, and CLI boundaries
#[derive(Debug, Error)]
pub enum ReckonError {
    // ===== Input Errors =====
    /// Conversion category name did not match any known category
    #[error("Unknown conversion category: {name}")]
    UnknownCategory { name: String },

    /// Unit symbol is not a member of the selected category's unit set
    #[error("Unknown unit '{symbol}' in category {category}")]
    UnknownUnit { category: String, symbol: String },

    /// A keystroke sequence contained a character with no action mapping
    #[error("Unrecognized key '{key}' in input sequence")]
    UnrecognizedKey { key: char },

    // ===== Rate Provider Errors =====
    /// Requested currency code is absent from the fetched rate table
    #[error("No exchange rate available for currency: {code}")]
    RateUnavailable { code: String },

    /// Rate fetch failed (network error or malformed response)
    #[error("Exchange rate fetch failed: {message}")]
    ExternalService { message: String },

    // ===== Persistence Errors =====
    /// SQLite-level failure in the history store
    #[error("Persistence failure during {op}: {message}")]
    Persistence { op: String, message: String },

    /// Filesystem-level failure
    #[error("IO failure during {op}: {message}")]
    Io { op: String, message: String },
}

impl ReckonError {
    /// Get the stable error code for this error
    ///
    /// Codes are stable identifiers for programmatic handling and test
    /// assertions, independent of the display message.
    pub fn code(&self) -> &'static str {
        match self {
            ReckonError::UnknownCategory { .. } => "ERR_UNKNOWN_CATEGORY",
            ReckonError::UnknownUnit { .. } => "ERR_UNKNOWN_UNIT",
            ReckonError::UnrecognizedKey { .. } => "ERR_UNRECOGNIZED_KEY",
            ReckonError::RateUnavailable { .. } => "ERR_RATE_UNAVAILABLE",
            ReckonError::ExternalService { .. } => "ERR_EXTERNAL_SERVICE",
            ReckonError::Persistence { .. } => "ERR_PERSISTENCE",
            ReckonError::Io { .. } => "ERR_IO",
        }
    }
}
