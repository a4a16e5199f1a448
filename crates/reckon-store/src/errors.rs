//! Error handling for reckon-store
//!
//! Wraps reckon-core's error taxonomy with store-specific helpers.

use reckon_core::errors::ReckonError;

/// Result type alias using ReckonError
pub type Result<T> = std::result::Result<T, ReckonError>;

/// Create a database error from rusqlite::Error
pub fn from_rusqlite(err: rusqlite::Error) -> ReckonError {
    ReckonError::Persistence {
        op: "sqlite".to_string(),
        message: err.to_string(),
    }
}

/// Create a migration error
pub fn migration_error(migration_id: &str, reason: &str) -> ReckonError {
    ReckonError::Persistence {
        op: "migration".to_string(),
        message: format!("Migration {migration_id} failed: {reason}"),
    }
}
