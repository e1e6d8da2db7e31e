//! Error handling for textvault-store
//!
//! Wraps textvault-core TvError with store-specific helpers

use std::path::Path;
use textvault_core::TvError;

/// Result type alias using TvError
pub type Result<T> = textvault_core::Result<T>;

/// Create a database error from rusqlite::Error, tagged with the failing operation
pub fn from_rusqlite(op: &str, err: rusqlite::Error) -> TvError {
    TvError::Persistence {
        op: op.to_string(),
        message: err.to_string(),
    }
}

/// Create a migration error
pub fn migration_error(migration_id: &str, reason: &str) -> TvError {
    TvError::Persistence {
        op: "migration".to_string(),
        message: format!("Migration {} failed: {}", migration_id, reason),
    }
}

/// Create a store-unavailable error for a path that exists but cannot be opened
pub fn store_unavailable(path: &Path, reason: impl std::fmt::Display) -> TvError {
    TvError::StoreUnavailable {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
}

/// Create an IO error
pub fn io_error(operation: &str, err: std::io::Error) -> TvError {
    TvError::Io {
        op: operation.to_string(),
        source: err,
    }
}

/// Create a not-found error for a name with no stored record
pub fn not_found(name: &str) -> TvError {
    TvError::NotFound {
        name: name.to_string(),
    }
}

/// Create an invalid-name error
pub fn invalid_name(reason: impl Into<String>) -> TvError {
    TvError::InvalidName {
        reason: reason.into(),
    }
}
