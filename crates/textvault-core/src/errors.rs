use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using TvError
pub type Result<T> = std::result::Result<T, TvError>;

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling and test assertions. The storage layer returns these
/// typed errors; rendering them for a user is the caller's responsibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TvErrorKind {
    /// Name fails validation (empty, or longer than the configured cap)
    InvalidName,
    /// No stored record under the requested name
    NotFound,
    /// Stored payload is truncated, corrupted, or not valid UTF-8
    Decode,
    /// Store file cannot be opened for reads/writes (distinct from "not present yet")
    StoreUnavailable,
    /// Database statement or transaction failure
    Persistence,
    /// Filesystem failure outside the database engine
    Io,
    /// Invariant breach that indicates a bug, not a user error
    Internal,
}

impl TvErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            TvErrorKind::InvalidName => "ERR_INVALID_NAME",
            TvErrorKind::NotFound => "ERR_NOT_FOUND",
            TvErrorKind::Decode => "ERR_DECODE",
            TvErrorKind::StoreUnavailable => "ERR_STORE_UNAVAILABLE",
            TvErrorKind::Persistence => "ERR_PERSISTENCE",
            TvErrorKind::Io => "ERR_IO",
            TvErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Comprehensive error taxonomy for TextVault operations
///
/// Note: there is no name-conflict variant. Saving under an existing name
/// overwrites the stored payload; that is the defined policy, not an error.
#[derive(Error, Debug)]
pub enum TvError {
    /// Name fails validation before any statement is issued
    #[error("invalid name: {reason}")]
    InvalidName { reason: String },

    /// No record stored under this name
    #[error("no stored file named '{name}'")]
    NotFound { name: String },

    /// Payload cannot be decompressed or decoded back to text
    #[error("cannot decode stored payload: {reason}")]
    Decode { reason: String },

    /// Store file exists but cannot be opened for reads/writes
    #[error("store unavailable at {}: {reason}", path.display())]
    StoreUnavailable { path: PathBuf, reason: String },

    /// Database-level failure
    #[error("database error in '{op}': {message}")]
    Persistence { op: String, message: String },

    /// Filesystem failure
    #[error("io error in '{op}': {source}")]
    Io {
        op: String,
        #[source]
        source: std::io::Error,
    },

    /// Internal invariant breach
    #[error("internal error: {message}")]
    Internal { message: String },
}

impl TvError {
    /// Get the error kind
    pub fn kind(&self) -> TvErrorKind {
        match self {
            TvError::InvalidName { .. } => TvErrorKind::InvalidName,
            TvError::NotFound { .. } => TvErrorKind::NotFound,
            TvError::Decode { .. } => TvErrorKind::Decode,
            TvError::StoreUnavailable { .. } => TvErrorKind::StoreUnavailable,
            TvError::Persistence { .. } => TvErrorKind::Persistence,
            TvError::Io { .. } => TvErrorKind::Io,
            TvError::Internal { .. } => TvErrorKind::Internal,
        }
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind().code()
    }
}
