//! TextVault Core - codec and error facility for the document vault
//!
//! This crate provides the persistence-independent pieces of TextVault:
//! - Text codec (lossless compression of documents to byte blobs)
//! - Canonical error taxonomy with stable error codes
//! - Logging facility with a single initialization point

pub mod codec;
pub mod errors;
pub mod logging;

// Re-export commonly used types
pub use errors::{Result, TvError, TvErrorKind};
