//! TextVault Store - SQLite persistence for named compressed documents
//!
//! Provides:
//! - Connection management with idempotent store bootstrap
//! - Embedded migration framework with checksums
//! - Blob repository with single-statement upsert semantics
//!
//! All operations return typed errors from `textvault-core`; this layer
//! never notifies a user or swallows a failure into a null result.

pub mod config;
pub mod db;
pub mod errors;
pub mod migrations;
pub mod repo;

// Re-export key types
pub use config::{StoreConfig, DEFAULT_MAX_NAME_LEN, LEGACY_NAME_WIDTH};
pub use errors::Result;
pub use repo::BlobRepo;
