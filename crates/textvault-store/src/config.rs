//! Store configuration
//!
//! Passed explicitly into the store and editor layers; there is no
//! ambient/global configuration to read.

use crate::errors::{invalid_name, Result};
use std::path::{Path, PathBuf};

/// Default cap on stored names, in characters.
pub const DEFAULT_MAX_NAME_LEN: usize = 64;

/// Column width the original schema hard-coded. Kept as a named constant
/// for callers that want byte-compatible behaviour with old stores.
pub const LEGACY_NAME_WIDTH: usize = 16;

/// Configuration for a single store location
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Path to the SQLite database file
    pub db_path: PathBuf,
    /// Maximum stored-name length in characters; enforced by validation
    /// rather than a schema limit
    pub max_name_len: usize,
}

impl StoreConfig {
    /// Create a config for the given database path with the default name cap
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
            max_name_len: DEFAULT_MAX_NAME_LEN,
        }
    }

    /// Override the name cap
    pub fn with_max_name_len(mut self, max_name_len: usize) -> Self {
        self.max_name_len = max_name_len;
        self
    }

    /// Get the configured database path
    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    /// Validate a name against this config before it reaches the database.
    ///
    /// Rejects empty names and names longer than `max_name_len` characters.
    /// Matching elsewhere is exact-string; no normalization happens here.
    pub fn validate_name(&self, name: &str) -> Result<()> {
        if name.is_empty() {
            return Err(invalid_name("name must not be empty"));
        }
        let len = name.chars().count();
        if len > self.max_name_len {
            return Err(invalid_name(format!(
                "name is {} characters, cap is {}",
                len, self.max_name_len
            )));
        }
        Ok(())
    }
}
