//! Blob repository
//!
//! CRUD over the files table: one record per name, compressed payload in
//! file_data. Saving an existing name overwrites its payload in place via
//! a single upsert statement, so there is no window between an existence
//! check and a write.

#![allow(clippy::result_large_err)]

use crate::config::StoreConfig;
use crate::errors::{from_rusqlite, not_found, Result};
use rusqlite::{Connection, OptionalExtension};

/// SQLite repository for named blobs
pub struct BlobRepo;

impl BlobRepo {
    /// True iff a record with exactly this name is present.
    pub fn exists(conn: &Connection, name: &str) -> Result<bool> {
        let row: Option<i64> = conn
            .query_row("SELECT 1 FROM files WHERE name = ?1", [name], |row| {
                row.get(0)
            })
            .optional()
            .map_err(|e| from_rusqlite("exists", e))?;

        Ok(row.is_some())
    }

    /// Save a blob under `name`, inserting or overwriting in one statement.
    ///
    /// The name is validated against `config` before any SQL is issued.
    pub fn save(conn: &Connection, config: &StoreConfig, name: &str, data: &[u8]) -> Result<()> {
        config.validate_name(name)?;

        let now = chrono::Utc::now().timestamp();
        conn.execute(
            "INSERT INTO files (name, file_data, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?3)
             ON CONFLICT(name) DO UPDATE SET
                file_data = excluded.file_data,
                updated_at = excluded.updated_at",
            rusqlite::params![name, data, now],
        )
        .map_err(|e| from_rusqlite("save", e))?;

        tracing::debug!(name, bytes = data.len(), "blob saved");
        Ok(())
    }

    /// Load the blob stored under `name`.
    ///
    /// Returns `TvError::NotFound` when no record exists; absence is a
    /// typed outcome, not an empty success.
    pub fn load(conn: &Connection, name: &str) -> Result<Vec<u8>> {
        let data: Option<Vec<u8>> = conn
            .query_row(
                "SELECT file_data FROM files WHERE name = ?1",
                [name],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| from_rusqlite("load", e))?;

        match data {
            Some(bytes) => {
                tracing::debug!(name, bytes = bytes.len(), "blob loaded");
                Ok(bytes)
            }
            None => Err(not_found(name)),
        }
    }

    /// List all stored names in insertion (rowid) order.
    ///
    /// Callers must not rely on any sort order.
    pub fn list_names(conn: &Connection) -> Result<Vec<String>> {
        let mut stmt = conn
            .prepare("SELECT name FROM files ORDER BY id")
            .map_err(|e| from_rusqlite("list_names", e))?;

        let names = stmt
            .query_map([], |row| row.get(0))
            .map_err(|e| from_rusqlite("list_names", e))?
            .collect::<std::result::Result<Vec<String>, _>>()
            .map_err(|e| from_rusqlite("list_names", e))?;

        Ok(names)
    }
}
