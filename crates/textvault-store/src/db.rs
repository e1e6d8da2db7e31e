//! Database connection management
//!
//! Opening, configuring, and bootstrapping the SQLite store file.

#![allow(clippy::result_large_err)]

use crate::errors::{from_rusqlite, io_error, store_unavailable, Result};
use crate::migrations::apply_migrations;
use rusqlite::{Connection, OpenFlags};
use std::path::Path;

/// Open a SQLite database at the given path
pub fn open<P: AsRef<Path>>(path: P) -> Result<Connection> {
    Connection::open(path.as_ref()).map_err(|e| from_rusqlite("open", e))
}

/// Open an in-memory SQLite database (for testing)
pub fn open_in_memory() -> Result<Connection> {
    Connection::open_in_memory().map_err(|e| from_rusqlite("open_in_memory", e))
}

/// Configure a connection with optimal settings
pub fn configure(conn: &Connection) -> Result<()> {
    // Enable foreign keys
    conn.execute("PRAGMA foreign_keys = ON", [])
        .map_err(|e| from_rusqlite("configure", e))?;

    // Set WAL mode for better concurrency. This pragma returns the new
    // mode as a row, so it has to go through query_row rather than execute.
    conn.query_row("PRAGMA journal_mode = WAL", [], |row| {
        row.get::<_, String>(0)
    })
    .map_err(|e| from_rusqlite("configure", e))?;

    Ok(())
}

/// Report whether the store at `path` can be opened for reads/writes.
///
/// Returns `Ok(false)` when no file exists there yet. Any other failure
/// (permissions, corruption) is an error, never silently "not present".
pub fn check_available<P: AsRef<Path>>(path: P) -> Result<bool> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(false);
    }

    let conn = Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_WRITE)
        .map_err(|e| store_unavailable(path, e))?;

    // SQLite opens lazily; force it to actually read the file header
    conn.query_row("SELECT count(*) FROM sqlite_master", [], |row| {
        row.get::<_, i64>(0)
    })
    .map_err(|e| store_unavailable(path, e))?;

    Ok(true)
}

/// Idempotently ensure the store exists at `path` and return a connection.
///
/// Creates parent directories and the database file if missing, then
/// applies any pending migrations. Re-running against an existing store
/// is a no-op that preserves records.
pub fn bootstrap<P: AsRef<Path>>(path: P) -> Result<Connection> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| io_error("bootstrap", e))?;
        }
    }

    let mut conn = open(path)?;
    configure(&conn)?;
    apply_migrations(&mut conn)?;

    tracing::debug!(path = %path.display(), "store bootstrapped");
    Ok(conn)
}
