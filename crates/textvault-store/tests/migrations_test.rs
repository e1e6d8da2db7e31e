// Integration tests for the migration framework

use rusqlite::Connection;
use textvault_store::migrations::apply_migrations;

#[test]
fn test_migrations_recorded_with_checksums() {
    let mut conn = Connection::open_in_memory().unwrap();
    apply_migrations(&mut conn).unwrap();

    let rows: Vec<(String, String)> = conn
        .prepare("SELECT migration_id, checksum FROM schema_version ORDER BY id")
        .unwrap()
        .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))
        .unwrap()
        .collect::<Result<Vec<_>, _>>()
        .unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].0, "001_initial_schema");
    assert_eq!(rows[0].1.len(), 64); // SHA256 hex

    // Re-applying must not add rows
    apply_migrations(&mut conn).unwrap();
    let count: i64 = conn
        .query_row("SELECT count(*) FROM schema_version", [], |r| r.get(0))
        .unwrap();
    assert_eq!(count, 1);
}

#[test]
fn test_reapply_preserves_data() {
    let mut conn = Connection::open_in_memory().unwrap();
    apply_migrations(&mut conn).unwrap();

    conn.execute(
        "INSERT INTO files (name, file_data, created_at, updated_at) VALUES ('a', x'00', 0, 0)",
        [],
    )
    .unwrap();

    apply_migrations(&mut conn).unwrap();
    let count: i64 = conn
        .query_row("SELECT count(*) FROM files", [], |r| r.get(0))
        .unwrap();
    assert_eq!(count, 1);
}
