// Integration tests for the blob repository
// Covers: exists/save/load/list semantics and the one-record-per-name invariant

use rusqlite::Connection;
use textvault_core::TvErrorKind;
use textvault_store::{BlobRepo, StoreConfig};

fn setup_test_db() -> Connection {
    let mut conn = Connection::open_in_memory().unwrap();
    textvault_store::migrations::apply_migrations(&mut conn).unwrap();
    conn
}

fn test_config() -> StoreConfig {
    StoreConfig::new(":memory:")
}

#[test]
fn test_exists_false_then_true() {
    let conn = setup_test_db();
    let config = test_config();

    assert!(!BlobRepo::exists(&conn, "draft").unwrap());
    BlobRepo::save(&conn, &config, "draft", b"payload").unwrap();
    assert!(BlobRepo::exists(&conn, "draft").unwrap());
}

#[test]
fn test_exists_is_exact_match() {
    let conn = setup_test_db();
    let config = test_config();

    BlobRepo::save(&conn, &config, "draft", b"payload").unwrap();
    assert!(!BlobRepo::exists(&conn, "Draft").unwrap());
    assert!(!BlobRepo::exists(&conn, "draft ").unwrap());
}

#[test]
fn test_save_then_list_contains_name_once() {
    let conn = setup_test_db();
    let config = test_config();

    BlobRepo::save(&conn, &config, "draft", b"payload").unwrap();

    let names = BlobRepo::list_names(&conn).unwrap();
    assert_eq!(names.iter().filter(|n| *n == "draft").count(), 1);
}

#[test]
fn test_save_twice_leaves_one_record_with_second_payload() {
    let conn = setup_test_db();
    let config = test_config();

    BlobRepo::save(&conn, &config, "draft", b"first").unwrap();
    BlobRepo::save(&conn, &config, "draft", b"second").unwrap();

    let count: i64 = conn
        .query_row("SELECT count(*) FROM files WHERE name = 'draft'", [], |r| {
            r.get(0)
        })
        .unwrap();
    assert_eq!(count, 1, "Overwrite must not create a duplicate record");

    assert_eq!(BlobRepo::load(&conn, "draft").unwrap(), b"second");
}

#[test]
fn test_overwrite_keeps_created_at_and_bumps_nothing_else() {
    let conn = setup_test_db();
    let config = test_config();

    BlobRepo::save(&conn, &config, "draft", b"first").unwrap();
    let (id1, created1): (i64, i64) = conn
        .query_row(
            "SELECT id, created_at FROM files WHERE name = 'draft'",
            [],
            |r| Ok((r.get(0)?, r.get(1)?)),
        )
        .unwrap();

    BlobRepo::save(&conn, &config, "draft", b"second").unwrap();
    let (id2, created2): (i64, i64) = conn
        .query_row(
            "SELECT id, created_at FROM files WHERE name = 'draft'",
            [],
            |r| Ok((r.get(0)?, r.get(1)?)),
        )
        .unwrap();

    assert_eq!(id1, id2, "Overwrite must update the row in place");
    assert_eq!(created1, created2);
}

#[test]
fn test_load_missing_name_is_not_found() {
    let conn = setup_test_db();

    let err = BlobRepo::load(&conn, "never-saved").unwrap_err();
    assert_eq!(err.kind(), TvErrorKind::NotFound);
    assert!(err.to_string().contains("never-saved"));
}

#[test]
fn test_list_names_insertion_order() {
    let conn = setup_test_db();
    let config = test_config();

    BlobRepo::save(&conn, &config, "zebra", b"z").unwrap();
    BlobRepo::save(&conn, &config, "apple", b"a").unwrap();
    BlobRepo::save(&conn, &config, "mango", b"m").unwrap();

    let names = BlobRepo::list_names(&conn).unwrap();
    assert_eq!(names, vec!["zebra", "apple", "mango"]);
}

#[test]
fn test_list_names_empty_store() {
    let conn = setup_test_db();
    assert!(BlobRepo::list_names(&conn).unwrap().is_empty());
}

#[test]
fn test_save_rejects_invalid_names() {
    let conn = setup_test_db();
    let config = test_config().with_max_name_len(8);

    let err = BlobRepo::save(&conn, &config, "", b"payload").unwrap_err();
    assert_eq!(err.kind(), TvErrorKind::InvalidName);

    let err = BlobRepo::save(&conn, &config, "far-too-long-name", b"payload").unwrap_err();
    assert_eq!(err.kind(), TvErrorKind::InvalidName);

    // Nothing was written
    assert!(BlobRepo::list_names(&conn).unwrap().is_empty());
}

#[test]
fn test_save_empty_payload_round_trips() {
    let conn = setup_test_db();
    let config = test_config();

    BlobRepo::save(&conn, &config, "empty", b"").unwrap();
    assert_eq!(BlobRepo::load(&conn, "empty").unwrap(), Vec::<u8>::new());
}
