use scratchpad_core::db::{open_db, open_db_in_memory};
use scratchpad_core::{KvRepository, NoteStore, SqliteKvRepository, NOTES_KEY};

#[test]
fn load_before_any_save_returns_none() {
    let conn = open_db_in_memory().unwrap();
    let store = NoteStore::new(SqliteKvRepository::new(&conn));

    assert_eq!(store.load().unwrap(), None);
}

#[test]
fn load_returns_what_was_saved() {
    let conn = open_db_in_memory().unwrap();
    let store = NoteStore::new(SqliteKvRepository::new(&conn));

    for value in [
        Some("hello"),
        Some(""),
        Some("multi\nline \"quoted\"\ttext\n"),
        Some("unicode \u{1F4DD} ünïcödé"),
        None,
    ] {
        store.save(value).unwrap();
        assert_eq!(store.load().unwrap().as_deref(), value);
    }
}

#[test]
fn stored_value_is_json_under_notes_key() {
    let conn = open_db_in_memory().unwrap();
    let store = NoteStore::new(SqliteKvRepository::new(&conn));

    store.save(Some("a\nb")).unwrap();
    assert_eq!(
        store.repo().get(NOTES_KEY).unwrap().as_deref(),
        Some(r#""a\nb""#)
    );

    store.save(None).unwrap();
    assert_eq!(store.repo().get(NOTES_KEY).unwrap().as_deref(), Some("null"));
}

#[test]
fn save_overwrites_single_row() {
    let conn = open_db_in_memory().unwrap();
    let store = NoteStore::new(SqliteKvRepository::new(&conn));

    store.save(Some("first")).unwrap();
    store.save(Some("second")).unwrap();

    let rows: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM kv_store WHERE key = ?1;",
            [NOTES_KEY],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(rows, 1);
    assert_eq!(store.load().unwrap().as_deref(), Some("second"));
}

#[test]
fn notes_survive_reopening_the_database_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scratchpad.db");

    {
        let conn = open_db(&path).unwrap();
        let store = NoteStore::new(SqliteKvRepository::new(&conn));
        store.save(Some("persisted")).unwrap();
    }

    let conn = open_db(&path).unwrap();
    let store = NoteStore::new(SqliteKvRepository::new(&conn));
    assert_eq!(store.load().unwrap().as_deref(), Some("persisted"));
}

#[test]
fn malformed_stored_json_loads_as_no_notes() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO kv_store (key, value) VALUES (?1, ?2);",
        [NOTES_KEY, "not-json"],
    )
    .unwrap();

    let store = NoteStore::new(SqliteKvRepository::new(&conn));
    assert_eq!(store.load().unwrap(), None);
}

#[test]
fn storage_fault_surfaces_as_error() {
    let conn = open_db_in_memory().unwrap();
    conn.execute_batch("DROP TABLE kv_store;").unwrap();

    let store = NoteStore::new(SqliteKvRepository::new(&conn));
    assert!(store.load().is_err());
    assert!(store.save(Some("x")).is_err());
}
