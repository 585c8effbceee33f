//! Unit tests for the SQLite database layer and key-value stores.

use cozytab::database::migrations::{get_schema_version, run_all, CURRENT_SCHEMA_VERSION};
use cozytab::database::{Database, KeyValueStore, MemoryStore, SqliteStore};
use tempfile::TempDir;

fn sqlite_store() -> SqliteStore {
    SqliteStore::new(Database::open_in_memory().expect("in-memory database"))
}

// ─── Migrations ───

#[test]
fn test_open_runs_migrations() {
    let db = Database::open_in_memory().unwrap();
    assert_eq!(get_schema_version(db.connection()), CURRENT_SCHEMA_VERSION);

    let count: i64 = db
        .connection()
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'kv_store'",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(count, 1);
}

#[test]
fn test_migrations_are_idempotent() {
    let db = Database::open_in_memory().unwrap();
    run_all(db.connection()).unwrap();
    run_all(db.connection()).unwrap();
    assert_eq!(get_schema_version(db.connection()), CURRENT_SCHEMA_VERSION);
}

// ─── SqliteStore ───

#[test]
fn test_sqlite_get_missing_key() {
    let store = sqlite_store();
    assert_eq!(store.get("missing").unwrap(), None);
}

#[test]
fn test_sqlite_set_overwrites() {
    let store = sqlite_store();
    store.set("k", "one").unwrap();
    store.set("k", "two").unwrap();
    assert_eq!(store.get("k").unwrap().as_deref(), Some("two"));

    let rows: i64 = store
        .database()
        .connection()
        .query_row("SELECT COUNT(*) FROM kv_store", [], |row| row.get(0))
        .unwrap();
    assert_eq!(rows, 1);
}

#[test]
fn test_sqlite_remove() {
    let store = sqlite_store();
    store.set("k", "v").unwrap();
    store.remove("k").unwrap();
    store.remove("k").unwrap();
    assert_eq!(store.get("k").unwrap(), None);
}

#[test]
fn test_sqlite_values_survive_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("state.db");
    {
        let store = SqliteStore::new(Database::open(&path).unwrap());
        store.set("cozytab_profession", "\"tech\"").unwrap();
    }
    let store = SqliteStore::new(Database::open(&path).unwrap());
    assert_eq!(
        store.get("cozytab_profession").unwrap().as_deref(),
        Some("\"tech\"")
    );
}

// ─── MemoryStore ───

#[test]
fn test_memory_store_clones_share_records() {
    let store = MemoryStore::new();
    let other = store.clone();
    store.set("k", "v").unwrap();
    assert_eq!(other.get("k").unwrap().as_deref(), Some("v"));
    other.remove("k").unwrap();
    assert_eq!(store.get("k").unwrap(), None);
}
