//! CozyTab database layer.
//!
//! Provides SQLite connection management, schema migrations, and the
//! key-value stores that hold persisted state records.
//!
//! # Usage
//!
//! ```no_run
//! use cozytab::database::{Database, KeyValueStore, SqliteStore};
//!
//! let store = SqliteStore::new(Database::open("cozytab.db").expect("failed to open database"));
//! store.set("cozytab_profession", "\"tech\"").expect("write failed");
//! ```

pub mod connection;
pub mod kv_store;
pub mod migrations;

pub use connection::Database;
pub use kv_store::{KeyValueStore, MemoryStore, SqliteStore};
