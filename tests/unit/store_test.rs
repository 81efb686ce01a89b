//! Unit tests for the key-value store backends and JSON helpers.

use tempfile::tempdir;

use nexnav::store::memory::MemoryStore;
use nexnav::store::migrations::CURRENT_SCHEMA_VERSION;
use nexnav::store::sqlite::SqliteStore;
use nexnav::store::{keys, read_json, write_json, KvStore};
use nexnav::types::errors::StoreError;

fn exercise_backend(store: &dyn KvStore) {
    assert_eq!(store.get("missing").unwrap(), None);

    store.put("k", "v1").unwrap();
    assert_eq!(store.get("k").unwrap(), Some("v1".to_string()));

    // Overwrite replaces the value.
    store.put("k", "v2").unwrap();
    assert_eq!(store.get("k").unwrap(), Some("v2".to_string()));

    store.delete("k").unwrap();
    assert_eq!(store.get("k").unwrap(), None);

    // Deleting an absent key is not an error.
    store.delete("k").unwrap();
}

#[test]
fn memory_store_basic_operations() {
    exercise_backend(&MemoryStore::new());
}

#[test]
fn sqlite_store_basic_operations() {
    let store = SqliteStore::open_in_memory().unwrap();
    exercise_backend(&store);
}

#[test]
fn sqlite_store_persists_across_reopen() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nexnav.db");

    {
        let store = SqliteStore::open(&path).unwrap();
        store.put(keys::SITES, "[]").unwrap();
        store.put("snippet:abc", "body").unwrap();
    }

    let store = SqliteStore::open(&path).unwrap();
    assert_eq!(store.get(keys::SITES).unwrap(), Some("[]".to_string()));
    assert_eq!(store.get("snippet:abc").unwrap(), Some("body".to_string()));
}

#[test]
fn sqlite_open_runs_migrations() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nexnav.db");

    let store = SqliteStore::open(&path).unwrap();
    assert_eq!(store.schema_version().unwrap(), CURRENT_SCHEMA_VERSION);

    // Reopening an already-migrated database is fine.
    drop(store);
    let store = SqliteStore::open(&path).unwrap();
    assert_eq!(store.schema_version().unwrap(), CURRENT_SCHEMA_VERSION);
}

#[test]
fn read_json_absent_key_is_none() {
    let store = MemoryStore::new();
    let read: Option<Vec<String>> = read_json(&store, keys::CATEGORIES).unwrap();
    assert_eq!(read, None);
}

#[test]
fn json_helpers_round_trip() {
    let store = MemoryStore::new();
    let value = vec!["a".to_string(), "b".to_string()];

    write_json(&store, keys::CATEGORIES, &value).unwrap();
    let read: Option<Vec<String>> = read_json(&store, keys::CATEGORIES).unwrap();

    assert_eq!(read, Some(value));
}

#[test]
fn read_json_surfaces_malformed_payload() {
    let store = MemoryStore::new();
    store.put(keys::SITES, "not json").unwrap();

    let err = read_json::<Vec<String>>(&store, keys::SITES).unwrap_err();
    assert!(matches!(err, StoreError::Serialization(_)));
}

#[test]
fn snippet_key_is_prefixed_by_id() {
    assert_eq!(keys::snippet("abc"), "snippet:abc");
}
