// NexNav key-value store layer
// The engine treats persistence as an opaque string-keyed blob store; the
// SQLite backend is the production implementation, the memory backend is
// used by the demo binary and tests.

pub mod memory;
pub mod migrations;
pub mod sqlite;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::types::errors::StoreError;

/// Store keys shared by the engine modules.
pub mod keys {
    /// JSON array of `Site` records.
    pub const SITES: &str = "sites";
    /// JSON array of category name strings, in curated display order.
    pub const CATEGORIES: &str = "categories";
    /// JSON array of `SnippetMeta` records.
    pub const SNIPPETS_INDEX: &str = "snippets_index";

    /// Key holding the raw body of one snippet.
    pub fn snippet(id: &str) -> String {
        format!("snippet:{}", id)
    }
}

/// Minimal key-value store contract: string keys, string values, no
/// cross-key transactions. Each write is applied atomically and is visible
/// to the next read.
pub trait KvStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn put(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn delete(&self, key: &str) -> Result<(), StoreError>;
}

/// Reads a JSON blob from the store. `Ok(None)` means the key is absent.
pub fn read_json<T: DeserializeOwned>(
    store: &dyn KvStore,
    key: &str,
) -> Result<Option<T>, StoreError> {
    match store.get(key)? {
        Some(raw) => {
            let value = serde_json::from_str(&raw).map_err(|e| {
                StoreError::Serialization(format!("key '{}': {}", key, e))
            })?;
            Ok(Some(value))
        }
        None => Ok(None),
    }
}

/// Serializes a value to JSON and writes it under `key`.
pub fn write_json<T: Serialize>(
    store: &dyn KvStore,
    key: &str,
    value: &T,
) -> Result<(), StoreError> {
    let raw = serde_json::to_string(value)
        .map_err(|e| StoreError::Serialization(format!("key '{}': {}", key, e)))?;
    store.put(key, &raw)
}
