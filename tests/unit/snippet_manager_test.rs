//! Unit tests for the snippet manager.

use nexnav::engine::snippet_manager::{SnippetManager, SnippetManagerTrait};
use nexnav::store::memory::MemoryStore;
use nexnav::store::{keys, KvStore};
use nexnav::types::errors::SnippetError;

#[test]
fn list_is_empty_on_fresh_store() {
    let store = MemoryStore::new();
    assert!(SnippetManager::new(&store).list_snippets().is_empty());
}

#[test]
fn create_writes_index_and_body() {
    let store = MemoryStore::new();
    let mut mgr = SnippetManager::new(&store);

    let meta = mgr
        .create_snippet("hello", "greeting", "fn main() {}")
        .unwrap();

    assert!(!meta.id.is_empty());
    assert_eq!(meta.title, "hello");
    assert_eq!(meta.created_at, meta.updated_at);

    let index = mgr.list_snippets();
    assert_eq!(index.len(), 1);
    assert_eq!(index[0], meta);

    // The body lives under its own key, not in the index.
    assert_eq!(mgr.get_snippet(&meta.id).unwrap(), "fn main() {}");
    assert_eq!(
        store.get(&keys::snippet(&meta.id)).unwrap(),
        Some("fn main() {}".to_string())
    );
}

#[test]
fn get_unknown_snippet_fails() {
    let store = MemoryStore::new();
    let err = SnippetManager::new(&store).get_snippet("missing").unwrap_err();
    assert!(matches!(err, SnippetError::NotFound(_)));
}

#[test]
fn update_changes_metadata_without_touching_body() {
    let store = MemoryStore::new();
    let mut mgr = SnippetManager::new(&store);
    let meta = mgr.create_snippet("old", "desc", "body").unwrap();

    let updated = mgr
        .update_snippet(&meta.id, Some("new"), None, None)
        .unwrap();

    assert_eq!(updated.title, "new");
    assert_eq!(updated.description, "desc");
    assert_eq!(updated.created_at, meta.created_at);
    assert_eq!(mgr.get_snippet(&meta.id).unwrap(), "body");
}

#[test]
fn update_can_replace_body() {
    let store = MemoryStore::new();
    let mut mgr = SnippetManager::new(&store);
    let meta = mgr.create_snippet("t", "d", "v1").unwrap();

    mgr.update_snippet(&meta.id, None, None, Some("v2")).unwrap();

    assert_eq!(mgr.get_snippet(&meta.id).unwrap(), "v2");
}

#[test]
fn update_unknown_id_fails_without_writing_body() {
    let store = MemoryStore::new();
    let mut mgr = SnippetManager::new(&store);

    let err = mgr
        .update_snippet("missing", Some("t"), None, Some("body"))
        .unwrap_err();

    assert!(matches!(err, SnippetError::NotFound(_)));
    // The body key must not exist either.
    assert_eq!(store.get(&keys::snippet("missing")).unwrap(), None);
}

#[test]
fn delete_removes_index_entry_and_body() {
    let store = MemoryStore::new();
    let mut mgr = SnippetManager::new(&store);
    let meta = mgr.create_snippet("t", "d", "body").unwrap();

    mgr.delete_snippet(&meta.id).unwrap();

    assert!(mgr.list_snippets().is_empty());
    assert_eq!(store.get(&keys::snippet(&meta.id)).unwrap(), None);
}

#[test]
fn delete_unknown_id_is_noop() {
    let store = MemoryStore::new();
    let mut mgr = SnippetManager::new(&store);
    mgr.create_snippet("t", "d", "body").unwrap();

    mgr.delete_snippet("missing").unwrap();
    assert_eq!(mgr.list_snippets().len(), 1);
}
