//! Snippet manager for NexNav.
//!
//! Snippet metadata lives in the `snippets_index` JSON array; each body is a
//! raw string under its own `snippet:{id}` key, so listing never pulls the
//! (potentially large) bodies.

use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

use crate::store::{keys, read_json, write_json, KvStore};
use crate::types::errors::SnippetError;
use crate::types::snippet::SnippetMeta;

/// Trait defining snippet management operations.
pub trait SnippetManagerTrait {
    /// Index metadata only; empty on store failure.
    fn list_snippets(&self) -> Vec<SnippetMeta>;
    /// The raw body of one snippet.
    fn get_snippet(&self, id: &str) -> Result<String, SnippetError>;
    fn create_snippet(
        &mut self,
        title: &str,
        description: &str,
        code: &str,
    ) -> Result<SnippetMeta, SnippetError>;
    fn update_snippet(
        &mut self,
        id: &str,
        title: Option<&str>,
        description: Option<&str>,
        code: Option<&str>,
    ) -> Result<SnippetMeta, SnippetError>;
    /// Removes index entry and body; succeeds as a no-op when absent.
    fn delete_snippet(&mut self, id: &str) -> Result<(), SnippetError>;
}

/// Snippet manager backed by a key-value store.
pub struct SnippetManager<'a> {
    store: &'a dyn KvStore,
}

impl<'a> SnippetManager<'a> {
    pub fn new(store: &'a dyn KvStore) -> Self {
        Self { store }
    }

    fn now() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64
    }

    fn load_index(&self) -> Result<Vec<SnippetMeta>, SnippetError> {
        Ok(read_json(self.store, keys::SNIPPETS_INDEX)?.unwrap_or_default())
    }

    fn save_index(&self, index: &[SnippetMeta]) -> Result<(), SnippetError> {
        write_json(self.store, keys::SNIPPETS_INDEX, &index)?;
        Ok(())
    }
}

impl SnippetManagerTrait for SnippetManager<'_> {
    fn list_snippets(&self) -> Vec<SnippetMeta> {
        read_json(self.store, keys::SNIPPETS_INDEX)
            .ok()
            .flatten()
            .unwrap_or_default()
    }

    fn get_snippet(&self, id: &str) -> Result<String, SnippetError> {
        self.store
            .get(&keys::snippet(id))
            .map_err(|e| SnippetError::Store(e.to_string()))?
            .ok_or_else(|| SnippetError::NotFound(id.to_string()))
    }

    fn create_snippet(
        &mut self,
        title: &str,
        description: &str,
        code: &str,
    ) -> Result<SnippetMeta, SnippetError> {
        let mut index = self.load_index()?;

        let now = Self::now();
        let meta = SnippetMeta {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            description: description.to_string(),
            created_at: now,
            updated_at: now,
        };

        index.push(meta.clone());
        self.save_index(&index)?;
        self.store
            .put(&keys::snippet(&meta.id), code)
            .map_err(|e| SnippetError::Store(e.to_string()))?;
        Ok(meta)
    }

    /// Updates metadata and/or body. Unknown IDs are an error rather than a
    /// silent index miss, so a body can never be written without its entry.
    fn update_snippet(
        &mut self,
        id: &str,
        title: Option<&str>,
        description: Option<&str>,
        code: Option<&str>,
    ) -> Result<SnippetMeta, SnippetError> {
        let mut index = self.load_index()?;
        let entry = index
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| SnippetError::NotFound(id.to_string()))?;

        if let Some(title) = title {
            entry.title = title.to_string();
        }
        if let Some(description) = description {
            entry.description = description.to_string();
        }
        entry.updated_at = Self::now();
        let meta = entry.clone();

        self.save_index(&index)?;
        if let Some(code) = code {
            self.store
                .put(&keys::snippet(id), code)
                .map_err(|e| SnippetError::Store(e.to_string()))?;
        }
        Ok(meta)
    }

    fn delete_snippet(&mut self, id: &str) -> Result<(), SnippetError> {
        let mut index = self.load_index()?;
        index.retain(|m| m.id != id);
        self.save_index(&index)?;
        self.store
            .delete(&keys::snippet(id))
            .map_err(|e| SnippetError::Store(e.to_string()))
    }
}
