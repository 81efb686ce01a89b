//! Backup export/import and data reset for NexNav.
//!
//! The backup payload covers sites and the stored category order. Snippets
//! are left alone by both import and reset.

use std::time::{SystemTime, UNIX_EPOCH};

use serde_json::Value;

use crate::store::{keys, read_json, write_json, KvStore};
use crate::types::errors::ExportError;
use crate::types::export::{ExportData, EXPORT_VERSION};
use crate::types::site::Site;

/// Trait defining backup operations.
pub trait ExportServiceTrait {
    /// Snapshot of the current sites and category order. Reads fall back to
    /// empty collections so a partial store still produces a usable backup.
    fn export(&self) -> ExportData;
    /// Replaces sites (and categories, when present) from a backup payload.
    /// Returns the number of sites imported.
    fn import(&mut self, payload: &Value) -> Result<usize, ExportError>;
    /// Clears sites and categories. Snippets are untouched.
    fn reset(&mut self) -> Result<(), ExportError>;
}

/// Export service backed by a key-value store.
pub struct ExportService<'a> {
    store: &'a dyn KvStore,
}

impl<'a> ExportService<'a> {
    pub fn new(store: &'a dyn KvStore) -> Self {
        Self { store }
    }

    fn now() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64
    }
}

impl ExportServiceTrait for ExportService<'_> {
    fn export(&self) -> ExportData {
        let sites: Vec<Site> = read_json(self.store, keys::SITES)
            .ok()
            .flatten()
            .unwrap_or_default();
        let categories: Vec<String> = read_json(self.store, keys::CATEGORIES)
            .ok()
            .flatten()
            .unwrap_or_default();
        ExportData {
            version: EXPORT_VERSION,
            exported_at: Self::now(),
            sites,
            categories,
        }
    }

    fn import(&mut self, payload: &Value) -> Result<usize, ExportError> {
        let sites_value = payload
            .get("sites")
            .ok_or_else(|| ExportError::MalformedInput("missing 'sites' array".to_string()))?;
        if !sites_value.is_array() {
            return Err(ExportError::MalformedInput("'sites' must be an array".to_string()));
        }
        let sites: Vec<Site> = serde_json::from_value(sites_value.clone())
            .map_err(|e| ExportError::MalformedInput(format!("invalid site record: {}", e)))?;

        write_json(self.store, keys::SITES, &sites)?;

        if let Some(categories_value) = payload.get("categories") {
            if categories_value.is_array() {
                let categories: Vec<String> = serde_json::from_value(categories_value.clone())
                    .map_err(|e| {
                        ExportError::MalformedInput(format!("invalid category list: {}", e))
                    })?;
                write_json(self.store, keys::CATEGORIES, &categories)?;
            }
        }

        Ok(sites.len())
    }

    fn reset(&mut self) -> Result<(), ExportError> {
        let empty: Vec<Site> = Vec::new();
        write_json(self.store, keys::SITES, &empty)?;
        let no_categories: Vec<String> = Vec::new();
        write_json(self.store, keys::CATEGORIES, &no_categories)?;
        Ok(())
    }
}
