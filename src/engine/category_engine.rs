//! Category-Consistency Engine for NexNav.
//!
//! Keeps the stored category order (`categories` key) and the `category`
//! field embedded in each site record (`sites` key) in a consistent,
//! user-visible ordering. The store has no referential integrity, so every
//! mutation to either side goes through this engine.
//!
//! A category can exist in two ways: *stored* (explicitly ordered in the
//! `categories` list) or *derived* (only implied by some site's `category`
//! field). The effective display order is stored order first, then derived
//! names sorted lexicographically — recomputed on every read, never cached.

use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::store::{keys, read_json, write_json, KvStore};
use crate::types::errors::CategoryError;
use crate::types::site::{Site, UNCATEGORIZED};

/// Outcome of a bulk category mutation (rename/delete) across site records.
///
/// The stored category-list write is authoritative and reported through the
/// operation's `Result`; the follow-up site rewrite is best effort and its
/// outcome is carried here instead of being silently dropped.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BulkUpdateReport {
    /// Number of site records whose `category` field was rewritten.
    pub sites_updated: usize,
    /// Set when the site rewrite failed after the category list was already
    /// persisted. The category list is still the source of truth.
    pub site_write_error: Option<String>,
}

/// Merges the stored category order with categories derived from site data.
///
/// Stored order comes first (relative order preserved); any category that
/// appears only in `sites` is appended afterwards in lexicographic order.
/// Every distinct name appears exactly once.
pub fn compute_effective_order(stored: &[String], sites: &[Site]) -> Vec<String> {
    let mut order: Vec<String> = Vec::with_capacity(stored.len());
    for name in stored {
        if !order.contains(name) {
            order.push(name.clone());
        }
    }

    let mut derived: Vec<String> = sites
        .iter()
        .map(|s| s.category.clone())
        .filter(|c| !order.contains(c))
        .collect();
    derived.sort();
    derived.dedup();

    order.extend(derived);
    order
}

/// Trait defining category management operations.
pub trait CategoryEngineTrait {
    /// Stored order merged with derived categories; empty on store failure.
    fn effective_order(&self) -> Vec<String>;
    /// The curated list as persisted; empty on store failure.
    fn stored_categories(&self) -> Vec<String>;
    fn add_category(&mut self, name: &str) -> Result<(), CategoryError>;
    fn rename_category(&mut self, old: &str, new: &str) -> Result<BulkUpdateReport, CategoryError>;
    fn delete_category(&mut self, name: &str) -> Result<BulkUpdateReport, CategoryError>;
    /// Moves the entry at `from` by `delta` positions. Returns the resulting
    /// stored list; out-of-bounds moves are a silent no-op.
    fn reorder_category(&mut self, from: usize, delta: i64) -> Result<Vec<String>, CategoryError>;
}

/// Category engine backed by a key-value store.
pub struct CategoryEngine<'a> {
    store: &'a dyn KvStore,
}

impl<'a> CategoryEngine<'a> {
    pub fn new(store: &'a dyn KvStore) -> Self {
        Self { store }
    }

    fn now() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64
    }

    /// Strict read of the stored category list. Write paths use this so a
    /// store failure surfaces as a hard error instead of clobbering data.
    fn load_stored(&self) -> Result<Vec<String>, CategoryError> {
        Ok(read_json(self.store, keys::CATEGORIES)?.unwrap_or_default())
    }

    fn load_sites_or_empty(&self) -> Vec<Site> {
        read_json(self.store, keys::SITES)
            .ok()
            .flatten()
            .unwrap_or_default()
    }

    /// Rewrites `category` on every site matching `old`. Best effort: a
    /// failure here never unwinds the already-persisted category list.
    fn rewrite_site_categories(&self, old: &str, new: &str) -> BulkUpdateReport {
        let mut sites: Vec<Site> = match read_json(self.store, keys::SITES) {
            Ok(found) => found.unwrap_or_default(),
            Err(e) => {
                return BulkUpdateReport {
                    sites_updated: 0,
                    site_write_error: Some(e.to_string()),
                }
            }
        };

        let now = Self::now();
        let mut updated = 0;
        for site in sites.iter_mut() {
            if site.category == old {
                site.category = new.to_string();
                site.updated_at = now;
                updated += 1;
            }
        }

        if updated == 0 {
            return BulkUpdateReport::default();
        }

        match write_json(self.store, keys::SITES, &sites) {
            Ok(()) => BulkUpdateReport {
                sites_updated: updated,
                site_write_error: None,
            },
            Err(e) => BulkUpdateReport {
                sites_updated: 0,
                site_write_error: Some(e.to_string()),
            },
        }
    }
}

impl CategoryEngineTrait for CategoryEngine<'_> {
    fn effective_order(&self) -> Vec<String> {
        let stored = self.load_stored().unwrap_or_default();
        let sites = self.load_sites_or_empty();
        compute_effective_order(&stored, &sites)
    }

    fn stored_categories(&self) -> Vec<String> {
        self.load_stored().unwrap_or_default()
    }

    /// Appends a new category to the end of the stored list.
    ///
    /// The match against existing names is case-sensitive and exact.
    /// Site records are not touched.
    fn add_category(&mut self, name: &str) -> Result<(), CategoryError> {
        let mut stored = self.load_stored()?;
        if stored.iter().any(|c| c == name) {
            return Err(CategoryError::Duplicate(name.to_string()));
        }
        stored.push(name.to_string());
        write_json(self.store, keys::CATEGORIES, &stored)?;
        Ok(())
    }

    /// Renames a category in the stored list and on every affected site.
    ///
    /// A stored entry is replaced in place (position preserved); a category
    /// that exists only as a derived entry is appended under its new name.
    /// The category-list write happens first and is authoritative; the site
    /// rewrite outcome is returned in the report.
    fn rename_category(&mut self, old: &str, new: &str) -> Result<BulkUpdateReport, CategoryError> {
        if old == new {
            return Ok(BulkUpdateReport::default());
        }

        let mut stored = self.load_stored()?;
        match stored.iter().position(|c| c == old) {
            Some(index) => stored[index] = new.to_string(),
            None => stored.push(new.to_string()),
        }
        // Renaming onto an existing name merges the two entries; keep the
        // first occurrence so the list stays duplicate-free.
        let mut seen = Vec::with_capacity(stored.len());
        stored.retain(|c| {
            if seen.contains(c) {
                false
            } else {
                seen.push(c.clone());
                true
            }
        });

        write_json(self.store, keys::CATEGORIES, &stored)?;
        Ok(self.rewrite_site_categories(old, new))
    }

    /// Removes a category from the stored list and rehomes its sites to
    /// `"uncategorized"`. Sites themselves are never deleted.
    fn delete_category(&mut self, name: &str) -> Result<BulkUpdateReport, CategoryError> {
        let mut stored = self.load_stored()?;
        stored.retain(|c| c != name);
        write_json(self.store, keys::CATEGORIES, &stored)?;
        Ok(self.rewrite_site_categories(name, UNCATEGORIZED))
    }

    /// Moves the category at `from` in the effective order by `delta`.
    ///
    /// The effective order is materialized into the stored list first: the
    /// user may be reordering a category that exists only as a derived entry,
    /// and the index-based splice is only valid against the merged list.
    /// Remove-then-insert semantics, so untouched elements keep their
    /// relative order.
    fn reorder_category(&mut self, from: usize, delta: i64) -> Result<Vec<String>, CategoryError> {
        let stored = self.load_stored()?;
        let sites = self.load_sites_or_empty();
        let mut order = compute_effective_order(&stored, &sites);

        if from >= order.len() {
            return Ok(stored);
        }
        let target = from as i64 + delta;
        if target < 0 || target as usize >= order.len() {
            return Ok(stored);
        }

        let item = order.remove(from);
        order.insert(target as usize, item);

        write_json(self.store, keys::CATEGORIES, &order)?;
        Ok(order)
    }
}
