//! Site manager for NexNav.
//!
//! CRUD operations for site records stored as a single JSON array under the
//! `sites` key. Duplicate detection is a full scan of the collection, which
//! is fine at dashboard scale.

use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

use crate::store::{keys, read_json, write_json, KvStore};
use crate::types::errors::SiteError;
use crate::types::site::{Site, SiteDraft, SiteFilter, SitePatch};

/// Trait defining site management operations.
pub trait SiteManagerTrait {
    /// All sites in stored order; empty on store failure so listing views
    /// keep rendering.
    fn list_sites(&self) -> Vec<Site>;
    fn create_site(&mut self, draft: SiteDraft) -> Result<Site, SiteError>;
    fn update_site(&mut self, id: &str, patch: SitePatch) -> Result<Site, SiteError>;
    /// Removes the site if present; succeeds as a no-op when absent.
    fn delete_site(&mut self, id: &str) -> Result<(), SiteError>;
    /// Category filter and search term, ANDed.
    fn filter_sites(&self, filter: &SiteFilter, term: &str) -> Vec<Site>;
}

/// Site manager backed by a key-value store.
pub struct SiteManager<'a> {
    store: &'a dyn KvStore,
}

impl<'a> SiteManager<'a> {
    pub fn new(store: &'a dyn KvStore) -> Self {
        Self { store }
    }

    fn now() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64
    }

    /// Strict load for write paths: a store failure is a hard error here,
    /// never an empty list that would be written back over real data.
    fn load_sites(&self) -> Result<Vec<Site>, SiteError> {
        Ok(read_json(self.store, keys::SITES)?.unwrap_or_default())
    }

    fn save_sites(&self, sites: &[Site]) -> Result<(), SiteError> {
        write_json(self.store, keys::SITES, &sites)?;
        Ok(())
    }

    /// True when the site matches the category filter and, if `term` is
    /// non-empty, contains it case-insensitively in name, description, or URL.
    pub fn matches(site: &Site, filter: &SiteFilter, term: &str) -> bool {
        let in_category = match filter {
            SiteFilter::All => true,
            SiteFilter::Featured => site.starred,
            SiteFilter::Category(name) => site.category == *name,
        };
        if !in_category {
            return false;
        }
        if term.is_empty() {
            return true;
        }
        let needle = term.to_lowercase();
        site.name.to_lowercase().contains(&needle)
            || site.description.to_lowercase().contains(&needle)
            || site.url.to_lowercase().contains(&needle)
    }
}

impl SiteManagerTrait for SiteManager<'_> {
    fn list_sites(&self) -> Vec<Site> {
        read_json(self.store, keys::SITES)
            .ok()
            .flatten()
            .unwrap_or_default()
    }

    /// Creates a site, assigning its ID and timestamps.
    ///
    /// Fails with `DuplicateUrl` when another site already has the same URL.
    /// The draft's category is not validated against the stored list: an
    /// unknown category simply surfaces as a derived entry on the next read.
    fn create_site(&mut self, draft: SiteDraft) -> Result<Site, SiteError> {
        let mut sites = self.load_sites()?;
        if sites.iter().any(|s| s.url == draft.url) {
            return Err(SiteError::DuplicateUrl(draft.url));
        }

        let now = Self::now();
        let site = Site {
            id: Uuid::new_v4().to_string(),
            url: draft.url,
            name: draft.name,
            description: draft.description,
            icon: draft.icon,
            category: draft.category,
            starred: draft.starred,
            created_at: now,
            updated_at: now,
        };

        sites.push(site.clone());
        self.save_sites(&sites)?;
        Ok(site)
    }

    /// Merges the patch over the existing record and refreshes `updated_at`.
    ///
    /// Changing `category` to a brand-new value is legal; it will show up as
    /// a derived category on the next ordering read.
    fn update_site(&mut self, id: &str, patch: SitePatch) -> Result<Site, SiteError> {
        let mut sites = self.load_sites()?;
        let index = sites
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| SiteError::NotFound(id.to_string()))?;

        let site = &mut sites[index];
        if let Some(url) = patch.url {
            site.url = url;
        }
        if let Some(name) = patch.name {
            site.name = name;
        }
        if let Some(description) = patch.description {
            site.description = description;
        }
        if let Some(icon) = patch.icon {
            site.icon = icon;
        }
        if let Some(category) = patch.category {
            site.category = category;
        }
        if let Some(starred) = patch.starred {
            site.starred = starred;
        }
        site.updated_at = Self::now();

        let updated = sites[index].clone();
        self.save_sites(&sites)?;
        Ok(updated)
    }

    fn delete_site(&mut self, id: &str) -> Result<(), SiteError> {
        let mut sites = self.load_sites()?;
        let before = sites.len();
        sites.retain(|s| s.id != id);
        if sites.len() == before {
            // Absent already counts as deleted.
            return Ok(());
        }
        self.save_sites(&sites)
    }

    fn filter_sites(&self, filter: &SiteFilter, term: &str) -> Vec<Site> {
        self.list_sites()
            .into_iter()
            .filter(|s| Self::matches(s, filter, term))
            .collect()
    }
}
