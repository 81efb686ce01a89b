//! App Core for NexNav.
//!
//! Central struct holding the key-value store and long-lived services.
//! Engine managers borrow the store and are created on demand per operation.

use std::sync::Arc;

use crate::engine::category_engine::CategoryEngine;
use crate::engine::site_manager::SiteManager;
use crate::engine::snippet_manager::SnippetManager;
use crate::services::auth_service::AuthService;
use crate::services::export_service::ExportService;
use crate::services::metadata_scraper::MetadataScraper;
use crate::store::memory::MemoryStore;
use crate::store::sqlite::SqliteStore;
use crate::store::KvStore;

/// Default admin password when the environment does not provide one.
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

/// Central application struct holding the store and services.
///
/// The engine managers are not stored directly because they borrow the store
/// with a lifetime; use the accessor methods to create them per call.
pub struct App {
    pub store: Arc<dyn KvStore>,
    pub auth: AuthService,
    pub scraper: MetadataScraper,
}

impl App {
    /// Opens the SQLite-backed store at `db_path`.
    pub fn new(db_path: &str, admin_password: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let store = SqliteStore::open(db_path)
            .map_err(|e| format!("Store init failed: {}", e))?;
        Self::with_store(Arc::new(store), admin_password)
    }

    /// Backs the app with an in-memory store. Used by the demo and tests.
    pub fn in_memory(admin_password: &str) -> Result<Self, Box<dyn std::error::Error>> {
        Self::with_store(Arc::new(MemoryStore::new()), admin_password)
    }

    fn with_store(
        store: Arc<dyn KvStore>,
        admin_password: &str,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let scraper = MetadataScraper::new()
            .map_err(|e| format!("Scraper init failed: {}", e))?;
        Ok(Self {
            store,
            auth: AuthService::new(admin_password),
            scraper,
        })
    }

    pub fn site_manager(&self) -> SiteManager<'_> {
        SiteManager::new(self.store.as_ref())
    }

    pub fn category_engine(&self) -> CategoryEngine<'_> {
        CategoryEngine::new(self.store.as_ref())
    }

    pub fn snippet_manager(&self) -> SnippetManager<'_> {
        SnippetManager::new(self.store.as_ref())
    }

    pub fn export_service(&self) -> ExportService<'_> {
        ExportService::new(self.store.as_ref())
    }
}
