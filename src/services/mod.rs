// NexNav services
// Glue collaborators around the engine: admin auth, page metadata scraping,
// and backup export/import.

pub mod auth_service;
pub mod export_service;
pub mod metadata_scraper;
