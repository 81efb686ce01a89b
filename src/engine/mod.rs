// NexNav engine modules
// The category engine is the core: it owns the stored-vs-derived category
// reconciliation. Site and snippet managers handle record CRUD.

pub mod category_engine;
pub mod site_manager;
pub mod snippet_manager;
