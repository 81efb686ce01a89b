// NexNav shared type definitions
// Each submodule defines types used across the application.

pub mod errors;
pub mod export;
pub mod site;
pub mod snippet;
