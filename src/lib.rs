//! NexNav — a self-hosted bookmark/navigation dashboard over a key-value store.
//!
//! This library crate exposes all modules for use by the binaries and integration tests.

pub mod app;
pub mod engine;
pub mod rpc_handler;
pub mod services;
pub mod store;
pub mod types;
