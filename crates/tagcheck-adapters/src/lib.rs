//! Infrastructure adapters for tagcheck.
//!
//! This crate implements the ports defined in `tagcheck-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod builtin_catalog;
pub mod catalog_loader;
pub mod catalog_store;
pub mod template_loader;

// Re-export commonly used adapters
pub use catalog_store::{DirectoryCatalogStore, InMemoryCatalogStore};
pub use template_loader::LocalTemplateLoader;
