//! Catalog stores implementing `CatalogSource`.

pub mod directory;
pub mod memory;

pub use directory::DirectoryCatalogStore;
pub use memory::InMemoryCatalogStore;
