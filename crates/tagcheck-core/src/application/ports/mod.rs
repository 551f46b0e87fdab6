//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `tagcheck-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `CatalogSource`: per-region resource catalogs
//!   - `TemplateSource`: template reading and discovery
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{CatalogSource, TemplateSource};

#[cfg(test)]
pub use output::{MockCatalogSource, MockTemplateSource};
