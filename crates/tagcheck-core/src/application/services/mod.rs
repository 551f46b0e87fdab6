//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "lint these templates" or "describe a catalog".

pub mod catalog_service;
pub mod lint_service;

pub use catalog_service::{CatalogService, CatalogSummary};
pub use lint_service::{FileReport, LintReport, LintService};
