//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `tagcheck-adapters` crate provides implementations.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::domain::{Region, ResourceTypeCatalog, Template};
use crate::error::TagcheckResult;

/// Port for per-region resource catalogs.
///
/// Implemented by:
/// - `tagcheck_adapters::InMemoryCatalogStore` (embedded or single-file catalog)
/// - `tagcheck_adapters::DirectoryCatalogStore` (`<dir>/<region>.json`)
///
/// Catalogs are shared read-only, hence `Arc`.
#[cfg_attr(test, mockall::automock)]
pub trait CatalogSource: Send + Sync {
    /// Catalog for `region`.
    ///
    /// # Errors
    ///
    /// `ApplicationError::CatalogNotFound` if the source has nothing for the
    /// region; `ApplicationError::CatalogLoad` if it exists but is unreadable.
    fn catalog(&self, region: &Region) -> TagcheckResult<Arc<ResourceTypeCatalog>>;

    /// Regions this source can serve, sorted.
    fn regions(&self) -> TagcheckResult<Vec<Region>>;
}

/// Port for reading templates.
///
/// Implemented by:
/// - `tagcheck_adapters::LocalTemplateLoader` (JSON / YAML files)
#[cfg_attr(test, mockall::automock)]
pub trait TemplateSource: Send + Sync {
    /// Read and parse one template file.
    fn load(&self, path: &Path) -> TagcheckResult<Template>;

    /// Template files under a directory, sorted.
    fn discover(&self, root: &Path) -> TagcheckResult<Vec<PathBuf>>;
}
