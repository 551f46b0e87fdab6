//! In-memory catalog store with the built-in catalog.

use std::{
    collections::HashMap,
    path::Path,
    sync::{Arc, RwLock},
};

use tracing::debug;

use tagcheck_core::{
    application::{ApplicationError, ports::CatalogSource},
    domain::{Region, ResourceTypeCatalog},
    error::TagcheckResult,
};

use crate::{builtin_catalog, catalog_loader};

/// Thread-safe in-memory catalog store.
///
/// Region-specific catalogs take precedence; the fallback catalog, if set,
/// answers for every other region.
#[derive(Clone, Default)]
pub struct InMemoryCatalogStore {
    inner: Arc<RwLock<HashMap<Region, Arc<ResourceTypeCatalog>>>>,
    fallback: Option<Arc<ResourceTypeCatalog>>,
}

impl InMemoryCatalogStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that serves the built-in catalog for every region.
    pub fn with_builtin() -> TagcheckResult<Self> {
        Ok(Self::with_fallback(builtin_catalog::builtin_catalog()?))
    }

    /// Create a store that serves `catalog` for every region.
    pub fn with_fallback(catalog: ResourceTypeCatalog) -> Self {
        Self {
            inner: Arc::default(),
            fallback: Some(Arc::new(catalog)),
        }
    }

    /// Create a store that serves the catalog file at `path` for every region.
    pub fn from_file(path: &Path) -> TagcheckResult<Self> {
        let catalog = catalog_loader::load_catalog(path)?;
        debug!(path = %path.display(), "Using single catalog file for all regions");
        Ok(Self::with_fallback(catalog))
    }

    /// Register a catalog for one region, replacing any previous one.
    pub fn insert(&self, region: Region, catalog: ResourceTypeCatalog) -> TagcheckResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        inner.insert(region, Arc::new(catalog));
        Ok(())
    }

    /// Number of region-specific catalogs.
    pub fn len(&self) -> usize {
        self.inner.read().map(|inner| inner.len()).unwrap_or(0)
    }

    /// Check if store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0 && self.fallback.is_none()
    }
}

impl CatalogSource for InMemoryCatalogStore {
    fn catalog(&self, region: &Region) -> TagcheckResult<Arc<ResourceTypeCatalog>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        inner
            .get(region)
            .or(self.fallback.as_ref())
            .cloned()
            .ok_or_else(|| {
                ApplicationError::CatalogNotFound {
                    region: region.to_string(),
                }
                .into()
            })
    }

    /// Regions with a dedicated catalog. A store holding only a fallback
    /// reports the default region.
    fn regions(&self) -> TagcheckResult<Vec<Region>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        let mut regions: Vec<Region> = inner.keys().cloned().collect();
        if regions.is_empty() && self.fallback.is_some() {
            regions.push(Region::default());
        }
        regions.sort();
        Ok(regions)
    }
}
