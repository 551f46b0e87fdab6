//! Catalog store backed by a directory of per-region specification files.
//!
//! ```text
//! catalogs/
//! ├── us-east-1.json
//! ├── eu-west-1.json
//! └── ap-southeast-2.json
//! ```
//!
//! Files are read on first use and cached for the life of the store.

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use tracing::{debug, instrument, warn};

use tagcheck_core::{
    application::{ApplicationError, ports::CatalogSource},
    domain::{Region, ResourceTypeCatalog},
    error::TagcheckResult,
};

use crate::catalog_loader;

const CATALOG_EXTENSION: &str = "json";

/// Lazily loading, caching catalog store over `<root>/<region>.json`.
#[derive(Clone)]
pub struct DirectoryCatalogStore {
    root: PathBuf,
    cache: Arc<RwLock<HashMap<Region, Arc<ResourceTypeCatalog>>>>,
}

impl DirectoryCatalogStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            cache: Arc::default(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File expected to hold the catalog of `region`.
    pub fn path_for(&self, region: &Region) -> PathBuf {
        self.root
            .join(format!("{}.{}", region.as_str(), CATALOG_EXTENSION))
    }

    fn cached(&self, region: &Region) -> TagcheckResult<Option<Arc<ResourceTypeCatalog>>> {
        let cache = self
            .cache
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;
        Ok(cache.get(region).cloned())
    }
}

impl CatalogSource for DirectoryCatalogStore {
    #[instrument(skip(self), fields(region = %region))]
    fn catalog(&self, region: &Region) -> TagcheckResult<Arc<ResourceTypeCatalog>> {
        if let Some(catalog) = self.cached(region)? {
            return Ok(catalog);
        }

        let path = self.path_for(region);
        if !path.is_file() {
            return Err(ApplicationError::CatalogNotFound {
                region: region.to_string(),
            }
            .into());
        }

        let catalog = Arc::new(catalog_loader::load_catalog(&path)?);

        let mut cache = self
            .cache
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        // Another thread may have loaded it meanwhile; keep the first one.
        let catalog = cache.entry(region.clone()).or_insert(catalog).clone();

        debug!(path = %path.display(), "Cached region catalog");
        Ok(catalog)
    }

    /// Regions with a catalog file, sorted. Files whose stem is not a region
    /// name are skipped.
    fn regions(&self) -> TagcheckResult<Vec<Region>> {
        let entries = fs::read_dir(&self.root).map_err(|_| ApplicationError::PathNotFound {
            path: self.root.clone(),
        })?;

        let mut regions = Vec::new();
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some(CATALOG_EXTENSION) {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            match Region::parse(stem) {
                Ok(region) => regions.push(region),
                Err(_) => warn!(path = %path.display(), "Skipping catalog file not named after a region"),
            }
        }

        regions.sort();
        Ok(regions)
    }
}
