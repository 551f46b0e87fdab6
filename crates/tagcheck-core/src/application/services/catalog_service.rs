//! Catalog Service - catalog queries.
//!
//! Answers "which resource types support tags in this region" without
//! linting anything. Separated from LintService for single responsibility.

use serde::Serialize;
use tracing::instrument;

use crate::{
    application::ports::CatalogSource,
    domain::{Region, resource_types_supporting_tags},
    error::TagcheckResult,
};

/// Summary of one region's catalog for display purposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogSummary {
    pub region: Region,
    pub version: Option<String>,
    pub resource_type_count: usize,
    /// Sorted by name.
    pub tag_supporting_types: Vec<String>,
}

/// Service for catalog operations.
pub struct CatalogService {
    catalogs: Box<dyn CatalogSource>,
}

impl CatalogService {
    /// Create a new catalog service.
    pub fn new(catalogs: Box<dyn CatalogSource>) -> Self {
        Self { catalogs }
    }

    /// Describe the catalog of `region`.
    #[instrument(skip(self), fields(region = %region))]
    pub fn summarize(&self, region: &Region) -> TagcheckResult<CatalogSummary> {
        let catalog = self.catalogs.catalog(region)?;

        Ok(CatalogSummary {
            region: region.clone(),
            version: catalog.version().map(str::to_owned),
            resource_type_count: catalog.len(),
            tag_supporting_types: resource_types_supporting_tags(&catalog)
                .into_iter()
                .map(str::to_owned)
                .collect(),
        })
    }

    /// Regions the underlying source can serve.
    pub fn regions(&self) -> TagcheckResult<Vec<Region>> {
        self.catalogs.regions()
    }
}
