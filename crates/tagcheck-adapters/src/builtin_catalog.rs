//! Built-in resource catalog.
//!
//! A trimmed resource specification compiled into the binary, so `tagcheck
//! lint` works without any catalog on disk. It covers common types that
//! accept `Tags` (SQS, SNS, S3, DynamoDB, Lambda, IAM roles) and a few that
//! do not (policies, subscriptions, permissions).
//!
//! Point `--catalog` or `--catalog-dir` at a full specification for anything
//! beyond that.

use std::path::Path;

use tagcheck_core::{domain::ResourceTypeCatalog, error::TagcheckResult};

use crate::catalog_loader;

const RESOURCE_SPECIFICATION: &str = include_str!("../data/resource_specification.json");

/// Name shown in errors and logs for the embedded document.
pub const BUILTIN_ORIGIN: &str = "<builtin>";

/// Parse the embedded catalog.
pub fn builtin_catalog() -> TagcheckResult<ResourceTypeCatalog> {
    catalog_loader::parse_catalog(RESOURCE_SPECIFICATION, Path::new(BUILTIN_ORIGIN))
}
