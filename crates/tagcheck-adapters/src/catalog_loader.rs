//! Resource specification loading.
//!
//! A catalog file is a resource specification JSON document:
//!
//! ```json
//! {
//!   "ResourceSpecificationVersion": "18.4.0",
//!   "PropertyTypes": { ... },
//!   "ResourceTypes": {
//!     "AWS::SQS::Queue": { "Properties": { "Tags": { ... }, ... } }
//!   }
//! }
//! ```
//!
//! Only `ResourceTypes` is required.

use std::{fs, path::Path};

use serde_json::Value;
use tracing::{debug, instrument};

use tagcheck_core::{
    application::ApplicationError, domain::ResourceTypeCatalog, error::TagcheckResult,
};

/// Read and parse the catalog at `path`.
///
/// # Errors
///
/// `ApplicationError::CatalogLoad` if the file cannot be read, is not JSON,
/// or has no `ResourceTypes` mapping.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn load_catalog(path: &Path) -> TagcheckResult<ResourceTypeCatalog> {
    let source = fs::read_to_string(path).map_err(|e| ApplicationError::CatalogLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    parse_catalog(&source, path)
}

/// Parse catalog JSON. `origin` is only used in error messages.
pub fn parse_catalog(source: &str, origin: &Path) -> TagcheckResult<ResourceTypeCatalog> {
    let load_error = |reason: String| ApplicationError::CatalogLoad {
        path: origin.to_path_buf(),
        reason,
    };

    let document: Value = serde_json::from_str(source).map_err(|e| load_error(e.to_string()))?;
    let catalog =
        ResourceTypeCatalog::from_document(document).map_err(|e| load_error(e.to_string()))?;

    debug!(
        origin = %origin.display(),
        resource_types = catalog.len(),
        version = catalog.version().unwrap_or("unknown"),
        "Parsed resource catalog"
    );
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    use tagcheck_core::error::TagcheckError;
    use tempfile::NamedTempFile;

    fn is_catalog_load(err: &TagcheckError) -> bool {
        matches!(
            err,
            TagcheckError::Application(ApplicationError::CatalogLoad { .. })
        )
    }

    #[test]
    fn parses_minimal_catalog() {
        let catalog = parse_catalog(
            r#"{"ResourceTypes": {"AWS::SQS::Queue": {"Properties": {"Tags": {}}}}}"#,
            Path::new("inline.json"),
        )
        .unwrap();

        assert_eq!(catalog.len(), 1);
        assert!(catalog.get("AWS::SQS::Queue").unwrap().accepts_property("Tags"));
    }

    #[test]
    fn rejects_invalid_json() {
        let err = parse_catalog("{not json", Path::new("broken.json")).unwrap_err();
        assert!(is_catalog_load(&err));
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn rejects_document_without_resource_types() {
        let err = parse_catalog(r#"{"PropertyTypes": {}}"#, Path::new("p.json")).unwrap_err();
        assert!(is_catalog_load(&err));
        assert!(err.to_string().contains("ResourceTypes"));
    }

    #[test]
    fn load_catalog_reads_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"ResourceSpecificationVersion": "2.0.0", "ResourceTypes": {{}}}}"#
        )
        .unwrap();

        let catalog = load_catalog(file.path()).unwrap();
        assert_eq!(catalog.version(), Some("2.0.0"));
        assert!(catalog.is_empty());
    }

    #[test]
    fn load_catalog_missing_file() {
        let err = load_catalog(&PathBuf::from("/no/such/catalog.json")).unwrap_err();
        assert!(is_catalog_load(&err));
    }
}
