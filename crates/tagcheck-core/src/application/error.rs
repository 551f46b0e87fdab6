//! Application layer errors.
//!
//! These errors represent failures in loading and orchestration, not in
//! rule evaluation. Rules themselves never fail.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// No catalog is available for the requested region.
    #[error("No resource catalog for region '{region}'")]
    CatalogNotFound { region: String },

    /// A catalog document could not be read or parsed.
    #[error("Failed to load resource catalog {path}: {reason}")]
    CatalogLoad { path: PathBuf, reason: String },

    /// A template file could not be read.
    #[error("Failed to read template {path}: {reason}")]
    TemplateLoad { path: PathBuf, reason: String },

    /// A template file was read but is not valid JSON/YAML.
    #[error("Failed to parse template {path}: {reason}")]
    TemplateParse { path: PathBuf, reason: String },

    /// A path given to lint does not exist.
    #[error("No such file or directory: {path}")]
    PathNotFound { path: PathBuf },

    /// A directory was given but contained no template files.
    #[error("No templates found under {path}")]
    NoTemplates { path: PathBuf },

    /// Store access failed (lock poisoned, etc.).
    #[error("Catalog store error")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::CatalogNotFound { region } => vec![
                format!("No catalog file was found for {}", region),
                "Check --region, or the lint.regions config value".into(),
                "Point --catalog at a resource specification file".into(),
            ],
            Self::CatalogLoad { path, .. } => vec![
                format!("Check that {} is a resource specification JSON document", path.display()),
                "It needs a top-level \"ResourceTypes\" object".into(),
            ],
            Self::TemplateLoad { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have read permissions".into(),
            ],
            Self::TemplateParse { path, .. } => vec![
                format!("{} is not valid JSON or YAML", path.display()),
                "Validate the file with your editor or a YAML linter".into(),
            ],
            Self::PathNotFound { path } => vec![
                format!("Nothing exists at {}", path.display()),
                "Check the path and try again".into(),
            ],
            Self::NoTemplates { path } => vec![
                format!("{} has no .json, .yaml, .yml or .template files", path.display()),
            ],
            Self::StoreLockError => vec![
                "The catalog store is locked".into(),
                "Try again in a moment".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::CatalogNotFound { .. } | Self::PathNotFound { .. } | Self::NoTemplates { .. } => {
                ErrorCategory::NotFound
            }
            Self::CatalogLoad { .. } => ErrorCategory::Configuration,
            Self::TemplateParse { .. } => ErrorCategory::Validation,
            Self::TemplateLoad { .. } | Self::StoreLockError => ErrorCategory::Internal,
        }
    }
}
