// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// The tag checker itself never fails; these errors come from constructing
/// domain values out of untrusted input (CLI flags, config, files).
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("invalid region '{region}'")]
    InvalidRegion { region: String },

    #[error("invalid rule id '{id}'")]
    InvalidRuleId { id: String },

    #[error("Invalid template: {0}")]
    InvalidTemplate(String),

    #[error("Invalid resource catalog: {0}")]
    InvalidCatalog(String),

    // ========================================================================
    // Not Found Errors
    // ========================================================================
    #[error("unknown rule '{id}'")]
    UnknownRule { id: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidRegion { region } => vec![
                format!("'{}' is not a region name", region),
                "Regions look like: us-east-1, eu-west-2, ap-southeast-2".into(),
            ],
            Self::InvalidRuleId { id } => vec![
                format!("'{}' is not a rule id", id),
                "Rule ids are E, W or I followed by four digits (e.g. E9001)".into(),
                "Try: tagcheck rules".into(),
            ],
            Self::UnknownRule { id } => vec![
                format!("No rule is registered with id {}", id),
                "Try: tagcheck rules".into(),
            ],
            Self::InvalidTemplate(_) => vec![
                "Templates must be a JSON or YAML mapping at the top level".into(),
            ],
            Self::InvalidCatalog(_) => vec![
                "Catalogs are resource specification documents with a ResourceTypes object".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidRegion { .. }
            | Self::InvalidRuleId { .. }
            | Self::InvalidTemplate(_)
            | Self::InvalidCatalog(_) => ErrorCategory::Validation,
            Self::UnknownRule { .. } => ErrorCategory::NotFound,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
}
