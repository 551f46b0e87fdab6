//! Application layer for tagcheck.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (LintService, CatalogService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! lint logic itself. All rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    CatalogService,
    CatalogSummary, // DTO for catalog metadata
    FileReport,
    LintReport,
    LintService,
};

// Re-export port traits (for adapter implementation)
pub use ports::{CatalogSource, TemplateSource};

pub use error::ApplicationError;
