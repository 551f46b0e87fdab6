//! tagcheck Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the tagcheck
//! template linter, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           tagcheck-cli (CLI)            │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │    (LintService, CatalogService)        │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │   (Driven: CatalogSource, TemplateSource)│
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    tagcheck-adapters (Infrastructure)   │
//! │ (InMemoryCatalogStore, LocalTemplateLoader)│
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (ResourceTypeCatalog, Template, Rules) │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tagcheck_core::{
//!     application::LintService,
//!     domain::{Region, RuleSet},
//! };
//!
//! // 1. Use application service (with injected adapters)
//! let service = LintService::new(catalogs, templates, RuleSet::builtin());
//!
//! // 2. Lint
//! let report = service
//!     .lint_paths(&["template.yaml".into()], &[Region::default()])
//!     .unwrap();
//! println!("{} findings", report.finding_count());
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        CatalogService, FileReport, LintReport, LintService,
        ports::{CatalogSource, TemplateSource},
    };
    pub use crate::domain::{
        Finding, LintRule, Region, ResourceTypeCatalog, ResourceTypeSpec, RuleId, RuleMetadata,
        RuleSet, Severity, Template, Violation,
    };
    pub use crate::error::{TagcheckError, TagcheckResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
