//! Lint Service - main application orchestrator.
//!
//! This service coordinates the lint workflow:
//! 1. Expand the given paths into template files
//! 2. Load each template
//! 3. Evaluate the rule set against the catalog of the primary region
//! 4. Collect findings per file into a report

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{CatalogSource, TemplateSource},
    },
    domain::{Finding, Region, RuleSet, Template},
    error::TagcheckResult,
};

/// Findings for one template file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub region: Region,
    pub findings: Vec<Finding>,
}

impl FileReport {
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }
}

/// Findings for a whole lint run.
#[derive(Debug, Clone, Serialize)]
pub struct LintReport {
    pub generated_at: DateTime<Utc>,
    pub files: Vec<FileReport>,
}

impl LintReport {
    pub fn new(files: Vec<FileReport>) -> Self {
        Self {
            generated_at: Utc::now(),
            files,
        }
    }

    pub fn finding_count(&self) -> usize {
        self.files.iter().map(|f| f.findings.len()).sum()
    }

    pub fn is_clean(&self) -> bool {
        self.files.iter().all(FileReport::is_clean)
    }

    /// Files with at least one finding, in report order.
    pub fn files_with_findings(&self) -> impl Iterator<Item = &FileReport> {
        self.files.iter().filter(|f| !f.is_clean())
    }
}

/// Main lint service.
pub struct LintService {
    catalogs: Box<dyn CatalogSource>,
    templates: Box<dyn TemplateSource>,
    rules: RuleSet,
}

impl LintService {
    /// Create a new lint service with the given adapters and rules.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use tagcheck_core::{application::LintService, domain::RuleSet};
    ///
    /// let service = LintService::new(
    ///     catalogs,  // impl CatalogSource
    ///     templates, // impl TemplateSource
    ///     RuleSet::builtin(),
    /// );
    /// ```
    pub fn new(
        catalogs: Box<dyn CatalogSource>,
        templates: Box<dyn TemplateSource>,
        rules: RuleSet,
    ) -> Self {
        Self {
            catalogs,
            templates,
            rules,
        }
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Region whose catalog the rules read.
    ///
    /// Only the first configured region is evaluated; with none configured
    /// the default region is used.
    pub fn primary_region(regions: &[Region]) -> Region {
        regions.first().cloned().unwrap_or_default()
    }

    /// Evaluate every rule against an already parsed template.
    #[instrument(skip_all, fields(resources = template.resource_count()))]
    pub fn lint_template(
        &self,
        template: &Template,
        regions: &[Region],
    ) -> TagcheckResult<Vec<Finding>> {
        let region = Self::primary_region(regions);
        let catalog = self.catalogs.catalog(&region)?;

        debug!(
            region = %region,
            resource_types = catalog.len(),
            rules = self.rules.len(),
            "Evaluating rules"
        );

        Ok(self.rules.evaluate(&catalog, template))
    }

    /// Load and lint one template file.
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn lint_file(&self, path: &Path, regions: &[Region]) -> TagcheckResult<FileReport> {
        let template = self.templates.load(path)?;
        let findings = self.lint_template(&template, regions)?;

        debug!(findings = findings.len(), "Template linted");

        Ok(FileReport {
            path: path.to_path_buf(),
            region: Self::primary_region(regions),
            findings,
        })
    }

    /// Expand `paths` into template files.
    ///
    /// Files are kept as given; directories are replaced by the templates
    /// discovered under them.
    pub fn collect_files(&self, paths: &[PathBuf]) -> TagcheckResult<Vec<PathBuf>> {
        let mut files = Vec::new();

        for path in paths {
            if path.is_dir() {
                let discovered = self.templates.discover(path)?;
                if discovered.is_empty() {
                    return Err(ApplicationError::NoTemplates { path: path.clone() }.into());
                }
                debug!(dir = %path.display(), count = discovered.len(), "Discovered templates");
                files.extend(discovered);
            } else if path.exists() {
                files.push(path.clone());
            } else {
                return Err(ApplicationError::PathNotFound { path: path.clone() }.into());
            }
        }

        Ok(files)
    }

    /// Lint every template reachable from `paths`.
    ///
    /// The first file that fails to load aborts the run.
    #[instrument(skip_all, fields(paths = paths.len()))]
    pub fn lint_paths(&self, paths: &[PathBuf], regions: &[Region]) -> TagcheckResult<LintReport> {
        let files = self.collect_files(paths)?;

        let reports = files
            .iter()
            .map(|file| self.lint_file(file, regions))
            .collect::<TagcheckResult<Vec<_>>>()?;

        let report = LintReport::new(reports);
        info!(
            files = report.files.len(),
            findings = report.finding_count(),
            "Lint completed"
        );
        Ok(report)
    }
}
