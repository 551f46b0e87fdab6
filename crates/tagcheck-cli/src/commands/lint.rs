//! Implementation of the `tagcheck lint` command.
//!
//! Responsibility: resolve regions, rules and catalogs from flags and
//! config, run the lint service file by file, and render the report.

use std::io;

use indicatif::ProgressBar;
use tracing::{info, instrument};

use tagcheck_adapters::LocalTemplateLoader;
use tagcheck_core::{
    application::{FileReport, LintReport, LintService},
    domain::{RuleId, RuleSet},
};

use crate::{
    cli::{LintArgs, OutputFormat},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Execute the `tagcheck lint` command.
///
/// Returns [`CliError::ViolationsFound`] after rendering when the report is
/// not clean, so the process exits non-zero.
#[instrument(skip_all, fields(paths = args.paths.len()))]
pub fn execute(args: LintArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let regions = super::resolve_regions(&args.regions, &config)?;
    let ignored = resolve_ignored(&args.ignore_checks, &config)?;
    let rules = RuleSet::builtin().without(&ignored)?;

    let service = LintService::new(
        super::catalog_source(&args.catalog, &config)?,
        Box::new(LocalTemplateLoader::new()),
        rules,
    );

    let files = service.collect_files(&args.paths)?;
    let progress = if files.len() > 1 {
        output.progress(files.len() as u64, "Linting")
    } else {
        ProgressBar::hidden()
    };

    let reports: CliResult<Vec<FileReport>> = files
        .iter()
        .map(|file| {
            progress.set_message(file.display().to_string());
            let report = service
                .lint_file(file, &regions)
                .with_cli_context(|| format!("linting {}", file.display()));
            progress.inc(1);
            report
        })
        .collect();
    progress.finish_and_clear();

    let report = LintReport::new(reports?);
    info!(
        files = report.files.len(),
        findings = report.finding_count(),
        "Lint run finished"
    );

    render(&report, &output)?;

    if report.is_clean() {
        Ok(())
    } else {
        Err(CliError::ViolationsFound {
            count: report.finding_count(),
        })
    }
}

/// Rule ids to skip: flags plus configuration, deduplicated.
fn resolve_ignored(flags: &[String], config: &AppConfig) -> CliResult<Vec<RuleId>> {
    let mut ids = flags
        .iter()
        .chain(&config.lint.ignore_checks)
        .map(|raw| RuleId::parse(raw))
        .collect::<Result<Vec<_>, _>>()?;
    ids.sort();
    ids.dedup();
    Ok(ids)
}

// ── Rendering ─────────────────────────────────────────────────────────────────

fn render(report: &LintReport, output: &OutputManager) -> CliResult<()> {
    match output.format() {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(report).map_err(io::Error::from)?;
            output.emit(&json)?;
        }
        OutputFormat::Plain => {
            for line in plain_lines(report) {
                output.emit(&line)?;
            }
        }
        OutputFormat::Human | OutputFormat::Auto => render_human(report, output)?,
    }
    Ok(())
}

/// `<rule_id> <message>` then `<file>:<path>`, with a blank line between
/// findings.
fn plain_lines(report: &LintReport) -> Vec<String> {
    let mut lines = Vec::new();
    for file in report.files_with_findings() {
        for finding in &file.findings {
            if !lines.is_empty() {
                lines.push(String::new());
            }
            lines.push(finding.to_string());
            lines.push(format!(
                "{}:{}",
                file.path.display(),
                finding.path_display()
            ));
        }
    }
    lines
}

fn render_human(report: &LintReport, output: &OutputManager) -> CliResult<()> {
    for file in report.files_with_findings() {
        output.emit(&format!(
            "{} {}",
            file.path.display(),
            output.dim(&format!("({})", file.region))
        ))?;
        for finding in &file.findings {
            output.emit(&format!(
                "  {} {}",
                output.rule_id(finding.rule_id.as_str(), finding.severity),
                finding.message
            ))?;
        }
        output.emit("")?;
    }

    let total = report.files.len();
    if report.is_clean() {
        output.success(&format!("No findings in {} file(s)", total))?;
    } else {
        output.error(&format!(
            "{} finding(s) in {} of {} file(s)",
            report.finding_count(),
            report.files_with_findings().count(),
            total
        ))?;
    }
    Ok(())
}

// ── tests ─────────────────────────────────────────────────────────────────────
