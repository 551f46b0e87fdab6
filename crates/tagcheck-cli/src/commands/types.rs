//! Implementation of the `tagcheck types` command.

use std::io;

use tracing::instrument;

use tagcheck_core::application::CatalogService;

use crate::{
    cli::{OutputFormat, TypesArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// List the resource types of one region's catalog that accept `Tags`.
#[instrument(skip_all)]
pub fn execute(args: TypesArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let flags: Vec<String> = args.region.into_iter().collect();
    let region = super::resolve_regions(&flags, &config)?
        .into_iter()
        .next()
        .unwrap_or_default();

    let service = CatalogService::new(super::catalog_source(&args.catalog, &config)?);
    let summary = service.summarize(&region)?;

    match output.format() {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&summary).map_err(io::Error::from)?;
            output.emit(&json)?;
        }
        OutputFormat::Plain => {
            for resource_type in &summary.tag_supporting_types {
                output.emit(resource_type)?;
            }
        }
        OutputFormat::Human | OutputFormat::Auto => {
            output.header(&format!("Resource types supporting Tags in {}:", region))?;
            for resource_type in &summary.tag_supporting_types {
                output.emit(&format!("  \u{2022} {resource_type}"))?; // •
            }
            output.print("")?;
            output.info(&format!(
                "{} of {} types (catalog version {})",
                summary.tag_supporting_types.len(),
                summary.resource_type_count,
                summary.version.as_deref().unwrap_or("unknown"),
            ))?;
        }
    }

    Ok(())
}
