//! Command handlers, one module per subcommand.
//!
//! Handlers translate arguments into core calls and render the results.
//! No lint logic lives here.

pub mod completions;
pub mod config;
pub mod init;
pub mod lint;
pub mod rules;
pub mod types;

use tracing::debug;

use tagcheck_adapters::{DirectoryCatalogStore, InMemoryCatalogStore};
use tagcheck_core::{application::ports::CatalogSource, domain::Region};

use crate::{cli::CatalogArgs, config::AppConfig, error::CliResult};

/// Build the catalog source: `--catalog` / `--catalog-dir`, then the
/// `catalog.*` configuration, then the built-in catalog.
pub(crate) fn catalog_source(
    args: &CatalogArgs,
    config: &AppConfig,
) -> CliResult<Box<dyn CatalogSource>> {
    // Flags beat config as a pair, so `--catalog-dir` is not shadowed by a
    // configured `catalog.path`.
    let (file, dir) = if args.catalog.is_some() || args.catalog_dir.is_some() {
        (args.catalog.as_ref(), args.catalog_dir.as_ref())
    } else {
        (config.catalog.path.as_ref(), config.catalog.dir.as_ref())
    };

    if let Some(file) = file {
        debug!(file = %file.display(), "Using catalog file");
        return Ok(Box::new(InMemoryCatalogStore::from_file(file)?));
    }
    if let Some(dir) = dir {
        debug!(dir = %dir.display(), "Using catalog directory");
        return Ok(Box::new(DirectoryCatalogStore::new(dir)));
    }

    debug!("Using built-in catalog");
    Ok(Box::new(InMemoryCatalogStore::with_builtin()?))
}

/// Regions from the command line if any were given, else from config.
pub(crate) fn resolve_regions(flags: &[String], config: &AppConfig) -> CliResult<Vec<Region>> {
    let raw = if flags.is_empty() {
        config.lint.regions.as_slice()
    } else {
        flags
    };

    raw.iter()
        .map(|r| Region::parse(r).map_err(Into::into))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn flags_replace_configured_regions() {
        let config = AppConfig::default();
        let regions = resolve_regions(&["eu-west-1".into()], &config).unwrap();
        assert_eq!(regions, vec![Region::parse("eu-west-1").unwrap()]);
    }

    #[test]
    fn configured_regions_apply_without_flags() {
        let regions = resolve_regions(&[], &AppConfig::default()).unwrap();
        assert_eq!(regions, vec![Region::default()]);
    }

    #[test]
    fn malformed_region_is_user_error() {
        let err = resolve_regions(&["Mars".into()], &AppConfig::default()).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn builtin_catalog_is_the_default() {
        let source = catalog_source(&CatalogArgs::default(), &AppConfig::default()).unwrap();
        assert!(source.catalog(&Region::default()).unwrap().len() > 1);
    }

    #[test]
    fn configured_catalog_dir_is_used() {
        let mut config = AppConfig::default();
        config.catalog.dir = Some(PathBuf::from("/no/such/dir"));

        let source = catalog_source(&CatalogArgs::default(), &config).unwrap();
        let err = source.catalog(&Region::default()).unwrap_err();
        assert!(err.to_string().contains("us-east-1"));
    }
}
