//! `tagcheck config`: inspect configuration values.

use std::path::PathBuf;

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
///
/// `explicit` is the `--config` path, if one was given.
pub fn execute(
    cmd: ConfigCommands,
    explicit: Option<PathBuf>,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            output.emit(&format!("{key} = {value}"))?;
        }

        ConfigCommands::List => {
            output.header("Current Configuration:")?;
            let serialised =
                toml::to_string_pretty(&config).map_err(|e| CliError::ConfigError {
                    message: format!("Failed to serialise config: {e}"),
                    source: Some(Box::new(e)),
                })?;
            output.emit(&serialised)?;
        }

        ConfigCommands::Path => {
            let path = explicit.unwrap_or_else(AppConfig::active_path);
            output.emit(&path.display().to_string())?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    let path_or_empty = |p: &Option<PathBuf>| {
        p.as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_default()
    };

    match key {
        "lint.regions" => Ok(config.lint.regions.join(",")),
        "lint.ignore_checks" => Ok(config.lint.ignore_checks.join(",")),
        "catalog.path" => Ok(path_or_empty(&config.catalog.path)),
        "catalog.dir" => Ok(path_or_empty(&config.catalog.dir)),
        "output.no_color" => Ok(config.output.no_color.to_string()),
        "output.format" => Ok(config.output.format.clone()),
        _ => Err(CliError::ConfigError {
            message: format!("Unknown config key: '{key}'"),
            source: None,
        }),
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_known_key() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "lint.regions").unwrap(), "us-east-1");
    }

    #[test]
    fn get_unset_path_is_empty() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "catalog.dir").unwrap(), "");
    }

    #[test]
    fn get_unknown_key_is_error() {
        let cfg = AppConfig::default();
        assert!(matches!(
            get_config_value(&cfg, "does.not.exist"),
            Err(CliError::ConfigError { .. })
        ));
    }

    #[test]
    fn get_no_color_default() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "output.no_color").unwrap(), "false");
    }
}
