//! `tagcheck init`: create a default configuration file.

use std::path::PathBuf;

use crate::{
    cli::InitArgs,
    config::{AppConfig, LOCAL_CONFIG_FILE},
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Create a default tagcheck configuration file.
pub fn execute(args: InitArgs, output: OutputManager) -> CliResult<()> {
    output.info("Initialising configuration...")?;

    let config_path = if args.local {
        PathBuf::from(LOCAL_CONFIG_FILE)
    } else {
        AppConfig::config_path()
    };

    // Bail early if the file already exists and --force was not given.
    if config_path.exists() && !args.force {
        output.warning(&format!(
            "Config already exists at {}  (use --force to overwrite)",
            config_path.display(),
        ))?;
        return Ok(());
    }

    let contents = render_default()?;

    // Ensure parent directory exists.
    if let Some(parent) = config_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_cli_context(|| {
            format!("Failed to create config directory '{}'", parent.display())
        })?;
    }

    std::fs::write(&config_path, &contents)
        .with_cli_context(|| format!("Failed to write config to '{}'", config_path.display()))?;

    output.success(&format!(
        "Configuration created at {}",
        config_path.display(),
    ))?;

    Ok(())
}

/// Default configuration as TOML, with a generated-on header.
fn render_default() -> CliResult<String> {
    let body = toml::to_string_pretty(&AppConfig::default()).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise default config: {e}"),
        source: Some(Box::new(e)),
    })?;

    Ok(format!(
        "# tagcheck configuration\n\
         # Generated by `tagcheck init` on {}\n\
         # Environment variables override these values, e.g. TAGCHECK__LINT__REGIONS=eu-west-1\n\n\
         {body}",
        chrono::Local::now().format("%Y-%m-%d"),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_parses_back() {
        let rendered = render_default().unwrap();
        assert!(rendered.starts_with("# tagcheck configuration"));

        let parsed: AppConfig = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed.lint.regions, vec!["us-east-1"]);
        assert_eq!(parsed.output.format, "auto");
    }
}
