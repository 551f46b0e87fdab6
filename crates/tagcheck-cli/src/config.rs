//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `TAGCHECK__<SECTION>__<KEY>`, e.g.
//!    `TAGCHECK__LINT__REGIONS=eu-west-1,us-east-1`
//! 3. Config file: `--config FILE`, else `.tagcheck.toml` in the current
//!    directory, else the platform config path
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

/// Local config file name, looked up in the current directory.
pub const LOCAL_CONFIG_FILE: &str = ".tagcheck.toml";

const ENV_PREFIX: &str = "TAGCHECK";
const ENV_SEPARATOR: &str = "__";

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// What to lint for.
    pub lint: LintConfig,
    /// Where catalogs come from.
    pub catalog: CatalogConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LintConfig {
    /// Regions to lint for; only the first is evaluated.
    pub regions: Vec<String>,
    /// Rule ids never run.
    pub ignore_checks: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Single resource specification file used for every region.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    /// Directory of `<region>.json` specification files.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    /// `auto`, `human`, `plain` or `json`.
    pub format: String,
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            regions: vec!["us-east-1".into()],
            ignore_checks: Vec::new(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration: defaults, then the config file, then environment.
    ///
    /// `config_file` is the path the user passed via `--config`; it must
    /// exist.  Without it the local file and then the platform file are
    /// tried, and a missing file is not an error.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let defaults =
            Config::try_from(&Self::default()).context("Failed to build default configuration")?;

        let file = match config_file {
            Some(path) => {
                if !path.is_file() {
                    bail!("Config file not found: {}", path.display());
                }
                File::from(path.as_path())
                    .format(FileFormat::Toml)
                    .required(true)
            }
            None => File::from(Self::active_path().as_path())
                .format(FileFormat::Toml)
                .required(false),
        };

        let settings = Config::builder()
            .add_source(defaults)
            .add_source(file)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator(ENV_SEPARATOR)
                    .separator(ENV_SEPARATOR)
                    .list_separator(",")
                    .with_list_parse_key("lint.regions")
                    .with_list_parse_key("lint.ignore_checks")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to read configuration")?;

        settings
            .try_deserialize()
            .context("Configuration has an invalid shape")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.tagcheck.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "tagcheck", "tagcheck")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }

    /// File that [`Self::load`] reads when `--config` is not given.
    pub fn active_path() -> PathBuf {
        let local = Path::new(LOCAL_CONFIG_FILE);
        if local.is_file() {
            local.to_path_buf()
        } else {
            Self::config_path()
        }
    }
}
