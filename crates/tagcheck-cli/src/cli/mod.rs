//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "tagcheck",
    bin_name = "tagcheck",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Find CloudFormation resources that support Tags but declare none",
    long_about = "tagcheck reads CloudFormation templates (JSON or YAML) and reports \
                  every resource whose type accepts a Tags property according to \
                  the resource specification of the target region, but which \
                  does not declare one.",
    after_help = "EXAMPLES:\n\
        \x20 tagcheck lint template.yaml\n\
        \x20 tagcheck lint infra/ --region eu-west-1\n\
        \x20 tagcheck lint stack.json --catalog CloudFormationResourceSpecification.json\n\
        \x20 tagcheck types --region us-east-1\n\
        \x20 tagcheck completions bash > /usr/share/bash-completion/completions/tagcheck",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Lint templates.
    #[command(
        visible_alias = "l",
        about = "Lint templates for missing Tags",
        after_help = "EXAMPLES:\n\
            \x20 tagcheck lint template.yaml\n\
            \x20 tagcheck lint a.json b.yaml --region us-west-2\n\
            \x20 tagcheck lint infra/ --catalog-dir specs/\n\
            \x20 tagcheck lint template.yaml --ignore-checks E9001 --format json\n\n\
            EXIT STATUS:\n\
            \x20 0 no findings, 5 findings reported, 2/3/4/1 on errors"
    )]
    Lint(LintArgs),

    /// List available rules.
    #[command(
        visible_alias = "ls",
        about = "List available rules",
        after_help = "EXAMPLES:\n\
            \x20 tagcheck rules\n\
            \x20 tagcheck rules --format json"
    )]
    Rules,

    /// Show which resource types accept Tags.
    #[command(
        about = "List resource types that support Tags",
        after_help = "EXAMPLES:\n\
            \x20 tagcheck types\n\
            \x20 tagcheck types --region eu-west-1 --catalog-dir specs/"
    )]
    Types(TypesArgs),

    /// Initialise a tagcheck configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 tagcheck init           # default location\n\
            \x20 tagcheck init --local   # .tagcheck.toml in CWD\n\
            \x20 tagcheck init --force   # overwrite"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 tagcheck completions bash > ~/.local/share/bash-completion/completions/tagcheck\n\
            \x20 tagcheck completions zsh  > ~/.zfunc/_tagcheck\n\
            \x20 tagcheck completions fish > ~/.config/fish/completions/tagcheck.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the tagcheck configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 tagcheck config get lint.regions\n\
            \x20 tagcheck config list\n\
            \x20 tagcheck config path"
    )]
    Config(ConfigCommands),
}

// ── catalog selection (shared) ────────────────────────────────────────────────

/// Where resource catalogs come from.  Defaults to the built-in catalog.
#[derive(Debug, Clone, Default, Args)]
pub struct CatalogArgs {
    /// One resource specification file used for every region.
    #[arg(
        long = "catalog",
        value_name = "FILE",
        conflicts_with = "catalog_dir",
        help = "Resource specification JSON used for all regions"
    )]
    pub catalog: Option<PathBuf>,

    /// Directory holding `<region>.json` specification files.
    #[arg(
        long = "catalog-dir",
        value_name = "DIR",
        help = "Directory of <region>.json resource specifications"
    )]
    pub catalog_dir: Option<PathBuf>,
}

// ── lint ──────────────────────────────────────────────────────────────────────

/// Arguments for `tagcheck lint`.
#[derive(Debug, Args)]
pub struct LintArgs {
    /// Template files or directories.  Directories are searched for
    /// `.json`, `.yaml`, `.yml` and `.template` files.
    #[arg(
        value_name = "PATH",
        required = true,
        num_args = 1..,
        help = "Template files or directories to lint"
    )]
    pub paths: Vec<PathBuf>,

    /// Regions to lint for.  Only the first one is evaluated.
    #[arg(
        short = 'r',
        long = "region",
        value_name = "REGION",
        value_delimiter = ',',
        help = "Region(s) to lint for; the first is evaluated (default: us-east-1)"
    )]
    pub regions: Vec<String>,

    /// Rule ids to skip.
    #[arg(
        short = 'i',
        long = "ignore-checks",
        value_name = "RULE",
        value_delimiter = ',',
        help = "Rule ids to skip (e.g. E9001)"
    )]
    pub ignore_checks: Vec<String>,

    #[command(flatten)]
    pub catalog: CatalogArgs,
}

// ── types ─────────────────────────────────────────────────────────────────────

/// Arguments for `tagcheck types`.
#[derive(Debug, Args)]
pub struct TypesArgs {
    /// Region whose catalog is listed.
    #[arg(
        short = 'r',
        long = "region",
        value_name = "REGION",
        help = "Region to describe (default: first configured region)"
    )]
    pub region: Option<String>,

    #[command(flatten)]
    pub catalog: CatalogArgs,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `tagcheck init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `.tagcheck.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `tagcheck completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `tagcheck config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `lint.regions`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
