//! Output management and formatting.

use std::io::{self, IsTerminal};

use console::Term;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use owo_colors::OwoColorize;
use tracing::warn;

use tagcheck_core::domain::Severity;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Manages CLI output based on configuration.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        // Flag, then config, then Auto → Human (TTY) or Plain (piped/redirected).
        let requested = match args.output_format {
            OutputFormat::Auto => OutputFormat::from_config(&config.output.format)
                .unwrap_or_else(|| {
                    warn!(format = %config.output.format, "Ignoring unknown output.format");
                    OutputFormat::Auto
                }),
            explicit => explicit,
        };
        let resolved_format = if requested == OutputFormat::Auto {
            if io::stdout().is_terminal() {
                OutputFormat::Human
            } else {
                OutputFormat::Plain
            }
        } else {
            requested
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color || config.output.no_color || resolved_format != OutputFormat::Human,
            term: Term::stdout(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Primary command output (reports, JSON documents).  Never suppressed:
    /// `--quiet` silences chatter, not results.
    pub fn emit(&self, msg: &str) -> io::Result<()> {
        self.term.write_line(msg)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2713} {msg}") // ✓
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.term.write_line(&line)
    }

    /// Error indicator: `✗ <msg>`.  *Not* suppressed in quiet mode.
    pub fn error(&self, msg: &str) -> io::Result<()> {
        let line = if self.no_color {
            format!("\u{2717} {msg}") // ✗
        } else {
            format!("{} {}", "\u{2717}".red().bold(), msg.red())
        };
        self.term.write_line(&line)
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{26a0} {msg}") // ⚠
        } else {
            format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow())
        };
        self.term.write_line(&line)
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2139} {msg}") // ℹ
        } else {
            format!("{} {}", "\u{2139}".blue().bold(), msg.blue())
        };
        self.term.write_line(&line)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    // ── Styling helpers ───────────────────────────────────────────────────

    /// Rule id styled by severity.
    pub fn rule_id(&self, id: &str, severity: Severity) -> String {
        if !self.supports_color() {
            return id.to_owned();
        }
        match severity {
            Severity::Error => id.red().bold().to_string(),
            Severity::Warning => id.yellow().bold().to_string(),
            Severity::Informational => id.blue().bold().to_string(),
        }
    }

    /// De-emphasised text (paths, secondary details).
    pub fn dim(&self, text: &str) -> String {
        if !self.supports_color() {
            text.to_owned()
        } else {
            text.dimmed().to_string()
        }
    }

    /// Progress bar for `len` steps, drawn on stderr.  Hidden unless the
    /// output is human, not quiet, and stderr is a terminal.
    pub fn progress(&self, len: u64, label: &str) -> ProgressBar {
        let visible = self.resolved_format == OutputFormat::Human
            && !self.quiet
            && io::stderr().is_terminal();

        if !visible {
            return ProgressBar::hidden();
        }

        let bar = ProgressBar::with_draw_target(Some(len), ProgressDrawTarget::stderr());
        if let Ok(style) = ProgressStyle::default_bar()
            .template("   {prefix:.cyan.bold} [{bar:30}] {pos}/{len} {wide_msg:.dim}")
        {
            bar.set_style(style.progress_chars("=> "));
        }
        bar.set_prefix(label.to_owned());
        bar
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// `true` if ANSI colours are enabled.
    pub fn supports_color(&self) -> bool {
        !self.no_color
    }

    /// The resolved (non-Auto) output format.
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
