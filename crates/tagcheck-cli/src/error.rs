//! Error handling for the tagcheck CLI.
//!
//! Provides structured errors with:
//! - User-friendly messages
//! - Actionable suggestions
//! - Exit code mapping

use std::error::Error;

use owo_colors::OwoColorize;
use thiserror::Error;

use tagcheck_core::domain::DomainError;
use tagcheck_core::error::TagcheckError;

// Re-export so callers only need `use crate::error::*`.
pub use tagcheck_core::error::ErrorCategory as CoreCategory;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    // ── Config errors ──────────────────────────────────────────────────────
    /// A configuration file could not be read, parsed, or written.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    // ── Core errors ────────────────────────────────────────────────────────
    /// An error propagated from `tagcheck-core` or the adapters.
    #[error("{0}")]
    Core(#[from] TagcheckError),

    // ── Lint outcome ───────────────────────────────────────────────────────
    /// The run completed and reported findings.  Not a failure of the tool,
    /// but it must surface as a non-zero exit status.
    #[error("{count} finding(s) reported")]
    ViolationsFound { count: usize },

    // ── System errors ──────────────────────────────────────────────────────
    /// An I/O operation failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<DomainError> for CliError {
    fn from(err: DomainError) -> Self {
        CliError::Core(err.into())
    }
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ConfigError { message, .. } => vec![
                format!("Configuration issue: {}", message),
                "Show the active file with 'tagcheck config path'".into(),
                "Use 'tagcheck init --force' to recreate a default config".into(),
            ],

            Self::Core(core_err) => core_err.suggestions(),

            Self::ViolationsFound { .. } => Vec::new(),

            Self::IoError { message, .. } => vec![
                format!("I/O operation failed: {}", message),
                "Check file permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
        }
    }

    /// Get the error category for styling and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::Core(core) => match core.category() {
                CoreCategory::Validation => ErrorCategory::UserError,
                CoreCategory::NotFound => ErrorCategory::NotFound,
                CoreCategory::Configuration => ErrorCategory::Configuration,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::ViolationsFound { .. } => ErrorCategory::Findings,
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// | Category      | Code |
    /// |---------------|------|
    /// | User error    |  2   |
    /// | Not found     |  3   |
    /// | Configuration |  4   |
    /// | Findings      |  5   |
    /// | Internal      |  1   |
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserError => 2,
            ErrorCategory::NotFound => 3,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Findings => 5,
            ErrorCategory::Internal => 1,
        }
    }

    /// `true` for outcomes the lint report already explained to the user.
    pub fn is_reported(&self) -> bool {
        self.category() == ErrorCategory::Findings
    }

    /// Format the error for display with colors and suggestions.
    pub fn format_colored(&self, verbose: bool) -> String {
        let mut output = String::new();

        // Error header
        output.push_str(&format!(
            "\n{} {}\n\n",
            "✗".red().bold(),
            "Error:".red().bold()
        ));

        // Main error message
        output.push_str(&format!("  {}\n", self.to_string().red()));

        // Error chain (if verbose)
        if verbose {
            let mut source = self.source();
            while let Some(err) = source {
                output.push_str(&format!(
                    "\n  {} {}\n",
                    "→".dimmed(),
                    err.to_string().dimmed()
                ));
                source = err.source();
            }
        }

        // Suggestions
        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            output.push_str(&format!("\n{}\n", "Suggestions:".yellow().bold()));
            for suggestion in suggestions {
                output.push_str(&format!("  {}\n", suggestion));
            }
        }

        // Hint to re-run with -v
        if !verbose {
            output.push('\n');
            output.push_str(&format!(
                "{} {}\n",
                "\u{2139}".blue(), // ℹ
                "Use -v / --verbose for more details.".dimmed(),
            ));
        }

        output
    }

    /// Plain-text version of [`Self::format_colored`], without ANSI codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        let mut out = String::new();
        out.push_str(&format!("\nError: {}\n", self));

        if verbose {
            let mut src = std::error::Error::source(self);
            while let Some(err) = src {
                out.push_str(&format!("  Caused by: {err}\n"));
                src = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str("\nSuggestions:\n");
            for s in &suggestions {
                out.push_str(&format!("  {s}\n"));
            }
        }

        if !verbose {
            out.push_str("\nUse -v / --verbose for more details.\n");
        }

        out
    }

    /// Log the error using tracing.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError => tracing::warn!("User error: {}", self),
            ErrorCategory::NotFound => tracing::warn!("Not found: {}", self),
            ErrorCategory::Configuration => tracing::error!("Configuration error: {}", self),
            ErrorCategory::Findings => tracing::info!("{}", self),
            ErrorCategory::Internal => tracing::error!("Internal error: {}", self),
        }

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// User input error (validation, invalid arguments).
    UserError,
    /// Resource not found.
    NotFound,
    /// Configuration error.
    Configuration,
    /// Lint findings were reported.
    Findings,
    /// Internal/system error.
    Internal,
}

// ── IntoCli trait ─────────────────────────────────────────────────────────────

/// Extension trait to convert foreign error types into [`CliError`] at
/// call-sites with a descriptive context message.
///
/// Two concrete impls are provided:
/// - `Result<T, std::io::Error>` → `CliError::IoError`
/// - `Result<T, TagcheckError>`  → `CliError::Core`
pub trait IntoCli<T> {
    /// Convert to `CliResult` attaching a human-readable context message.
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> IntoCli<T> for Result<T, std::io::Error> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| CliError::IoError {
            message: f().into(),
            source: e,
        })
    }
}

impl<T> IntoCli<T> for Result<T, TagcheckError> {
    /// The context message is ignored for core errors because the core error
    /// already carries sufficient context.
    fn with_cli_context<F, S>(self, _f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(CliError::Core)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::PathBuf;

    use tagcheck_core::application::ApplicationError;

    // ── suggestions ───────────────────────────────────────────────────────

    #[test]
    fn core_suggestions_are_forwarded() {
        let err: CliError = DomainError::UnknownRule { id: "E1234".into() }.into();
        assert!(err.suggestions().iter().any(|s| s.contains("tagcheck rules")));
    }

    #[test]
    fn findings_have_no_suggestions() {
        assert!(CliError::ViolationsFound { count: 2 }.suggestions().is_empty());
    }

    // ── exit codes ────────────────────────────────────────────────────────

    #[test]
    fn exit_code_user_error() {
        let err: CliError = DomainError::InvalidRegion {
            region: "mars".into(),
        }
        .into();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn exit_code_not_found() {
        let err = CliError::Core(
            ApplicationError::CatalogNotFound {
                region: "eu-west-1".into(),
            }
            .into(),
        );
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn exit_code_configuration() {
        assert_eq!(
            CliError::ConfigError {
                message: "x".into(),
                source: None
            }
            .exit_code(),
            4
        );

        let bad_catalog = CliError::Core(
            ApplicationError::CatalogLoad {
                path: PathBuf::from("spec.json"),
                reason: "eof".into(),
            }
            .into(),
        );
        assert_eq!(bad_catalog.exit_code(), 4);
    }

    #[test]
    fn exit_code_findings() {
        let err = CliError::ViolationsFound { count: 1 };
        assert_eq!(err.exit_code(), 5);
        assert!(err.is_reported());
    }

    #[test]
    fn exit_code_internal() {
        assert_eq!(
            CliError::IoError {
                message: "x".into(),
                source: io::Error::other("e"),
            }
            .exit_code(),
            1
        );
    }

    // ── format ────────────────────────────────────────────────────────────

    #[test]
    fn format_plain_contains_error_header() {
        let err = CliError::ConfigError {
            message: "bad".into(),
            source: None,
        };
        let s = err.format_plain(false);
        assert!(s.contains("Error:"));
        assert!(s.contains("Suggestions:"));
    }

    #[test]
    fn format_plain_verbose_shows_cause_and_omits_hint() {
        let err = CliError::IoError {
            message: "writing config".into(),
            source: io::Error::other("disk full"),
        };
        let s = err.format_plain(true);
        assert!(s.contains("Caused by: disk full"));
        assert!(!s.contains("--verbose"));
    }

    // ── IntoCli ───────────────────────────────────────────────────────────

    #[test]
    fn into_cli_io_error() {
        let result: Result<(), io::Error> = Err(io::Error::new(io::ErrorKind::NotFound, "missing"));
        let cli: CliResult<()> = result.with_cli_context(|| "reading config");
        assert!(matches!(cli, Err(CliError::IoError { .. })));
    }
}
