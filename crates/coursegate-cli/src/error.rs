//! CLI errors and how they reach the terminal.
//!
//! Every failure the binary can hit maps to one [`CliError`]. Each variant
//! knows its exit code, the hints to print under it, and how loudly to log.

use std::error::Error;
use std::fmt::Write as _;
use std::path::PathBuf;

use owo_colors::OwoColorize;
use thiserror::Error;

use coursegate_adapters::catalog::LoaderError;
use coursegate_core::{domain::RequestKind, error::CoreError};

pub use coursegate_core::error::ErrorCategory as CoreCategory;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// The payload could not be read as JSON, or an argument made no sense.
    #[error("Invalid input: {message}")]
    InvalidInput {
        message: String,
        #[source]
        source: Option<Box<dyn Error + Send + Sync>>,
    },

    #[error("Input file not found: {}", path.display())]
    InputNotFound { path: PathBuf },

    /// The request was read and checked, and broke at least one rule.
    #[error("'{kind}' request rejected with {errors} validation error(s)")]
    Rejected { kind: RequestKind, errors: usize },

    /// Settings could not be loaded, parsed or written.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn Error + Send + Sync>>,
    },

    /// The configured message directory could not be loaded.
    #[error("Message catalog error: {0}")]
    Catalog(#[from] LoaderError),

    /// Dispatch or payload failure reported by `coursegate-core`.
    #[error("Validation failed: {0}")]
    Core(#[from] CoreError),

    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(source: std::io::Error) -> Self {
        Self::IoError {
            message: source.to_string(),
            source,
        }
    }
}

impl CliError {
    /// Hints printed under the error message.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidInput { .. } => vec![
                "The payload must be a single JSON object".into(),
                "Run 'coursegate validate --help' for usage".into(),
            ],
            Self::InputNotFound { path } => vec![
                format!("No file at '{}'", path.display()),
                "Pass - to read the payload from stdin".into(),
            ],
            Self::Rejected { .. } => Vec::new(),
            Self::ConfigError { .. } => vec![
                "Show the active config file with 'coursegate config path'".into(),
                "Regenerate it with 'coursegate init --force'".into(),
            ],
            Self::Catalog(LoaderError::MissingDirectory(path)) => vec![
                format!("'catalog.directory' points at '{}', which does not exist", path.display()),
                "Create the directory or unset COURSEGATE_CATALOG__DIRECTORY".into(),
            ],
            Self::Catalog(_) => vec!["Check the permissions of the message directory".into()],
            Self::Core(core) => core.suggestions(),
            Self::IoError { .. } => vec!["Check that the path is readable and writable".into()],
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput { .. } | Self::Rejected { .. } => ErrorCategory::UserError,
            Self::InputNotFound { .. } => ErrorCategory::NotFound,
            Self::ConfigError { .. } | Self::Catalog(_) => ErrorCategory::Configuration,
            Self::Core(core) => match core.category() {
                CoreCategory::Validation | CoreCategory::Payload => ErrorCategory::UserError,
                CoreCategory::NotFound => ErrorCategory::NotFound,
                CoreCategory::Configuration => ErrorCategory::Configuration,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    /// Process exit status: 2 user error, 3 not found, 4 configuration,
    /// 1 anything else.
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserError => 2,
            ErrorCategory::NotFound => 3,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Internal => 1,
        }
    }

    /// Message, cause chain (verbose only) and hints, styled for a terminal.
    pub fn format_colored(&self, verbose: bool) -> String {
        let mut out = format!("\n{} {}\n", "\u{2717}".red().bold(), self.to_string().red().bold());
        for cause in self.causes().filter(|_| verbose) {
            let _ = writeln!(out, "  {} {}", "caused by".dimmed(), cause.dimmed());
        }
        let hints = self.suggestions();
        if !hints.is_empty() {
            let _ = writeln!(out, "\n{}", "hint:".yellow().bold());
            for hint in hints {
                let _ = writeln!(out, "  {hint}");
            }
        }
        if !verbose {
            let _ = writeln!(out, "\n{}", "Re-run with -v for the full error chain.".dimmed());
        }
        out
    }

    /// Same layout as [`format_colored`](Self::format_colored), no ANSI codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        let mut out = format!("\nError: {self}\n");
        for cause in self.causes().filter(|_| verbose) {
            let _ = writeln!(out, "  caused by {cause}");
        }
        let hints = self.suggestions();
        if !hints.is_empty() {
            out.push_str("\nhint:\n");
            for hint in hints {
                let _ = writeln!(out, "  {hint}");
            }
        }
        if !verbose {
            out.push_str("\nRe-run with -v for the full error chain.\n");
        }
        out
    }

    /// Emit a tracing event at a level that matches the category.
    pub fn log(&self) {
        let category = self.category();
        match category {
            ErrorCategory::UserError | ErrorCategory::NotFound => {
                tracing::warn!(?category, error = %self, "command failed");
            }
            ErrorCategory::Configuration | ErrorCategory::Internal => {
                tracing::error!(?category, error = %self, "command failed");
            }
        }
        for cause in self.causes() {
            tracing::debug!(%cause, "caused by");
        }
    }

    fn causes(&self) -> impl Iterator<Item = String> + '_ {
        std::iter::successors(self.source(), |&e| e.source()).map(ToString::to_string)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad payload, rejected request or bad arguments.
    UserError,
    NotFound,
    Configuration,
    Internal,
}

/// Attach a context message while converting into [`CliError`].
pub trait IntoCli<T> {
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

#[cfg(test)]
mod tests {
    use super::*;
    use coursegate_core::{application::ApplicationError, domain::DomainError};
    use std::io;

    #[test]
    fn exit_code_rejected_request() {
        let err = CliError::Rejected {
            kind: RequestKind::Lesson,
            errors: 2,
        };
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("2 validation error(s)"));
    }

    #[test]
    fn exit_code_malformed_payload() {
        let err: CliError = CoreError::from(ApplicationError::MalformedPayload {
            kind: RequestKind::Group,
            reason: "invalid type".into(),
        })
        .into();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn exit_code_unknown_rule_set() {
        let err: CliError = CoreError::from(DomainError::UnknownRuleSet {
            validator: "user".into(),
            rule_set: "archive".into(),
            available: vec!["add".into(), "update".into()],
        })
        .into();
        assert_eq!(err.exit_code(), 2);
        assert!(!err.suggestions().is_empty());
    }

    #[test]
    fn exit_code_not_found() {
        let err = CliError::InputNotFound {
            path: PathBuf::from("missing.json"),
        };
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
        assert_eq!(
            CliError::Catalog(LoaderError::MissingDirectory(PathBuf::from("/nope"))).exit_code(),
            4
        );
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

    #[test]
    fn plain_format_lists_hints() {
        let err = CliError::InputNotFound {
            path: PathBuf::from("/tmp/x.json"),
        };
        let s = err.format_plain(false);
        assert!(s.contains("Error: Input file not found"));
        assert!(s.contains("hint:"));
        assert!(s.contains("Pass - to read the payload from stdin"));
    }

    #[test]
    fn verbose_plain_format_shows_causes() {
        let err = CliError::IoError {
            message: "reading stdin".into(),
            source: io::Error::other("broken pipe"),
        };
        let s = err.format_plain(true);
        assert!(s.contains("caused by broken pipe"));
        assert!(!s.contains("Re-run with -v"));
        assert!(err.format_plain(false).contains("Re-run with -v"));
    }

    #[test]
    fn into_cli_io_error() {
        let result: Result<(), io::Error> = Err(io::Error::new(io::ErrorKind::NotFound, "missing"));
        let cli: CliResult<()> = result.with_cli_context(|| "reading payload");
        assert!(matches!(cli, Err(CliError::IoError { ref message, .. }) if message == "reading payload"));
    }
}
