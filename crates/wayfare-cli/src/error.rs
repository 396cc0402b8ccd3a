//! CLI-level errors: what went wrong, what to try next, and which exit
//! code the process ends with.

use std::error::Error;
use std::fmt::Write as _;

use owo_colors::{OwoColorize, Style};
use thiserror::Error;

use wayfare_core::domain::{DomainError, ValidationError};
use wayfare_core::error::WayfareError;

pub use wayfare_core::error::ErrorCategory as CoreCategory;

/// Result of a command handler.
pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid user input that the core never saw.
    #[error("Invalid input: {message}")]
    InvalidInput {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A batch ran to completion but not every payload was accepted.
    #[error("{failed} of {total} payload(s) failed validation")]
    ValidationFailed { failed: usize, total: usize },

    /// A configuration file could not be read, parsed, or written.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Anything raised by the validation core; suggestions and category
    /// come from the wrapped error.
    #[error(transparent)]
    Core(#[from] WayfareError),

    /// Reading input or writing the config file failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// The binary was built without a cargo feature the command needs.
    #[cfg_attr(feature = "interactive", allow(dead_code))]
    #[error("Feature not available: {feature}")]
    FeatureNotAvailable { feature: &'static str },
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

impl From<ValidationError> for CliError {
    fn from(err: ValidationError) -> Self {
        CliError::Core(err.into())
    }
}

impl CliError {
    /// Next steps shown under the error message.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidInput { message, .. } => vec![
                format!("Fix the argument: {message}"),
                "Run the command with --help to see what it accepts".into(),
            ],

            Self::ValidationFailed { .. } => vec![
                "See the messages above for each rejected payload".into(),
                "Use --output-format json for a machine-readable report".into(),
                "Use 'wayfare schema show <entity>' to see the expected fields".into(),
            ],

            Self::ConfigError { message, .. } => vec![
                format!("While loading settings: {message}"),
                "Check the file shown by 'wayfare config path'".into(),
                "Use 'wayfare init --force' to write a fresh default config".into(),
            ],

            Self::Core(core_err) => core_err.suggestions(),

            Self::IoError { message, .. } => vec![
                format!("Underlying failure: {message}"),
                "Make sure the path exists and is readable".into(),
            ],

            Self::FeatureNotAvailable { feature } => vec![
                format!("This binary was built without the '{feature}' feature"),
                format!(
                    "Install with the feature enabled: cargo install wayfare-cli --features {}",
                    feature
                ),
            ],
        }
    }

    /// Core categories fold into the four CLI buckets here.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput { .. } => ErrorCategory::UserError,
            Self::ValidationFailed { .. } => ErrorCategory::UserError,
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::Core(core) => match core.category() {
                CoreCategory::Validation => ErrorCategory::UserError,
                CoreCategory::Conflict => ErrorCategory::UserError,
                CoreCategory::NotFound => ErrorCategory::NotFound,
                CoreCategory::Configuration => ErrorCategory::Configuration,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::IoError { .. } => ErrorCategory::Internal,
            Self::FeatureNotAvailable { .. } => ErrorCategory::Configuration,
        }
    }

    /// Process exit code; the table lives in `main.rs`.
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserError => 2,
            ErrorCategory::NotFound => 3,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Internal => 1,
        }
    }

    /// Render for a colour terminal.
    pub fn format_colored(&self, verbose: bool) -> String {
        self.render(verbose, true)
    }

    /// Render without ANSI codes, for pipes and `--no-color`.
    pub fn format_plain(&self, verbose: bool) -> String {
        self.render(verbose, false)
    }

    fn render(&self, verbose: bool, color: bool) -> String {
        let paint = |text: &str, style: Style| -> String {
            if color {
                text.style(style).to_string()
            } else {
                text.to_owned()
            }
        };
        let alarm = Style::new().red().bold();
        let faint = Style::new().dimmed();

        let mut out = String::new();
        let marker = if color { "\u{2717} " } else { "" };
        let _ = writeln!(out, "\n{}{} {}", paint(marker, alarm), paint("Error:", alarm), self);

        if verbose {
            let mut cause = self.source();
            while let Some(err) = cause {
                let _ = writeln!(out, "  {} {}", paint("Caused by:", faint), err);
                cause = err.source();
            }
        }

        let hints = self.suggestions();
        if !hints.is_empty() {
            let _ = writeln!(out, "\n{}", paint("Suggestions:", Style::new().yellow().bold()));
            for hint in &hints {
                let _ = writeln!(out, "  {hint}");
            }
        }

        if !verbose {
            let _ = writeln!(out, "\n{}", paint("Use -v / --verbose for more details.", faint));
        }
        out
    }

    /// Emit the error as a tracing event at a level matching its category.
    pub fn log(&self) {
        let category = self.category();
        match category {
            ErrorCategory::UserError | ErrorCategory::NotFound => {
                tracing::warn!(?category, error = %self, "Command failed");
            }
            ErrorCategory::Configuration | ErrorCategory::Internal => {
                tracing::error!(?category, error = %self, "Command failed");
            }
        }
        if let Some(cause) = self.source() {
            tracing::debug!(%cause, "Underlying cause");
        }
    }
}

/// Coarse buckets that decide exit code and log level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad arguments, rejected payloads, illegal transitions.
    UserError,
    NotFound,
    Configuration,
    /// I/O and anything unexpected.
    Internal,
}

/// Attaches a message to foreign errors while lifting them into [`CliError`].
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

impl<T> IntoCli<T> for Result<T, toml::ser::Error> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| CliError::ConfigError {
            message: f().into(),
            source: Some(Box::new(e)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use wayfare_core::application::ApplicationError;

    // ── suggestions ───────────────────────────────────────────────────────

    #[test]
    fn field_errors_become_suggestions() {
        let err = CliError::from(ValidationError::single(
            "username",
            "Username must be at least 3 characters",
        ));
        assert!(
            err.suggestions()
                .iter()
                .any(|s| s.contains("username") && s.contains("at least 3"))
        );
    }

    #[test]
    fn unknown_entity_lists_known_ones() {
        let err = CliError::from(DomainError::UnknownEntity("invoice".into()));
        assert!(err.suggestions().iter().any(|s| s.contains("support-ticket")));
    }

    #[test]
    fn failed_batch_suggests_json_report() {
        let err = CliError::ValidationFailed { failed: 1, total: 3 };
        assert_eq!(err.to_string(), "1 of 3 payload(s) failed validation");
        assert!(err.suggestions().iter().any(|s| s.contains("json")));
    }

    // ── exit codes ────────────────────────────────────────────────────────

    #[test]
    fn exit_code_user_error() {
        assert_eq!(
            CliError::InvalidInput {
                message: "x".into(),
                source: None
            }
            .exit_code(),
            2
        );
        assert_eq!(CliError::ValidationFailed { failed: 1, total: 1 }.exit_code(), 2);
    }

    #[test]
    fn exit_code_conflict_is_user_error() {
        let err = CliError::from(DomainError::IllegalTransition {
            entity: "booking",
            from: "COMPLETED".into(),
            to: "PENDING".into(),
        });
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn exit_code_not_found() {
        assert_eq!(
            CliError::from(DomainError::UnknownEntity("x".into())).exit_code(),
            3
        );
        let empty = CliError::Core(
            ApplicationError::EmptySource {
                origin: "directory d".into(),
            }
            .into(),
        );
        assert_eq!(empty.exit_code(), 3);
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
        let err = CliError::from(DomainError::UnknownEntity("invoice".into()));
        let s = err.format_plain(false);
        assert!(s.contains("Error: unknown entity 'invoice'"));
        assert!(s.contains("Suggestions:"));
        assert!(s.contains("--verbose"));
    }

    #[test]
    fn format_plain_verbose_shows_cause() {
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
        assert!(matches!(cli, Err(CliError::IoError { ref message, .. }) if message == "reading config"));
    }
}
