//! Application layer errors.
//!
//! These errors represent failures in getting payloads to the validator, not
//! payloads that fail validation. Rejections are `DomainError` from
//! `crate::domain`.

use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while loading or orchestrating payloads.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// A payload could not be read or decoded.
    #[error("Cannot read payload from {origin}: {reason}")]
    PayloadUnreadable { origin: String, reason: String },

    /// Shared payload storage is unavailable (lock poisoned).
    #[error("Payload source lock error")]
    SourceLockError,

    /// A source produced nothing to validate.
    #[error("No payloads found in {origin}")]
    EmptySource { origin: String },
}

impl ApplicationError {
    pub fn unreadable(origin: impl Into<String>, reason: impl ToString) -> Self {
        Self::PayloadUnreadable {
            origin: origin.into(),
            reason: reason.to_string(),
        }
    }

    /// Where the failing payload came from, when known.
    pub fn origin(&self) -> Option<&str> {
        match self {
            Self::PayloadUnreadable { origin, .. } | Self::EmptySource { origin } => Some(origin),
            Self::SourceLockError => None,
        }
    }

    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::PayloadUnreadable { origin, .. } => vec![
                format!("Check that {origin} exists and is readable"),
                "JSON files hold one object or an array of objects".into(),
                "Pass --form for application/x-www-form-urlencoded bodies".into(),
            ],
            Self::SourceLockError => vec![
                "The payload source is locked".into(),
                "Try again in a moment".into(),
            ],
            Self::EmptySource { origin } => vec![
                format!("{origin} contains no .json, .toml or .form payloads"),
                "Pass a file path, a directory, or - for stdin".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::PayloadUnreadable { .. } => ErrorCategory::Validation,
            Self::SourceLockError => ErrorCategory::Internal,
            Self::EmptySource { .. } => ErrorCategory::NotFound,
        }
    }
}
