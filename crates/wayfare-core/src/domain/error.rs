// ============================================================================
// domain/error.rs - VALIDATION AND DOMAIN ERRORS
// ============================================================================

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Structured rejection of an input value.
///
/// Carries every violated constraint, keyed by the wire name of the field
/// (`username`, `bookingStatus`, ...). Problems that do not belong to a
/// single field, such as the input not being an object at all, are kept as
/// form-level messages.
///
/// Field order is stable (sorted by name) so two validations of the same
/// input compare equal and render identically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationError {
    field_errors: BTreeMap<String, Vec<String>>,
    form_errors: Vec<String>,
}

impl ValidationError {
    pub fn new() -> Self {
        Self::default()
    }

    /// An error holding exactly one field message.
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut err = Self::new();
        err.push(field, message);
        err
    }

    /// An error holding exactly one form-level message.
    pub fn form(message: impl Into<String>) -> Self {
        let mut err = Self::new();
        err.push_form(message);
        err
    }

    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.field_errors
            .entry(field.into())
            .or_default()
            .push(message.into());
    }

    pub fn push_form(&mut self, message: impl Into<String>) {
        self.form_errors.push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.field_errors.is_empty() && self.form_errors.is_empty()
    }

    pub fn field_errors(&self) -> &BTreeMap<String, Vec<String>> {
        &self.field_errors
    }

    pub fn form_errors(&self) -> &[String] {
        &self.form_errors
    }

    /// Messages recorded against `field`; empty when the field passed.
    pub fn messages_for(&self, field: &str) -> &[String] {
        self.field_errors
            .get(field)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.field_errors.contains_key(field)
    }

    /// Names of the fields that failed, in sorted order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.field_errors.keys().map(String::as_str)
    }

    /// Total number of messages, field-level and form-level.
    pub fn violation_count(&self) -> usize {
        self.field_errors.values().map(Vec::len).sum::<usize>() + self.form_errors.len()
    }

    /// `Ok(value)` when nothing was recorded, otherwise `Err(self)`.
    pub fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation failed")?;
        let mut sep = ": ";
        for message in &self.form_errors {
            write!(f, "{sep}{message}")?;
            sep = "; ";
        }
        for (field, messages) in &self.field_errors {
            for message in messages {
                write!(f, "{sep}{field}: {message}")?;
                sep = "; ";
            }
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (reports keep them alongside accepted entities)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Input rejected by an entity schema
    // ========================================================================
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("unknown {entity} status '{value}'")]
    UnknownStatus { entity: &'static str, value: String },

    // ========================================================================
    // Conflicts between otherwise valid values
    // ========================================================================
    #[error("{entity} invariant violated on '{field}': {message}")]
    InvariantViolation {
        entity: &'static str,
        field: &'static str,
        message: String,
    },

    #[error("illegal {entity} status transition: {from} -> {to}")]
    IllegalTransition {
        entity: &'static str,
        from: String,
        to: String,
    },

    // ========================================================================
    // Lookup failures
    // ========================================================================
    #[error("unknown entity '{0}'")]
    UnknownEntity(String),
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Validation(err) => {
                let mut out: Vec<String> = err
                    .field_errors()
                    .iter()
                    .flat_map(|(field, messages)| {
                        messages.iter().map(move |m| format!("Fix '{field}': {m}"))
                    })
                    .collect();
                out.extend(err.form_errors().iter().cloned());
                out.push("Try: wayfare schema show <entity> to see the expected fields".into());
                out
            }
            Self::UnknownStatus { entity, .. } => vec![
                format!("Use one of the {entity} status literals, in upper case"),
                "Try: wayfare schema list".into(),
            ],
            Self::InvariantViolation { field, .. } => vec![
                format!("Remove '{field}' or change the status so it is consistent"),
                "Validate without --strict to skip cross-field checks".into(),
            ],
            Self::IllegalTransition { entity, from, .. } => vec![
                format!("See the allowed moves out of {from}:"),
                format!("  wayfare transitions {entity} --from {from}"),
            ],
            Self::UnknownEntity(name) => vec![
                format!("'{name}' is not a known entity"),
                "Known entities: signin, review, booking, experience, support-ticket".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Validation(_) | Self::UnknownStatus { .. } => ErrorCategory::Validation,
            Self::InvariantViolation { .. } | Self::IllegalTransition { .. } => {
                ErrorCategory::Conflict
            }
            Self::UnknownEntity(_) => ErrorCategory::NotFound,
        }
    }

    /// The schema rejection behind this error, if that is what it is.
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Conflict,
    NotFound,
}
