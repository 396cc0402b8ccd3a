//! Payload sources: everything that turns bytes into [`Payload`]s.
//!
//! Each reader decodes one input format into untyped JSON values. None of
//! them look at what the values contain; shape problems inside a payload are
//! the validator's to report.

pub mod directory;
pub mod form;
pub mod json_file;
pub mod memory;
pub mod toml_file;

use std::io::{self, Read};
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;

use wayfare_core::application::{ApplicationError, Payload, PayloadSource};
use wayfare_core::error::WayfareError;

pub use directory::DirectorySource;
pub use form::FormBodySource;
pub use json_file::JsonFileSource;
pub use memory::InMemorySource;
pub use toml_file::TomlFileSource;

/// Path that stands for standard input.
pub const STDIN_PATH: &str = "-";

/// Origin label used for payloads read from standard input.
pub const STDIN_ORIGIN: &str = "<stdin>";

/// Why an input could not be decoded.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read: {0}")]
    Io(#[from] io::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML value has no JSON equivalent: {0}")]
    Unrepresentable(String),
}

impl SourceError {
    /// Attach the origin, producing the core error callers see.
    pub fn at(self, origin: impl Into<String>) -> WayfareError {
        ApplicationError::unreadable(origin, self).into()
    }
}

/// Input location: a file, or standard input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Input {
    Stdin,
    File(PathBuf),
}

impl Input {
    pub(crate) fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        if path.as_os_str() == STDIN_PATH {
            Self::Stdin
        } else {
            Self::File(path)
        }
    }

    pub(crate) fn origin(&self) -> String {
        match self {
            Self::Stdin => STDIN_ORIGIN.to_owned(),
            Self::File(path) => path.display().to_string(),
        }
    }

    pub(crate) fn read_to_string(&self) -> Result<String, SourceError> {
        match self {
            Self::Stdin => {
                let mut text = String::new();
                io::stdin().read_to_string(&mut text)?;
                Ok(text)
            }
            Self::File(path) => Ok(std::fs::read_to_string(path)?),
        }
    }
}

/// Split a decoded document into payloads.
///
/// A top-level array yields one payload per element, labelled `origin#i`.
/// Anything else is a single payload.
pub(crate) fn split_document(origin: &str, document: Value) -> Vec<Payload> {
    match document {
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(i, body)| Payload::new(format!("{origin}#{i}"), body))
            .collect(),
        single => vec![Payload::new(origin, single)],
    }
}

/// Pick a reader for `path` from its extension.
///
/// `-` is standard input, read as JSON unless `form` is set. Directories
/// are walked. `.toml` and `.form` files use those readers; everything else
/// is read as JSON, or as a form body when `form` is set.
pub fn source_for_path(path: impl AsRef<Path>, form: bool) -> Box<dyn PayloadSource> {
    let path = path.as_ref();
    if path.as_os_str() == STDIN_PATH {
        return if form {
            Box::new(FormBodySource::from_path(path))
        } else {
            Box::new(JsonFileSource::stdin())
        };
    }
    if path.is_dir() {
        return Box::new(DirectorySource::new(path));
    }
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => Box::new(TomlFileSource::new(path)),
        Some("form") => Box::new(FormBodySource::from_path(path)),
        _ if form => Box::new(FormBodySource::from_path(path)),
        _ => Box::new(JsonFileSource::new(path)),
    }
}
