//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `wayfare-adapters` crate provides implementations.

use serde_json::Value;

use crate::error::CoreResult;

/// One untyped input value and a label saying where it came from.
///
/// The origin is free text: a file path, `path#3` for the fourth element of
/// a JSON array, `<stdin>`, or whatever a test chooses.
#[derive(Debug, Clone, PartialEq)]
pub struct Payload {
    pub origin: String,
    pub body: Value,
}

impl Payload {
    pub fn new(origin: impl Into<String>, body: Value) -> Self {
        Self {
            origin: origin.into(),
            body,
        }
    }
}

/// Port for anything that yields payloads to validate.
///
/// Implemented by:
/// - `wayfare_adapters::JsonFileSource` (JSON documents, or stdin)
/// - `wayfare_adapters::TomlFileSource` (TOML tables)
/// - `wayfare_adapters::FormBodySource` (URL-encoded form bodies)
/// - `wayfare_adapters::DirectorySource` (a tree of the above)
/// - `wayfare_adapters::InMemorySource` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait PayloadSource: Send + Sync {
    /// Human-readable label for logs and messages.
    fn describe(&self) -> String;

    /// Load every payload, failing as a whole on the first problem.
    fn load(&self) -> CoreResult<Vec<Payload>>;

    /// Load every payload, reporting problems per payload.
    ///
    /// Sources made of several independent inputs override this so one bad
    /// input does not hide the rest. The default wraps [`load`](Self::load).
    fn load_each(&self) -> Vec<CoreResult<Payload>> {
        match self.load() {
            Ok(payloads) => payloads.into_iter().map(Ok).collect(),
            Err(err) => vec![Err(err)],
        }
    }
}
