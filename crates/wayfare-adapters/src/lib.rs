//! Infrastructure adapters for Wayfare.
//!
//! This crate implements the ports defined in `wayfare-core::application::ports`.
//! It contains all file and stream I/O.

pub mod source;

// Re-export commonly used adapters
pub use source::{
    DirectorySource, FormBodySource, InMemorySource, JsonFileSource, SourceError, TomlFileSource,
    source_for_path,
};
