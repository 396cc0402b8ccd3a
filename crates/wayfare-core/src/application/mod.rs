//! Application layer for Wayfare.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ValidationService, SchemaCatalog)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! validation rules itself. All rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    FieldInfo, PayloadOutcome, SchemaCatalog, SchemaInfo, SchemaSummary, TransitionInfo,
    ValidationReport, ValidationService, Verdict,
};

// Re-export port traits (for adapter implementation)
pub use ports::{Payload, PayloadSource};

pub use error::ApplicationError;
