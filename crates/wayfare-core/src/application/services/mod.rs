//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "validate this directory of bookings" or
//! "describe the review schema".

pub mod schema_catalog;
pub mod validation_service;

pub use schema_catalog::{FieldInfo, SchemaCatalog, SchemaInfo, SchemaSummary, TransitionInfo};
pub use validation_service::{PayloadOutcome, ValidationReport, ValidationService, Verdict};
