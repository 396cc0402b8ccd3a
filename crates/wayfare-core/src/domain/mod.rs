//! Core domain layer for Wayfare.
//!
//! Pure validation logic. Nothing here performs I/O, logs, or keeps state
//! between calls; the application layer and adapters handle all of that.
//!
//! - **Schemas**: static field tables, one per entity ([`schema`])
//! - **Entities**: immutable values built only from checked input ([`entities`])
//! - **Lifecycles**: status transition tables, kept apart from validation
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod lifecycle;
pub mod schema;
pub mod validation;
pub mod value_objects;

// Re-exports for convenience
pub use entities::{
    AnyEntity, Booking, Entity, Experience, Review, SigninCredentials, SupportTicket,
};

pub use error::{DomainError, ErrorCategory, ValidationError};

pub use lifecycle::{Lifecycle, TransitionDef};

pub use schema::{EntitySchema, FieldDef, FieldKind, FieldValue, Presence, Record, Rule};

pub use validation::{
    ValidationOptions, schemas, validate, validate_any, validate_any_with, validate_booking,
    validate_experience, validate_review, validate_signin, validate_support_ticket,
};

pub use value_objects::{BookingStatus, EntityId, EntityKind, TicketStatus};
