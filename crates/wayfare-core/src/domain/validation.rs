//! The entity validation entry points.
//!
//! Every function here is pure: the same input always gives the same result
//! and nothing outside the returned value changes.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::entities::{
    AnyEntity, Booking, Entity, Experience, Review, SigninCredentials, SupportTicket,
};
use crate::domain::error::{DomainError, ValidationError};
use crate::domain::schema::EntitySchema;
use crate::domain::value_objects::EntityKind;

/// Checks layered on top of field validation. All off by default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationOptions {
    /// Reject OPEN tickets that carry `closedByAdminId` or `adminResponse`.
    pub enforce_ticket_closure: bool,
}

impl ValidationOptions {
    pub fn strict() -> Self {
        Self {
            enforce_ticket_closure: true,
        }
    }
}

pub fn validate<E: Entity>(input: &Value) -> Result<E, ValidationError> {
    E::validate(input)
}

pub fn validate_signin(input: &Value) -> Result<SigninCredentials, ValidationError> {
    validate(input)
}

pub fn validate_review(input: &Value) -> Result<Review, ValidationError> {
    validate(input)
}

pub fn validate_booking(input: &Value) -> Result<Booking, ValidationError> {
    validate(input)
}

pub fn validate_experience(input: &Value) -> Result<Experience, ValidationError> {
    validate(input)
}

pub fn validate_support_ticket(input: &Value) -> Result<SupportTicket, ValidationError> {
    validate(input)
}

/// Validate against the schema of `kind`, chosen at runtime.
pub fn validate_any(kind: EntityKind, input: &Value) -> Result<AnyEntity, ValidationError> {
    Ok(match kind {
        EntityKind::Signin => validate_signin(input)?.into(),
        EntityKind::Review => validate_review(input)?.into(),
        EntityKind::Booking => validate_booking(input)?.into(),
        EntityKind::Experience => validate_experience(input)?.into(),
        EntityKind::SupportTicket => validate_support_ticket(input)?.into(),
    })
}

/// [`validate_any`] followed by whichever cross-field checks `options` enables.
pub fn validate_any_with(
    kind: EntityKind,
    input: &Value,
    options: &ValidationOptions,
) -> Result<AnyEntity, DomainError> {
    let entity = validate_any(kind, input)?;
    if let AnyEntity::SupportTicket(ticket) = &entity {
        if options.enforce_ticket_closure {
            ticket.check_closure()?;
        }
    }
    Ok(entity)
}

/// Every entity schema, in [`EntityKind::ALL`] order.
pub fn schemas() -> impl Iterator<Item = &'static EntitySchema> {
    EntityKind::ALL.into_iter().map(EntityKind::schema)
}
