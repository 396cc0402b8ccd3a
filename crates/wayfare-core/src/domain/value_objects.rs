//! Domain value objects: identifiers, status enumerations, entity kinds.
//!
//! # Design
//!
//! These are pure value types with equality by value and no identity. Each
//! enumeration exposes the exact literal set its schema accepts through a
//! `LITERALS` constant, so the schema tables and the Rust enums cannot drift
//! apart (the `literals_round_trip` tests enforce it).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::entities::{
    booking::BOOKING_SCHEMA, experience::EXPERIENCE_SCHEMA, review::REVIEW_SCHEMA,
    signin::SIGNIN_SCHEMA, support_ticket::SUPPORT_TICKET_SCHEMA,
};
use crate::domain::error::DomainError;
use crate::domain::schema::EntitySchema;

// ── EntityId ─────────────────────────────────────────────────────────────────

/// Identifier of an entity, or a reference to another entity by value.
///
/// Identifiers are opaque: no format is imposed beyond being a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for EntityId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for EntityId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ── BookingStatus ────────────────────────────────────────────────────────────

/// Where a booking stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub const ALL: [Self; 4] = [
        Self::Pending,
        Self::Confirmed,
        Self::Completed,
        Self::Cancelled,
    ];

    /// Accepted wire literals, in declaration order.
    pub const LITERALS: &'static [&'static str] =
        &["PENDING", "CONFIRMED", "COMPLETED", "CANCELLED"];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Confirmed => "CONFIRMED",
            Self::Completed => "COMPLETED",
            Self::Cancelled => "CANCELLED",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = DomainError;

    /// Exact, case-sensitive match.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| DomainError::UnknownStatus {
                entity: "booking",
                value: s.to_owned(),
            })
    }
}

// ── TicketStatus ─────────────────────────────────────────────────────────────

/// Whether a support ticket is still being worked on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketStatus {
    Open,
    Closed,
}

impl TicketStatus {
    pub const ALL: [Self; 2] = [Self::Open, Self::Closed];

    pub const LITERALS: &'static [&'static str] = &["OPEN", "CLOSED"];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "OPEN",
            Self::Closed => "CLOSED",
        }
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TicketStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| DomainError::UnknownStatus {
                entity: "ticket",
                value: s.to_owned(),
            })
    }
}

// ── EntityKind ───────────────────────────────────────────────────────────────

/// The entity types the validation layer knows how to check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntityKind {
    Signin,
    Review,
    Booking,
    Experience,
    SupportTicket,
}

impl EntityKind {
    pub const ALL: [Self; 5] = [
        Self::Signin,
        Self::Review,
        Self::Booking,
        Self::Experience,
        Self::SupportTicket,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Signin => "signin",
            Self::Review => "review",
            Self::Booking => "booking",
            Self::Experience => "experience",
            Self::SupportTicket => "support-ticket",
        }
    }

    /// Human-facing name, as used in messages.
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Signin => "Sign-in credentials",
            Self::Review => "Review",
            Self::Booking => "Booking",
            Self::Experience => "Experience",
            Self::SupportTicket => "Support ticket",
        }
    }

    /// The static schema describing this entity's fields.
    pub fn schema(self) -> &'static EntitySchema {
        match self {
            Self::Signin => &SIGNIN_SCHEMA,
            Self::Review => &REVIEW_SCHEMA,
            Self::Booking => &BOOKING_SCHEMA,
            Self::Experience => &EXPERIENCE_SCHEMA,
            Self::SupportTicket => &SUPPORT_TICKET_SCHEMA,
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "signin" | "sign-in" | "credentials" => Ok(Self::Signin),
            "review" => Ok(Self::Review),
            "booking" => Ok(Self::Booking),
            "experience" => Ok(Self::Experience),
            "support-ticket" | "supportticket" | "ticket" => Ok(Self::SupportTicket),
            other => Err(DomainError::UnknownEntity(other.to_owned())),
        }
    }
}
