//! Support tickets raised by users and closed by admins.
//!
//! The field schema accepts `closedByAdminId` and `adminResponse` whatever
//! the status. The stricter reading, that both belong to closed tickets
//! only, is available as a separate check, [`SupportTicket::check_closure`],
//! which callers opt into.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::{
    entities::Entity,
    error::{DomainError, ValidationError},
    schema::{EntitySchema, FieldDef, FieldKind, Record},
    value_objects::{EntityId, EntityKind, TicketStatus},
};

pub static SUPPORT_TICKET_SCHEMA: EntitySchema = EntitySchema {
    entity: EntityKind::SupportTicket,
    fields: &[
        FieldDef::required("id", FieldKind::Text),
        FieldDef::required("userId", FieldKind::Text),
        FieldDef::required("subject", FieldKind::Text),
        FieldDef::required("description", FieldKind::Text),
        FieldDef::required("status", FieldKind::Choice(TicketStatus::LITERALS)),
        FieldDef::required("createdAt", FieldKind::Timestamp),
        FieldDef::required("updatedAt", FieldKind::Timestamp),
        FieldDef::optional("closedByAdminId", FieldKind::Text),
        FieldDef::optional("adminResponse", FieldKind::Text),
    ],
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportTicket {
    id: EntityId,
    user_id: EntityId,
    subject: String,
    description: String,
    status: TicketStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    closed_by_admin_id: Option<EntityId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    admin_response: Option<String>,
}

impl SupportTicket {
    pub fn id(&self) -> &EntityId {
        &self.id
    }
    pub fn user_id(&self) -> &EntityId {
        &self.user_id
    }
    pub fn subject(&self) -> &str {
        &self.subject
    }
    pub fn description(&self) -> &str {
        &self.description
    }
    pub fn status(&self) -> TicketStatus {
        self.status
    }
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
    pub fn closed_by_admin_id(&self) -> Option<&EntityId> {
        self.closed_by_admin_id.as_ref()
    }
    pub fn admin_response(&self) -> Option<&str> {
        self.admin_response.as_deref()
    }

    /// Cross-field check: closure details only on closed tickets.
    ///
    /// Runs after field validation and reports the first offending field.
    pub fn check_closure(&self) -> Result<(), DomainError> {
        if self.status == TicketStatus::Closed {
            return Ok(());
        }
        let offending = if self.closed_by_admin_id.is_some() {
            Some("closedByAdminId")
        } else if self.admin_response.is_some() {
            Some("adminResponse")
        } else {
            None
        };
        match offending {
            Some(field) => Err(DomainError::InvariantViolation {
                entity: "support-ticket",
                field,
                message: format!("only allowed when status is CLOSED, found {}", self.status),
            }),
            None => Ok(()),
        }
    }
}

impl Entity for SupportTicket {
    const KIND: EntityKind = EntityKind::SupportTicket;

    fn from_record(mut record: Record) -> Result<Self, ValidationError> {
        let status = record.choice("status")?;
        Ok(Self {
            id: record.text("id")?.into(),
            user_id: record.text("userId")?.into(),
            subject: record.text("subject")?,
            description: record.text("description")?,
            status: status
                .parse()
                .map_err(|e: DomainError| ValidationError::single("status", e.to_string()))?,
            created_at: record.timestamp("createdAt")?,
            updated_at: record.timestamp("updatedAt")?,
            closed_by_admin_id: record.optional_text("closedByAdminId")?.map(EntityId::from),
            admin_response: record.optional_text("adminResponse")?,
        })
    }
}
