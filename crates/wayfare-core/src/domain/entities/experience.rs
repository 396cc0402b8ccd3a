use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::{
    entities::Entity,
    error::ValidationError,
    schema::{EntitySchema, FieldDef, FieldKind, Record, Rule},
    value_objects::{EntityId, EntityKind},
};

pub const TITLE_REQUIRED: &str = "Title is required";
pub const DESCRIPTION_REQUIRED: &str = "Description is required";

pub static EXPERIENCE_SCHEMA: EntitySchema = EntitySchema {
    entity: EntityKind::Experience,
    fields: &[
        FieldDef::required("id", FieldKind::Text),
        FieldDef::required("guideId", FieldKind::Text),
        FieldDef::required("title", FieldKind::Text).with_rules(&[Rule::MinChars {
            min: 1,
            message: TITLE_REQUIRED,
        }]),
        FieldDef::required("description", FieldKind::Text).with_rules(&[Rule::MinChars {
            min: 1,
            message: DESCRIPTION_REQUIRED,
        }]),
        FieldDef::optional("image", FieldKind::Text),
        FieldDef::required("experiencedAt", FieldKind::Timestamp),
        FieldDef::required("createdAt", FieldKind::Timestamp),
    ],
};

/// Something a guide has done and wants to show on their profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    id: EntityId,
    guide_id: EntityId,
    title: String,
    description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    image: Option<String>,
    experienced_at: DateTime<Utc>,
    created_at: DateTime<Utc>,
}

impl Experience {
    pub fn id(&self) -> &EntityId {
        &self.id
    }
    pub fn guide_id(&self) -> &EntityId {
        &self.guide_id
    }
    pub fn title(&self) -> &str {
        &self.title
    }
    pub fn description(&self) -> &str {
        &self.description
    }
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }
    pub fn experienced_at(&self) -> DateTime<Utc> {
        self.experienced_at
    }
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Entity for Experience {
    const KIND: EntityKind = EntityKind::Experience;

    fn from_record(mut record: Record) -> Result<Self, ValidationError> {
        Ok(Self {
            id: record.text("id")?.into(),
            guide_id: record.text("guideId")?.into(),
            title: record.text("title")?,
            description: record.text("description")?,
            image: record.optional_text("image")?,
            experienced_at: record.timestamp("experiencedAt")?,
            created_at: record.timestamp("createdAt")?,
        })
    }
}
