//! Reviews a tourist leaves for a guide.
//!
//! Two shapes of a review exist: a plain record with `title` and
//! `description`, and a validated schema whose only text body is a
//! non-empty `message`. This type settles on `title` + `description` and
//! applies the non-empty rule to `description`; a `message` key is ignored
//! like any other unknown key.

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

pub static REVIEW_SCHEMA: EntitySchema = EntitySchema {
    entity: EntityKind::Review,
    fields: &[
        FieldDef::required("id", FieldKind::Text),
        FieldDef::required("guideId", FieldKind::Text),
        FieldDef::required("touristId", FieldKind::Text),
        FieldDef::required("title", FieldKind::Text).with_rules(&[Rule::MinChars {
            min: 1,
            message: TITLE_REQUIRED,
        }]),
        FieldDef::required("description", FieldKind::Text).with_rules(&[Rule::MinChars {
            min: 1,
            message: DESCRIPTION_REQUIRED,
        }]),
        FieldDef::optional("rating", FieldKind::Number),
        FieldDef::optional("image", FieldKind::Text),
        FieldDef::required("createdAt", FieldKind::Timestamp),
    ],
};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    id: EntityId,
    guide_id: EntityId,
    tourist_id: EntityId,
    title: String,
    description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    image: Option<String>,
    created_at: DateTime<Utc>,
}

impl Review {
    pub fn id(&self) -> &EntityId {
        &self.id
    }
    pub fn guide_id(&self) -> &EntityId {
        &self.guide_id
    }
    pub fn tourist_id(&self) -> &EntityId {
        &self.tourist_id
    }
    pub fn title(&self) -> &str {
        &self.title
    }
    pub fn description(&self) -> &str {
        &self.description
    }
    pub fn rating(&self) -> Option<f64> {
        self.rating
    }
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Entity for Review {
    const KIND: EntityKind = EntityKind::Review;

    fn from_record(mut record: Record) -> Result<Self, ValidationError> {
        Ok(Self {
            id: record.text("id")?.into(),
            guide_id: record.text("guideId")?.into(),
            tourist_id: record.text("touristId")?.into(),
            title: record.text("title")?,
            description: record.text("description")?,
            rating: record.optional_number("rating")?,
            image: record.optional_text("image")?,
            created_at: record.timestamp("createdAt")?,
        })
    }
}
