//! Schema Catalog - read-only views of the entity schemas and lifecycles.
//!
//! Everything here is derived from the static tables in the domain layer, so
//! listings can never disagree with what the validators enforce.

use serde::Serialize;

use crate::domain::{EntityKind, EntitySchema, FieldDef, Lifecycle, schemas};

/// One line of `schema list`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaSummary {
    pub entity: EntityKind,
    pub name: &'static str,
    pub field_count: usize,
    pub required_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldInfo {
    pub name: &'static str,
    pub kind: String,
    pub required: bool,
    pub rules: Vec<String>,
}

/// Full description of one entity schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemaInfo {
    pub entity: EntityKind,
    pub name: &'static str,
    pub fields: Vec<FieldInfo>,
}

/// One row of a lifecycle table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransitionInfo {
    pub from: String,
    pub to: Vec<String>,
    pub terminal: bool,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SchemaCatalog;

impl SchemaCatalog {
    pub fn new() -> Self {
        Self
    }

    /// Summaries of every schema, in entity order.
    pub fn list(&self) -> Vec<SchemaSummary> {
        schemas()
            .map(|schema| SchemaSummary {
                entity: schema.entity,
                name: schema.entity.display_name(),
                field_count: schema.fields.len(),
                required_count: schema.fields.iter().filter(|f| f.is_required()).count(),
            })
            .collect()
    }

    pub fn describe(&self, kind: EntityKind) -> SchemaInfo {
        describe_schema(kind.schema())
    }

    /// Rows of the lifecycle table for status enum `S`.
    pub fn transitions<S: Lifecycle>(&self) -> Vec<TransitionInfo> {
        S::table()
            .iter()
            .map(|row| TransitionInfo {
                from: row.from.to_string(),
                to: row.to.iter().map(ToString::to_string).collect(),
                terminal: row.to.is_empty(),
            })
            .collect()
    }
}

fn describe_schema(schema: &EntitySchema) -> SchemaInfo {
    SchemaInfo {
        entity: schema.entity,
        name: schema.entity.display_name(),
        fields: schema.fields.iter().map(describe_field).collect(),
    }
}

fn describe_field(field: &FieldDef) -> FieldInfo {
    FieldInfo {
        name: field.name,
        kind: field.kind.describe(),
        required: field.is_required(),
        rules: field
            .rules
            .iter()
            .map(|rule| format!("{} ({})", rule.describe(), rule.message()))
            .collect(),
    }
}
