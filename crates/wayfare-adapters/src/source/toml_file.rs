//! TOML payload files.
//!
//! A file is either one payload (the whole table) or a batch:
//!
//! ```toml
//! [[payload]]
//! username = "joanna"
//! password = "s3cret"
//!
//! [[payload]]
//! username = "jo"
//! password = "x"
//! ```
//!
//! TOML date-times become RFC 3339 strings for the timestamp fields. A
//! local date-time (no offset) is read as UTC, the same way a bare date is
//! read as midnight UTC.

use std::path::PathBuf;

use serde_json::{Map, Number, Value};
use tracing::{debug, instrument};

use wayfare_core::{
    application::{Payload, PayloadSource},
    error::CoreResult,
};

use super::{Input, SourceError, split_document};

/// Key of the array of tables that marks a batch file.
pub const BATCH_KEY: &str = "payload";

#[derive(Debug, Clone)]
pub struct TomlFileSource {
    input: Input,
}

impl TomlFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            input: Input::new(path),
        }
    }
}

pub fn parse_toml(origin: &str, text: &str) -> Result<Vec<Payload>, SourceError> {
    let mut table: toml::Table = toml::from_str(text)?;

    let is_batch = table.len() == 1 && matches!(table.get(BATCH_KEY), Some(toml::Value::Array(_)));
    let document = match table.remove(BATCH_KEY) {
        Some(batch) if is_batch => to_json(batch)?,
        Some(other) => {
            table.insert(BATCH_KEY.to_owned(), other);
            to_json(toml::Value::Table(table))?
        }
        None => to_json(toml::Value::Table(table))?,
    };
    Ok(split_document(origin, document))
}

fn to_json(value: toml::Value) -> Result<Value, SourceError> {
    Ok(match value {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::Number(i.into()),
        toml::Value::Float(f) => Number::from_f64(f)
            .map(Value::Number)
            .ok_or_else(|| SourceError::Unrepresentable(f.to_string()))?,
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(dt) => Value::String(datetime_text(&dt)),
        toml::Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(to_json)
                .collect::<Result<Vec<_>, _>>()?,
        ),
        toml::Value::Table(table) => Value::Object(
            table
                .into_iter()
                .map(|(k, v)| to_json(v).map(|v| (k, v)))
                .collect::<Result<Map<_, _>, _>>()?,
        ),
    })
}

fn datetime_text(dt: &toml::value::Datetime) -> String {
    match (dt.date, dt.time, dt.offset) {
        (Some(_), Some(_), None) => format!("{dt}Z"),
        _ => dt.to_string(),
    }
}

impl PayloadSource for TomlFileSource {
    fn describe(&self) -> String {
        format!("TOML file {}", self.input.origin())
    }

    #[instrument(skip_all, fields(origin = %self.input.origin()))]
    fn load(&self) -> CoreResult<Vec<Payload>> {
        let origin = self.input.origin();
        let payloads = self
            .input
            .read_to_string()
            .and_then(|text| parse_toml(&origin, &text))
            .map_err(|e| e.at(&origin))?;
        debug!(count = payloads.len(), "Decoded TOML payloads");
        Ok(payloads)
    }
}
