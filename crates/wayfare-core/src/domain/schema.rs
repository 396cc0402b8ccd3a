//! Schema descriptions and the generic engine that evaluates them.
//!
//! # Design
//!
//! Every entity is described exactly once by a static [`EntitySchema`]: an
//! ordered table of [`FieldDef`]s, each naming the wire field, the kind of
//! value it holds, whether it may be absent, and the constraint [`Rule`]s it
//! must satisfy. [`EntitySchema::check`] is the only place that walks input
//! data. Entities never inspect raw input themselves; they receive a
//! [`Record`] of already-coerced values and pick their fields out of it.
//!
//! # Adding a Field
//!
//! 1. Add a [`FieldDef`] to the entity's schema table
//! 2. Read it out of the [`Record`] in the entity's `from_record`
//! 3. That's it: messages, introspection and `wayfare schema show` follow
//!
//! Evaluation collects every violation instead of stopping at the first, so
//! one round trip tells the caller everything that is wrong with a form.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde_json::{Map, Value};

use crate::domain::error::ValidationError;
use crate::domain::value_objects::EntityKind;

/// Message for a required field that is absent.
pub const REQUIRED: &str = "Required";

/// Message for a timestamp string that does not parse.
pub const INVALID_DATETIME: &str = "Invalid date-time";

// ── Field kinds ──────────────────────────────────────────────────────────────

/// The shape of value a field holds once validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Any string.
    Text,
    /// A finite number; numeric strings are accepted.
    Number,
    /// RFC 3339 date-time, or a `YYYY-MM-DD` calendar date at midnight UTC.
    Timestamp,
    /// One of a closed set of string literals, matched exactly.
    Choice(&'static [&'static str]),
}

impl FieldKind {
    /// Short name used in type-mismatch messages.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Text => "string",
            Self::Number => "number",
            Self::Timestamp => "date-time string",
            Self::Choice(_) => "enum",
        }
    }

    /// Longer description for schema listings.
    pub fn describe(&self) -> String {
        match self {
            Self::Choice(literals) => format!("one of {}", quoted_literals(literals)),
            other => other.label().to_owned(),
        }
    }

    /// Turn a raw input value into a typed field value.
    ///
    /// The error is the single message describing why the value does not
    /// fit this kind.
    fn coerce(&self, raw: &Value) -> Result<FieldValue, String> {
        match (self, raw) {
            (Self::Text, Value::String(s)) => Ok(FieldValue::Text(s.clone())),

            (Self::Number, Value::Number(n)) => n
                .as_f64()
                .filter(|v| v.is_finite())
                .map(FieldValue::Number)
                .ok_or_else(|| "Expected a finite number".to_owned()),
            (Self::Number, Value::String(s)) => match s.trim().parse::<f64>() {
                Ok(v) if v.is_finite() => Ok(FieldValue::Number(v)),
                Ok(_) => Err("Expected a finite number".to_owned()),
                Err(_) => Err(type_mismatch(self, raw)),
            },

            (Self::Timestamp, Value::String(s)) => parse_timestamp(s)
                .map(FieldValue::Timestamp)
                .ok_or_else(|| INVALID_DATETIME.to_owned()),

            (Self::Choice(literals), Value::String(s)) => literals
                .iter()
                .find(|literal| **literal == s.as_str())
                .map(|literal| FieldValue::Choice(*literal))
                .ok_or_else(|| {
                    format!(
                        "Invalid enum value. Expected {}, received '{s}'",
                        quoted_literals(literals)
                    )
                }),
            (Self::Choice(literals), other) => Err(format!(
                "Expected {}, received {}",
                quoted_literals(literals),
                json_type(other)
            )),

            (kind, other) => Err(type_mismatch(kind, other)),
        }
    }
}

fn type_mismatch(kind: &FieldKind, raw: &Value) -> String {
    format!("Expected {}, received {}", kind.label(), json_type(raw))
}

fn quoted_literals(literals: &[&str]) -> String {
    literals
        .iter()
        .map(|l| format!("'{l}'"))
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Name of a JSON value's type, as used in "received ..." messages.
pub fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

// ── Rules ────────────────────────────────────────────────────────────────────

/// A constraint on a field's value, paired with the message shown when the
/// value breaks it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Text must contain at least `min` characters (Unicode scalar values).
    MinChars { min: usize, message: &'static str },
    /// Number must be zero or greater.
    NonNegative { message: &'static str },
}

impl Rule {
    /// Whether this rule can be evaluated against values of `kind`.
    pub const fn applies_to(&self, kind: FieldKind) -> bool {
        matches!(
            (self, kind),
            (Self::MinChars { .. }, FieldKind::Text) | (Self::NonNegative { .. }, FieldKind::Number)
        )
    }

    pub const fn message(&self) -> &'static str {
        match self {
            Self::MinChars { message, .. } | Self::NonNegative { message } => *message,
        }
    }

    /// Human-readable statement of the constraint.
    pub fn describe(&self) -> String {
        match self {
            Self::MinChars { min, .. } => format!("at least {min} character(s)"),
            Self::NonNegative { .. } => "not negative".to_owned(),
        }
    }

    /// `Some(message)` when `value` breaks the rule.
    fn violation(&self, value: &FieldValue) -> Option<&'static str> {
        let holds = match (self, value) {
            (Self::MinChars { min, .. }, FieldValue::Text(s)) => s.chars().count() >= *min,
            (Self::NonNegative { .. }, FieldValue::Number(n)) => *n >= 0.0,
            // Kind/rule pairing is checked by the registry tests; an
            // unpaired rule never fires.
            _ => true,
        };
        (!holds).then(|| self.message())
    }
}

// ── Field and schema tables ──────────────────────────────────────────────────

/// Whether a field must be present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Required,
    /// May be absent. An explicit `null` is still a type error.
    Optional,
}

/// Everything the engine needs to know about one field.
#[derive(Debug, Clone, Copy)]
pub struct FieldDef {
    /// Wire name, camelCase.
    pub name: &'static str,
    pub kind: FieldKind,
    pub presence: Presence,
    /// Evaluated in order; every failing rule contributes its message.
    pub rules: &'static [Rule],
}

impl FieldDef {
    pub const fn required(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            presence: Presence::Required,
            rules: &[],
        }
    }

    pub const fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            presence: Presence::Optional,
            rules: &[],
        }
    }

    pub const fn with_rules(mut self, rules: &'static [Rule]) -> Self {
        self.rules = rules;
        self
    }

    pub const fn is_required(&self) -> bool {
        matches!(self.presence, Presence::Required)
    }
}

/// The full field table for one entity.
#[derive(Debug, Clone, Copy)]
pub struct EntitySchema {
    pub entity: EntityKind,
    pub fields: &'static [FieldDef],
}

impl EntitySchema {
    pub fn field(&self, name: &str) -> Option<&'static FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Check `input` against every field of this schema.
    ///
    /// Keys the schema does not name are ignored. On success the returned
    /// [`Record`] holds a typed value for every present field; on failure
    /// the error lists every violation found.
    pub fn check(&self, input: &Value) -> Result<Record, ValidationError> {
        let Some(object) = input.as_object() else {
            return Err(ValidationError::form(format!(
                "Expected object, received {}",
                json_type(input)
            )));
        };
        self.check_object(object)
    }

    fn check_object(&self, object: &Map<String, Value>) -> Result<Record, ValidationError> {
        let mut errors = ValidationError::new();
        let mut values = BTreeMap::new();

        for field in self.fields {
            let Some(raw) = object.get(field.name) else {
                if field.is_required() {
                    errors.push(field.name, REQUIRED);
                }
                continue;
            };

            match field.kind.coerce(raw) {
                Err(message) => errors.push(field.name, message),
                Ok(value) => {
                    let mut clean = true;
                    for message in field.rules.iter().filter_map(|r| r.violation(&value)) {
                        errors.push(field.name, message);
                        clean = false;
                    }
                    if clean {
                        values.insert(field.name, value);
                    }
                }
            }
        }

        errors.into_result(Record {
            entity: self.entity,
            values,
        })
    }
}

// ── Record ───────────────────────────────────────────────────────────────────

/// A coerced field value.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Timestamp(DateTime<Utc>),
    Choice(&'static str),
}

impl FieldValue {
    fn kind_label(&self) -> &'static str {
        match self {
            Self::Text(_) => "string",
            Self::Number(_) => "number",
            Self::Timestamp(_) => "date-time string",
            Self::Choice(_) => "enum",
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{n}"),
            Self::Timestamp(t) => f.write_str(&t.to_rfc3339()),
            Self::Choice(c) => f.write_str(c),
        }
    }
}

/// Typed values produced by a successful [`EntitySchema::check`].
///
/// Accessors move values out. Asking for a field under the wrong kind, or a
/// required field the record does not hold, yields a [`ValidationError`]
/// against that field; with a consistent schema and `from_record` this never
/// happens.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    entity: EntityKind,
    values: BTreeMap<&'static str, FieldValue>,
}

macro_rules! record_accessors {
    ($( $req:ident, $opt:ident => $variant:ident : $ty:ty, $label:literal; )*) => {
        $(
            pub fn $req(&mut self, name: &'static str) -> Result<$ty, ValidationError> {
                self.$opt(name)?
                    .ok_or_else(|| ValidationError::single(name, REQUIRED))
            }

            pub fn $opt(&mut self, name: &'static str) -> Result<Option<$ty>, ValidationError> {
                match self.values.remove(name) {
                    None => Ok(None),
                    Some(FieldValue::$variant(v)) => Ok(Some(v)),
                    Some(other) => Err(ValidationError::single(
                        name,
                        format!("Expected {}, received {}", $label, other.kind_label()),
                    )),
                }
            }
        )*
    };
}

impl Record {
    pub fn entity(&self) -> EntityKind {
        self.entity
    }

    record_accessors! {
        text, optional_text => Text: String, "string";
        number, optional_number => Number: f64, "number";
        timestamp, optional_timestamp => Timestamp: DateTime<Utc>, "date-time string";
        choice, optional_choice => Choice: &'static str, "enum";
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    static DEMO_FIELDS: &[FieldDef] = &[
        FieldDef::required("name", FieldKind::Text).with_rules(&[Rule::MinChars {
            min: 2,
            message: "Name too short",
        }]),
        FieldDef::required("price", FieldKind::Number).with_rules(&[Rule::NonNegative {
            message: "Price must not be negative",
        }]),
        FieldDef::required("colour", FieldKind::Choice(&["RED", "BLUE"])),
        FieldDef::optional("at", FieldKind::Timestamp),
    ];

    static DEMO: EntitySchema = EntitySchema {
        entity: EntityKind::Review,
        fields: DEMO_FIELDS,
    };

    #[test]
    fn check_accepts_valid_object() {
        let mut record = DEMO
            .check(&json!({"name": "ok", "price": 3, "colour": "RED"}))
            .unwrap();
        assert_eq!(record.values.len(), 3);
        assert_eq!(record.text("name").unwrap(), "ok");
        assert_eq!(record.number("price").unwrap(), 3.0);
        assert_eq!(record.choice("colour").unwrap(), "RED");
        assert_eq!(record.optional_timestamp("at").unwrap(), None);
    }

    #[test]
    fn check_collects_every_violation() {
        let err = DEMO
            .check(&json!({"name": "x", "price": -1, "colour": "GREEN"}))
            .unwrap_err();
        assert_eq!(err.messages_for("name"), ["Name too short"]);
        assert_eq!(err.messages_for("price"), ["Price must not be negative"]);
        assert_eq!(
            err.messages_for("colour"),
            ["Invalid enum value. Expected 'RED' | 'BLUE', received 'GREEN'"]
        );
        assert!(!err.has_field("at"));
    }

    #[test]
    fn missing_required_fields_are_reported() {
        let err = DEMO.check(&json!({})).unwrap_err();
        assert_eq!(err.fields().collect::<Vec<_>>(), ["colour", "name", "price"]);
        assert_eq!(err.messages_for("name"), [REQUIRED]);
    }

    #[rstest]
    #[case(json!([]), "Expected object, received array")]
    #[case(json!(null), "Expected object, received null")]
    #[case(json!("text"), "Expected object, received string")]
    fn non_object_input_is_a_form_error(#[case] input: Value, #[case] expected: &str) {
        let err = DEMO.check(&input).unwrap_err();
        assert_eq!(err.form_errors(), [expected]);
        assert!(err.field_errors().is_empty());
    }

    #[rstest]
    #[case(json!(12.5), 12.5)]
    #[case(json!("12.5"), 12.5)]
    #[case(json!(" 0 "), 0.0)]
    fn numbers_accept_numeric_strings(#[case] raw: Value, #[case] expected: f64) {
        assert_eq!(
            FieldKind::Number.coerce(&raw),
            Ok(FieldValue::Number(expected))
        );
    }

    #[rstest]
    #[case(json!("twelve"), "Expected number, received string")]
    #[case(json!("NaN"), "Expected a finite number")]
    #[case(json!(true), "Expected number, received boolean")]
    fn numbers_reject_non_numeric(#[case] raw: Value, #[case] expected: &str) {
        assert_eq!(FieldKind::Number.coerce(&raw), Err(expected.to_owned()));
    }

    #[rstest]
    #[case("2025-03-01T10:00:00Z")]
    #[case("2025-03-01T12:00:00+02:00")]
    #[case("2025-03-01")]
    fn timestamps_accept_rfc3339_and_dates(#[case] raw: &str) {
        assert!(matches!(
            FieldKind::Timestamp.coerce(&json!(raw)),
            Ok(FieldValue::Timestamp(_))
        ));
    }

    #[test]
    fn timestamp_offsets_normalise_to_utc() {
        let Ok(FieldValue::Timestamp(t)) =
            FieldKind::Timestamp.coerce(&json!("2025-03-01T12:00:00+02:00"))
        else {
            panic!("expected timestamp");
        };
        assert_eq!(t.to_rfc3339(), "2025-03-01T10:00:00+00:00");
    }

    #[test]
    fn bad_timestamp_has_its_own_message() {
        assert_eq!(
            FieldKind::Timestamp.coerce(&json!("yesterday")),
            Err(INVALID_DATETIME.to_owned())
        );
    }

    #[test]
    fn null_is_not_absence() {
        let err = DEMO
            .check(&json!({"name": "ok", "price": 1, "colour": "RED", "at": null}))
            .unwrap_err();
        assert_eq!(
            err.messages_for("at"),
            ["Expected date-time string, received null"]
        );
    }

    #[test]
    fn min_chars_counts_characters_not_bytes() {
        let rule = Rule::MinChars {
            min: 3,
            message: "short",
        };
        assert_eq!(rule.violation(&FieldValue::Text("añb".into())), None);
        assert_eq!(rule.violation(&FieldValue::Text("ñ".into())), Some("short"));
    }

    #[test]
    fn record_reports_kind_mismatch() {
        let mut record = DEMO
            .check(&json!({"name": "ok", "price": 3, "colour": "RED"}))
            .unwrap();
        let err = record.number("name").unwrap_err();
        assert_eq!(err.messages_for("name"), ["Expected number, received string"]);
    }

    #[test]
    fn rules_describe_themselves() {
        assert_eq!(DEMO_FIELDS[0].rules[0].describe(), "at least 2 character(s)");
        assert_eq!(
            DEMO_FIELDS[2].kind.describe(),
            "one of 'RED' | 'BLUE'"
        );
    }
}
