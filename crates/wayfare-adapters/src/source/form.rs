//! `application/x-www-form-urlencoded` bodies.
//!
//! Every value arrives as a string, which is why number fields accept
//! numeric text. Repeated keys keep the last value; empty values stay empty
//! strings so that "present but blank" is distinguishable from "missing".

use std::path::PathBuf;

use serde_json::{Map, Value};
use tracing::{debug, instrument};
use url::form_urlencoded;

use wayfare_core::{
    application::{Payload, PayloadSource},
    error::CoreResult,
};

use super::{Input, SourceError};

#[derive(Debug, Clone)]
enum Body {
    Inline { origin: String, text: String },
    Read(Input),
}

#[derive(Debug, Clone)]
pub struct FormBodySource {
    body: Body,
}

impl FormBodySource {
    /// Read the body from a file, or standard input for `-`.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self {
            body: Body::Read(Input::new(path)),
        }
    }

    /// Use a body already in memory.
    pub fn from_body(origin: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            body: Body::Inline {
                origin: origin.into(),
                text: text.into(),
            },
        }
    }

    fn origin(&self) -> String {
        match &self.body {
            Body::Inline { origin, .. } => origin.clone(),
            Body::Read(input) => input.origin(),
        }
    }

    fn text(&self) -> Result<String, SourceError> {
        match &self.body {
            Body::Inline { text, .. } => Ok(text.clone()),
            Body::Read(input) => input.read_to_string(),
        }
    }
}

/// Decode a form body into a JSON object of strings.
pub fn decode_form(text: &str) -> Value {
    let body = text.trim_end_matches(['\r', '\n']);
    let fields: Map<String, Value> = form_urlencoded::parse(body.as_bytes())
        .map(|(key, value)| (key.into_owned(), Value::String(value.into_owned())))
        .collect();
    Value::Object(fields)
}

impl PayloadSource for FormBodySource {
    fn describe(&self) -> String {
        format!("form body {}", self.origin())
    }

    #[instrument(skip_all, fields(origin = %self.origin()))]
    fn load(&self) -> CoreResult<Vec<Payload>> {
        let origin = self.origin();
        let text = self.text().map_err(|e| e.at(&origin))?;
        let body = decode_form(&text);
        debug!(
            fields = body.as_object().map_or(0, Map::len),
            "Decoded form body"
        );
        Ok(vec![Payload::new(origin, body)])
    }
}
