//! JSON documents: one object, or an array of them.

use std::path::PathBuf;

use serde_json::Value;
use tracing::{debug, instrument};

use wayfare_core::{
    application::{Payload, PayloadSource},
    error::CoreResult,
};

use super::{Input, SourceError, split_document};

#[derive(Debug, Clone)]
pub struct JsonFileSource {
    input: Input,
}

impl JsonFileSource {
    /// `-` reads standard input.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            input: Input::new(path),
        }
    }

    pub fn stdin() -> Self {
        Self { input: Input::Stdin }
    }
}

/// Decode `text` and split it into payloads labelled from `origin`.
pub fn parse_json(origin: &str, text: &str) -> Result<Vec<Payload>, SourceError> {
    let document: Value = serde_json::from_str(text)?;
    Ok(split_document(origin, document))
}

impl PayloadSource for JsonFileSource {
    fn describe(&self) -> String {
        format!("JSON file {}", self.input.origin())
    }

    #[instrument(skip_all, fields(origin = %self.input.origin()))]
    fn load(&self) -> CoreResult<Vec<Payload>> {
        let origin = self.input.origin();
        let payloads = self
            .input
            .read_to_string()
            .and_then(|text| parse_json(&origin, &text))
            .map_err(|e| e.at(&origin))?;
        debug!(count = payloads.len(), "Decoded JSON payloads");
        Ok(payloads)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::NamedTempFile;
    use wayfare_core::{application::ApplicationError, error::WayfareError};

    fn file_with(contents: &str) -> NamedTempFile {
        let file = NamedTempFile::new().unwrap();
        std::fs::write(file.path(), contents).unwrap();
        file
    }

    #[test]
    fn single_object_is_one_payload() {
        let file = file_with(r#"{"username": "joanna", "password": "pw"}"#);
        let payloads = JsonFileSource::new(file.path()).load().unwrap();

        assert_eq!(payloads.len(), 1);
        assert_eq!(payloads[0].origin, file.path().display().to_string());
        assert_eq!(payloads[0].body["username"], "joanna");
    }

    #[test]
    fn array_is_one_payload_per_element() {
        let file = file_with(r#"[{"id": "a"}, {"id": "b"}, {"id": "c"}]"#);
        let payloads = JsonFileSource::new(file.path()).load().unwrap();
        assert_eq!(payloads.len(), 3);
        assert_eq!(payloads[2].body, json!({"id": "c"}));
        assert!(payloads[2].origin.ends_with("#2"));
    }

    #[test]
    fn malformed_json_is_unreadable() {
        let file = file_with("{ not json");
        let err = JsonFileSource::new(file.path()).load().unwrap_err();
        let WayfareError::Application(ApplicationError::PayloadUnreadable { origin, reason }) = err
        else {
            panic!("expected PayloadUnreadable");
        };
        assert_eq!(origin, file.path().display().to_string());
        assert!(reason.starts_with("invalid JSON"));
    }

    #[test]
    fn missing_file_is_unreadable() {
        let err = JsonFileSource::new("/definitely/not/here.json")
            .load()
            .unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }

    #[test]
    fn parse_json_labels_from_origin() {
        let payloads = parse_json("inline", "[1]").unwrap();
        assert_eq!(payloads[0].origin, "inline#0");
    }
}
