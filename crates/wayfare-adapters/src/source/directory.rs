//! A directory tree of payload files.
//!
//! Files are picked up by extension (`.json`, `.toml`, `.form`) and visited
//! in path order so batch output is stable between runs. Anything else is
//! skipped.

use std::path::{Path, PathBuf};

use tracing::{debug, instrument, warn};
use walkdir::WalkDir;

use wayfare_core::{
    application::{ApplicationError, Payload, PayloadSource},
    error::CoreResult,
};

use super::{
    SourceError, form::decode_form, json_file::parse_json, toml_file::parse_toml,
};

/// Extensions the directory walk picks up.
pub const PAYLOAD_EXTENSIONS: &[&str] = &["json", "toml", "form"];

#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn walk(&self) -> Vec<Result<PathBuf, (String, SourceError)>> {
        let mut found = Vec::new();
        for entry in WalkDir::new(&self.root).min_depth(1).sort_by_file_name() {
            match entry {
                Ok(entry) if entry.file_type().is_file() => {
                    if has_payload_extension(entry.path()) {
                        found.push(Ok(entry.into_path()));
                    } else {
                        debug!(path = %entry.path().display(), "Skipping non-payload file");
                    }
                }
                Ok(_) => {}
                Err(err) => {
                    let origin = err
                        .path()
                        .unwrap_or(self.root.as_path())
                        .display()
                        .to_string();
                    let io = err
                        .into_io_error()
                        .unwrap_or_else(|| std::io::Error::other("directory walk failed"));
                    found.push(Err((origin, SourceError::Io(io))));
                }
            }
        }
        found
    }
}

fn has_payload_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| PAYLOAD_EXTENSIONS.contains(&ext))
}

fn read_file(path: &Path) -> Result<Vec<Payload>, SourceError> {
    let origin = path.display().to_string();
    let text = std::fs::read_to_string(path)?;
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => parse_toml(&origin, &text),
        Some("form") => Ok(vec![Payload::new(origin, decode_form(&text))]),
        _ => parse_json(&origin, &text),
    }
}

impl PayloadSource for DirectorySource {
    fn describe(&self) -> String {
        format!("directory {}", self.root.display())
    }

    fn load(&self) -> CoreResult<Vec<Payload>> {
        let mut payloads = Vec::new();
        for loaded in self.load_each() {
            payloads.push(loaded?);
        }
        Ok(payloads)
    }

    /// One entry per payload; a file that cannot be read or decoded becomes
    /// one error entry and the walk carries on.
    #[instrument(skip_all, fields(root = %self.root.display()))]
    fn load_each(&self) -> Vec<CoreResult<Payload>> {
        if !self.root.is_dir() {
            return vec![Err(ApplicationError::unreadable(
                self.root.display().to_string(),
                "not a directory",
            )
            .into())];
        }

        let mut loaded = Vec::new();
        for path in self.walk() {
            match path.and_then(|path| read_file(&path).map_err(|e| (path.display().to_string(), e))) {
                Ok(payloads) => loaded.extend(payloads.into_iter().map(Ok)),
                Err((origin, err)) => {
                    warn!(origin = %origin, error = %err, "Skipping unreadable payload file");
                    loaded.push(Err(err.at(origin)));
                }
            }
        }
        debug!(count = loaded.len(), "Walked payload directory");
        loaded
    }
}
