//! In-memory payload source for tests and embedding.

use std::sync::{Arc, RwLock};

use serde_json::Value;

use wayfare_core::{
    application::{ApplicationError, Payload, PayloadSource},
    error::CoreResult,
};

/// Thread-safe in-memory payload list. Clones share the same list.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    inner: Arc<RwLock<Vec<Payload>>>,
}

impl InMemorySource {
    /// Create a new empty source.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_payloads(payloads: impl IntoIterator<Item = Payload>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(payloads.into_iter().collect())),
        }
    }

    /// Append a payload labelled `origin`.
    pub fn push(&self, origin: impl Into<String>, body: Value) -> CoreResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::SourceLockError)?;
        inner.push(Payload::new(origin, body));
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.inner.read().map(|inner| inner.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clear all payloads.
    pub fn clear(&self) -> CoreResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::SourceLockError)?;
        inner.clear();
        Ok(())
    }
}

impl PayloadSource for InMemorySource {
    fn describe(&self) -> String {
        "in-memory payloads".to_owned()
    }

    fn load(&self) -> CoreResult<Vec<Payload>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::SourceLockError)?;
        Ok(inner.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn clones_share_payloads() {
        let source = InMemorySource::new();
        let view = source.clone();
        source.push("first", json!({"id": 1})).unwrap();

        assert_eq!(view.len(), 1);
        assert_eq!(view.load().unwrap()[0].origin, "first");
    }

    #[test]
    fn clear_empties_the_source() {
        let source = InMemorySource::with_payloads([Payload::new("a", json!({}))]);
        assert!(!source.is_empty());
        source.clear().unwrap();
        assert!(source.is_empty());
        assert!(source.load_each().is_empty());
    }
}
