//! Validation Service - runs payloads through the entity validators.
//!
//! This service coordinates a validation batch:
//! 1. Load payloads from a source
//! 2. Validate each against one entity kind, with the configured options
//! 3. Collect the outcomes into a report
//!
//! Validation itself is pure; this layer adds logging, batching, and the
//! fail-fast policy.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::{
    application::{
        ApplicationError,
        ports::{Payload, PayloadSource},
    },
    domain::{AnyEntity, DomainError, EntityKind, ValidationOptions, validate_any_with},
    error::{CoreResult, WayfareError},
};

/// What happened to one payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum Verdict {
    Accepted {
        entity: AnyEntity,
    },
    Rejected {
        #[serde(serialize_with = "serialize_rejection")]
        error: DomainError,
    },
    /// The payload never reached the validator.
    Unreadable {
        reason: String,
    },
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }
}

fn serialize_rejection<S: Serializer>(error: &DomainError, serializer: S) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(None)?;
    map.serialize_entry("message", &error.to_string())?;
    match error.as_validation() {
        Some(validation) => {
            map.serialize_entry("fieldErrors", validation.field_errors())?;
            map.serialize_entry("formErrors", validation.form_errors())?;
        }
        None => {
            if let DomainError::InvariantViolation { field, .. } = error {
                map.serialize_entry("field", field)?;
            }
        }
    }
    map.end()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PayloadOutcome {
    pub origin: String,
    #[serde(flatten)]
    pub verdict: Verdict,
}

/// Result of one validation batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    batch_id: Uuid,
    entity: EntityKind,
    accepted: usize,
    rejected: usize,
    unreadable: usize,
    /// Set when fail-fast stopped the batch before every payload was seen.
    stopped_early: bool,
    outcomes: Vec<PayloadOutcome>,
}

impl ValidationReport {
    fn new(entity: EntityKind) -> Self {
        Self {
            batch_id: Uuid::new_v4(),
            entity,
            accepted: 0,
            rejected: 0,
            unreadable: 0,
            stopped_early: false,
            outcomes: Vec::new(),
        }
    }

    fn record(&mut self, outcome: PayloadOutcome) {
        match outcome.verdict {
            Verdict::Accepted { .. } => self.accepted += 1,
            Verdict::Rejected { .. } => self.rejected += 1,
            Verdict::Unreadable { .. } => self.unreadable += 1,
        }
        self.outcomes.push(outcome);
    }

    pub fn batch_id(&self) -> Uuid {
        self.batch_id
    }
    pub fn entity(&self) -> EntityKind {
        self.entity
    }
    pub fn accepted(&self) -> usize {
        self.accepted
    }
    pub fn rejected(&self) -> usize {
        self.rejected
    }
    pub fn unreadable(&self) -> usize {
        self.unreadable
    }
    pub fn stopped_early(&self) -> bool {
        self.stopped_early
    }
    pub fn outcomes(&self) -> &[PayloadOutcome] {
        &self.outcomes
    }

    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    /// True when every payload seen was accepted.
    pub fn is_clean(&self) -> bool {
        self.rejected == 0 && self.unreadable == 0
    }
}

/// Service for validating batches of payloads.
#[derive(Debug, Clone, Default)]
pub struct ValidationService {
    options: ValidationOptions,
    fail_fast: bool,
}

impl ValidationService {
    pub fn new(options: ValidationOptions) -> Self {
        Self {
            options,
            fail_fast: false,
        }
    }

    /// Stop a batch at the first payload that is not accepted.
    pub fn with_fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }

    pub fn options(&self) -> &ValidationOptions {
        &self.options
    }

    /// Validate a single payload.
    #[instrument(skip_all, fields(entity = %kind, origin = %payload.origin))]
    pub fn validate_payload(&self, kind: EntityKind, payload: &Payload) -> Result<AnyEntity, DomainError> {
        let result = validate_any_with(kind, &payload.body, &self.options);
        match &result {
            Ok(_) => debug!("Payload accepted"),
            Err(DomainError::Validation(err)) => {
                debug!(violations = err.violation_count(), "Payload rejected")
            }
            Err(err) => debug!(error = %err, "Payload rejected by cross-field check"),
        }
        result
    }

    /// Validate payloads as they were loaded, in order.
    ///
    /// `observe` sees each outcome as soon as it is decided, which lets
    /// callers drive progress output while the batch runs.
    pub fn validate_all<I, F>(&self, kind: EntityKind, payloads: I, mut observe: F) -> ValidationReport
    where
        I: IntoIterator<Item = CoreResult<Payload>>,
        F: FnMut(&PayloadOutcome),
    {
        let mut report = ValidationReport::new(kind);

        for loaded in payloads {
            let outcome = match loaded {
                Ok(payload) => {
                    let verdict = match self.validate_payload(kind, &payload) {
                        Ok(entity) => Verdict::Accepted { entity },
                        Err(error) => Verdict::Rejected { error },
                    };
                    PayloadOutcome {
                        origin: payload.origin,
                        verdict,
                    }
                }
                Err(err) => {
                    warn!(error = %err, "Payload could not be loaded");
                    PayloadOutcome {
                        origin: load_origin(&err),
                        verdict: Verdict::Unreadable {
                            reason: unreadable_reason(&err),
                        },
                    }
                }
            };

            let failed = !outcome.verdict.is_accepted();
            observe(&outcome);
            report.record(outcome);

            if failed && self.fail_fast {
                report.stopped_early = true;
                break;
            }
        }

        report
    }

    /// Load everything `source` offers and validate it.
    #[instrument(skip_all, fields(entity = %kind, source = %source.describe()))]
    pub fn validate_source<F>(
        &self,
        kind: EntityKind,
        source: &dyn PayloadSource,
        observe: F,
    ) -> CoreResult<ValidationReport>
    where
        F: FnMut(&PayloadOutcome),
    {
        let loaded = source.load_each();
        if loaded.is_empty() {
            return Err(ApplicationError::EmptySource {
                origin: source.describe(),
            }
            .into());
        }

        info!(payloads = loaded.len(), "Validating batch");
        let report = self.validate_all(kind, loaded, observe);
        info!(
            batch = %report.batch_id(),
            accepted = report.accepted(),
            rejected = report.rejected(),
            unreadable = report.unreadable(),
            "Batch finished"
        );
        Ok(report)
    }
}

fn load_origin(err: &WayfareError) -> String {
    match err {
        WayfareError::Application(app) => app.origin().unwrap_or("<source>").to_owned(),
        _ => "<source>".to_owned(),
    }
}

fn unreadable_reason(err: &WayfareError) -> String {
    match err {
        WayfareError::Application(ApplicationError::PayloadUnreadable { reason, .. }) => reason.clone(),
        other => other.to_string(),
    }
}
