//! Implementation of the `wayfare validate` command.
//!
//! Responsibility: open the inputs, run them through the core
//! `ValidationService`, and display the report. Exit status reflects whether
//! every payload was accepted.

use std::path::PathBuf;

use tracing::{debug, instrument};

use wayfare_adapters::source_for_path;
use wayfare_core::{
    application::{Payload, PayloadSource, ValidationReport, ValidationService, Verdict},
    domain::{DomainError, EntityKind},
    error::CoreResult,
};

use crate::{
    cli::ValidateArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute `wayfare validate`.
#[instrument(skip_all, fields(entity = %args.entity, inputs = args.inputs.len()))]
pub fn execute(args: ValidateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let kind: EntityKind = args.entity.parse()?;

    let service = ValidationService::new(config.validation_options(args.strict))
        .with_fail_fast(args.fail_fast || config.validation.fail_fast);
    debug!(options = ?service.options(), form = args.form, "Validation configured");

    let inputs = Inputs::open(&args.inputs, args.form);

    let progress = output.progress("Validating payloads");
    let report = service.validate_source(kind, &inputs, |_| progress.inc(1));
    progress.finish_and_clear();
    let report = report?;

    if output.is_json() {
        output.json(&report)?;
    } else {
        render(&report, &output)?;
    }

    if report.is_clean() {
        return Ok(());
    }
    Err(CliError::ValidationFailed {
        failed: report.rejected() + report.unreadable(),
        total: report.total(),
    })
}

/// Several inputs read as one batch, in argument order.
struct Inputs(Vec<Box<dyn PayloadSource>>);

impl Inputs {
    fn open(paths: &[PathBuf], form: bool) -> Self {
        Self(paths.iter().map(|path| source_for_path(path, form)).collect())
    }
}

impl PayloadSource for Inputs {
    fn describe(&self) -> String {
        self.0
            .iter()
            .map(|source| source.describe())
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn load(&self) -> CoreResult<Vec<Payload>> {
        let mut payloads = Vec::new();
        for source in &self.0 {
            payloads.extend(source.load()?);
        }
        Ok(payloads)
    }

    fn load_each(&self) -> Vec<CoreResult<Payload>> {
        self.0.iter().flat_map(|source| source.load_each()).collect()
    }
}

fn render(report: &ValidationReport, output: &OutputManager) -> CliResult<()> {
    for outcome in report.outcomes() {
        let origin = &outcome.origin;
        match &outcome.verdict {
            Verdict::Accepted { entity } => {
                output.success(&format!("{origin}: {}", entity.summary()))?;
            }
            Verdict::Rejected { error } => {
                output.error(&format!("{origin}: {}", headline(error)))?;
                for line in detail_lines(error) {
                    output.print(&line)?;
                }
            }
            Verdict::Unreadable { reason } => {
                output.warning(&format!("{origin}: unreadable, {reason}"))?;
            }
        }
    }

    output.print("")?;
    output.info(&format!(
        "{}: {} accepted, {} rejected, {} unreadable",
        report.entity(),
        report.accepted(),
        report.rejected(),
        report.unreadable(),
    ))?;
    if report.stopped_early() {
        output.warning("Stopped at the first failure (--fail-fast)")?;
    }
    Ok(())
}

fn headline(error: &DomainError) -> String {
    match error.as_validation() {
        Some(validation) => format!("rejected, {} problem(s)", validation.violation_count()),
        None => error.to_string(),
    }
}

/// Indented `field: message` lines for a schema rejection.
fn detail_lines(error: &DomainError) -> Vec<String> {
    let Some(validation) = error.as_validation() else {
        return Vec::new();
    };
    let mut lines: Vec<String> = validation
        .field_errors()
        .iter()
        .flat_map(|(field, messages)| messages.iter().map(move |m| format!("    {field}: {m}")))
        .collect();
    lines.extend(validation.form_errors().iter().map(|m| format!("    {m}")));
    lines
}
