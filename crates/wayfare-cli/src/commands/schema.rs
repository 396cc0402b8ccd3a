//! Implementation of `wayfare schema`.

use wayfare_core::{
    application::{SchemaCatalog, SchemaInfo, SchemaSummary},
    domain::EntityKind,
};

use crate::{cli::SchemaCommands, error::CliResult, output::OutputManager};

pub fn execute(cmd: SchemaCommands, output: OutputManager) -> CliResult<()> {
    let catalog = SchemaCatalog::new();

    match cmd {
        SchemaCommands::List => {
            let summaries = catalog.list();
            if output.is_json() {
                output.json(&summaries)?;
            } else {
                output.header("Entity schemas:")?;
                for line in list_lines(&summaries) {
                    output.print(&line)?;
                }
            }
        }

        SchemaCommands::Show { entity } => {
            let kind: EntityKind = entity.parse()?;
            let info = catalog.describe(kind);
            if output.is_json() {
                output.json(&info)?;
            } else {
                output.header(&format!("{} ({})", info.name, info.entity))?;
                for line in field_lines(&info) {
                    output.print(&line)?;
                }
            }
        }
    }

    Ok(())
}

fn list_lines(summaries: &[SchemaSummary]) -> Vec<String> {
    summaries
        .iter()
        .map(|s| {
            format!(
                "  {:<16} {:<20} {} fields, {} required",
                s.entity.as_str(),
                s.name,
                s.field_count,
                s.required_count
            )
        })
        .collect()
}

fn field_lines(info: &SchemaInfo) -> Vec<String> {
    let mut lines = Vec::new();
    for field in &info.fields {
        let presence = if field.required { "required" } else { "optional" };
        lines.push(format!("  {:<16} {:<28} {presence}", field.name, field.kind));
        for rule in &field.rules {
            lines.push(format!("      - {rule}"));
        }
    }
    lines
}
