//! Implementation of `wayfare transitions`.
//!
//! Prints a lifecycle table, the moves out of one status, or checks a
//! single move. The tables are advisory: validation never consults them.

use std::str::FromStr;

use wayfare_core::{
    application::{SchemaCatalog, TransitionInfo},
    domain::{BookingStatus, DomainError, Lifecycle, TicketStatus},
};

use crate::{
    cli::{LifecycleKind, TransitionsArgs},
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: TransitionsArgs, output: OutputManager) -> CliResult<()> {
    match args.lifecycle {
        LifecycleKind::Booking => show::<BookingStatus>(&args, &output),
        LifecycleKind::Ticket => show::<TicketStatus>(&args, &output),
    }
}

fn show<S>(args: &TransitionsArgs, output: &OutputManager) -> CliResult<()>
where
    S: Lifecycle + FromStr<Err = DomainError>,
{
    let from = args.from.as_deref().map(S::from_str).transpose()?;

    if let (Some(from), Some(to)) = (from, args.to.as_deref()) {
        let next = from.transition(S::from_str(to)?)?;
        output.success(&format!("{} {from} -> {next} is allowed", S::ENTITY))?;
        return Ok(());
    }

    let rows: Vec<TransitionInfo> = SchemaCatalog::new()
        .transitions::<S>()
        .into_iter()
        .filter(|row| from.is_none_or(|status| row.from == status.to_string()))
        .collect();

    if output.is_json() {
        output.json(&rows)?;
        return Ok(());
    }

    output.header(&format!("{} lifecycle:", S::ENTITY))?;
    for row in &rows {
        output.print(&row_line(row))?;
    }
    Ok(())
}

fn row_line(row: &TransitionInfo) -> String {
    if row.terminal {
        format!("  {:<10} (terminal)", row.from)
    } else {
        format!("  {:<10} -> {}", row.from, row.to.join(", "))
    }
}
