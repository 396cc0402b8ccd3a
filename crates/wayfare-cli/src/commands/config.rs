//! `wayfare config`: inspect the effective configuration.

use std::path::PathBuf;

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(
    cmd: ConfigCommands,
    config: AppConfig,
    config_file: Option<&PathBuf>,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            output.print(&format!("{key} = {value}"))?;
        }

        ConfigCommands::List => {
            if output.is_json() {
                output.json(&config)?;
            } else {
                output.header("Current Configuration:")?;
                let serialised = toml::to_string_pretty(&config)
                    .with_cli_context(|| "Failed to serialise config")?;
                output.print(&serialised)?;
            }
        }

        ConfigCommands::Path => {
            output.print(&AppConfig::active_path(config_file).display().to_string())?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

/// Look up a dotted key such as `validation.fail_fast`.
fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    let root = toml::Value::try_from(config).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    })?;

    let mut current = &root;
    for part in key.split('.') {
        current = match current.get(part) {
            Some(next) => next,
            // Unset optional values are skipped when serialising.
            None if key == "logging.file" => return Ok(String::new()),
            None => {
                return Err(CliError::ConfigError {
                    message: format!("Unknown config key: '{key}'"),
                    source: None,
                });
            }
        };
    }

    Ok(match current {
        toml::Value::String(s) => s.clone(),
        other => other.to_string(),
    })
}

// ── tests ─────────────────────────────────────────────────────────────────────
