//! # Wayfare CLI
//!
//! Validates booking-app payloads from files, directories, or stdin.
//!
//! Startup runs `.env`, argument parsing, configuration (which may name a
//! log file), tracing, then the command. A [`CliError`] ends the process
//! with one of these codes:
//!
//! | Code | Meaning                              |
//! |------|--------------------------------------|
//! |  0   | Success                              |
//! |  1   | Internal / system error              |
//! |  2   | User error or rejected payloads      |
//! |  3   | Resource not found                   |
//! |  4   | Configuration error                  |

use std::io::IsTerminal as _;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, instrument};

use crate::{
    cli::{Cli, Commands},
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    // Load .env before anything else, including config and tracing.
    // A missing .env is fine.
    let _ = dotenvy::dotenv();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version arrive here too and must exit 0.
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(2)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    // Tracing is not up yet, so failures go straight to stderr.
    let config = match AppConfig::load(cli.global.config.as_ref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e:#}");
            return ExitCode::from(4);
        }
    };

    let _log_guard = match init_logging(&cli.global, &config.logging) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialise logging: {e:#}");
            return ExitCode::from(1);
        }
    };

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        no_color = cli.global.no_color,
        "wayfare starting"
    );

    let output = OutputManager::new(&cli.global, &config);
    let verbose = cli.global.verbose > 0;
    let color = output.supports_color();

    match run(cli, config, output) {
        Ok(()) => {
            info!("Wayfare completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => handle_error(e, verbose, color),
    }
}

#[instrument(skip_all)]
fn run(cli: Cli, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let config_file = cli.global.config.as_ref();
    match cli.command {
        Commands::Validate(args) => commands::validate::execute(args, config, output),
        Commands::Schema(cmd) => commands::schema::execute(cmd, output),
        Commands::Transitions(args) => commands::transitions::execute(args, output),
        Commands::Signin => commands::signin::execute(output),
        Commands::Init(args) => commands::init::execute(args, config_file, output),
        Commands::Completions(args) => commands::completions::execute(args),
        Commands::Config(cmd) => commands::config::execute(cmd, config, config_file, output),
    }
}

/// Logs the error, prints it to stderr, and picks the exit code.
fn handle_error(err: CliError, verbose: bool, color: bool) -> ExitCode {
    err.log();

    // Written to stderr so the message appears even when stdout is
    // redirected. Colour needs both the user's consent and a TTY.
    let msg = if color && std::io::stderr().is_terminal() {
        err.format_colored(verbose)
    } else {
        err.format_plain(verbose)
    };
    eprint!("{msg}");

    ExitCode::from(err.exit_code())
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_tree_passes_clap_debug_checks() {
        Cli::command().debug_assert();
    }

    #[test]
    fn metadata_comes_from_the_manifest() {
        let command = Cli::command();
        assert_eq!(command.get_version(), Some(env!("CARGO_PKG_VERSION")));
        assert!(command.get_author().is_some());
    }
}
