//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only ever sees the
//! [`ValidationOptions`] derived from it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `WAYFARE__SECTION__KEY`, e.g.
//!    `WAYFARE__VALIDATION__FAIL_FAST=true`
//! 3. Config file (`--config`, or the platform config directory)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

use wayfare_core::domain::ValidationOptions;

use crate::cli::OutputFormat;

/// Prefix of environment overrides.
pub const ENV_PREFIX: &str = "WAYFARE";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Validation defaults; CLI flags can only switch these on.
    pub validation: ValidationConfig,
    /// Output settings.
    pub output: OutputConfig,
    /// Log file settings.
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    pub enforce_ticket_closure: bool,
    pub fail_fast: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    /// Used when `--output-format` is left at `auto`.
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// JSON log file, written alongside the stderr output.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration: defaults, then the config file, then environment.
    ///
    /// `config_file` is the path the user passed via `--config`, or `None`
    /// to use [`Self::config_path`]. A missing file is not an error, so
    /// `wayfare init` can create it.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        Self::load_from(
            &Self::active_path(config_file),
            Environment::with_prefix(ENV_PREFIX),
        )
    }

    fn load_from(path: &Path, env: Environment) -> anyhow::Result<Self> {
        debug!(path = %path.display(), exists = path.exists(), "Loading configuration");

        Config::builder()
            .add_source(
                File::from(path)
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(env.separator("__").try_parsing(true))
            .build()
            .with_context(|| format!("Failed to read configuration from {}", path.display()))?
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.wayfare.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "wayfare", "wayfare")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".wayfare.toml"))
    }

    /// The path actually used for this run.
    pub fn active_path(config_file: Option<&PathBuf>) -> PathBuf {
        config_file.cloned().unwrap_or_else(Self::config_path)
    }

    /// Options handed to the core, with `strict` able to switch checks on.
    pub fn validation_options(&self, strict: bool) -> ValidationOptions {
        ValidationOptions {
            enforce_ticket_closure: strict || self.validation.enforce_ticket_closure,
        }
    }
}
