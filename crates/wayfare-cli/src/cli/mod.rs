//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "wayfare",
    bin_name = "wayfare",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Validate Wayfare booking-app entities",
    long_about = "Wayfare checks sign-in, review, booking, experience and \
                  support-ticket payloads against their schemas and reports \
                  every violation per field.",
    after_help = "EXAMPLES:\n\
        \x20 wayfare validate booking booking.json\n\
        \x20 wayfare validate support-ticket tickets/ --strict\n\
        \x20 echo '{\"username\":\"jo\",\"password\":\"x\"}' | wayfare validate signin\n\
        \x20 wayfare schema show experience\n\
        \x20 wayfare completions bash > /usr/share/bash-completion/completions/wayfare",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Validate payloads against an entity schema.
    #[command(
        visible_alias = "v",
        about = "Validate payloads against an entity schema",
        after_help = "EXAMPLES:\n\
            \x20 wayfare validate booking booking.json\n\
            \x20 wayfare validate review reviews.toml --fail-fast\n\
            \x20 wayfare validate booking checkout.txt --form\n\
            \x20 wayfare validate signin -  # read JSON from stdin"
    )]
    Validate(ValidateArgs),

    /// Inspect entity schemas.
    #[command(
        about = "Inspect entity schemas",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 wayfare schema list\n\
            \x20 wayfare schema show booking"
    )]
    Schema(SchemaCommands),

    /// Print a status lifecycle table.
    #[command(
        about = "Show allowed status transitions",
        after_help = "EXAMPLES:\n\
            \x20 wayfare transitions booking\n\
            \x20 wayfare transitions ticket --from OPEN\n\
            \x20 wayfare transitions booking --from PENDING --to CONFIRMED"
    )]
    Transitions(TransitionsArgs),

    /// Prompt for sign-in credentials and validate them.
    #[command(about = "Check sign-in credentials interactively")]
    Signin,

    /// Initialise a Wayfare configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 wayfare init                      # default location\n\
            \x20 wayfare --config ./wayfare.toml init\n\
            \x20 wayfare init --force              # overwrite"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 wayfare completions bash > ~/.local/share/bash-completion/completions/wayfare\n\
            \x20 wayfare completions zsh  > ~/.zfunc/_wayfare\n\
            \x20 wayfare completions fish > ~/.config/fish/completions/wayfare.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Wayfare configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 wayfare config get validation.fail_fast\n\
            \x20 wayfare config list\n\
            \x20 wayfare config path"
    )]
    Config(ConfigCommands),
}

// ── validate ──────────────────────────────────────────────────────────────────

/// Arguments for `wayfare validate`.
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Entity kind. Parsed by the core so unknown names get suggestions.
    #[arg(
        value_name = "ENTITY",
        help = "signin, review, booking, experience or support-ticket"
    )]
    pub entity: String,

    /// Files, directories, or `-` for stdin.
    #[arg(
        value_name = "INPUT",
        default_value = "-",
        help = "Payload files or directories (- reads stdin)"
    )]
    pub inputs: Vec<PathBuf>,

    /// Decode inputs as `application/x-www-form-urlencoded` bodies.
    #[arg(long = "form", help = "Read inputs as form-encoded bodies")]
    pub form: bool,

    /// Enable cross-field checks such as ticket closure.
    #[arg(long = "strict", help = "Reject OPEN tickets carrying closure fields")]
    pub strict: bool,

    /// Stop at the first payload that does not validate.
    #[arg(long = "fail-fast", help = "Stop at the first failure")]
    pub fail_fast: bool,
}

// ── schema ────────────────────────────────────────────────────────────────────

/// Subcommands for `wayfare schema`.
#[derive(Debug, Subcommand)]
pub enum SchemaCommands {
    /// List every entity schema.
    #[command(visible_alias = "ls")]
    List,
    /// Show the fields and rules of one entity.
    Show {
        /// Entity name, e.g. `booking`.
        entity: String,
    },
}

// ── transitions ───────────────────────────────────────────────────────────────

/// Arguments for `wayfare transitions`.
#[derive(Debug, Args)]
pub struct TransitionsArgs {
    /// Which lifecycle table to print.
    #[arg(value_enum, help = "Lifecycle to show")]
    pub lifecycle: LifecycleKind,

    /// Show only the moves out of this status.
    #[arg(long = "from", value_name = "STATUS", help = "Starting status")]
    pub from: Option<String>,

    /// Check a single move instead of printing the table.
    #[arg(
        long = "to",
        value_name = "STATUS",
        requires = "from",
        help = "Target status to check"
    )]
    pub to: Option<String>,
}

/// Entities that carry a status lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LifecycleKind {
    Booking,
    #[value(alias = "support-ticket")]
    Ticket,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `wayfare init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `wayfare completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `wayfare config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `validation.fail_fast`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
