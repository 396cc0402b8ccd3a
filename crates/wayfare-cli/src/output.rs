//! Terminal output: format resolution, colour, and the batch spinner.

use std::io::{self, IsTerminal};
use std::time::Duration;

use console::Term;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::{OwoColorize, Style};
use serde::Serialize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Every line a command prints goes through here.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        // The flag wins over the config file; Auto then resolves to Human
        // (TTY) or Plain (piped/redirected).
        let requested = match args.output_format {
            OutputFormat::Auto => config.output.format,
            explicit => explicit,
        };
        let resolved_format = match requested {
            OutputFormat::Auto if io::stdout().is_terminal() => OutputFormat::Human,
            OutputFormat::Auto => OutputFormat::Plain,
            explicit => explicit,
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format != OutputFormat::Human,
            term: Term::stdout(),
        }
    }

    /// Writes one line to stdout unless `--quiet` is set.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.badge('\u{2713}', msg, Style::new().green(), false)
    }

    /// Always written, quiet or not.
    pub fn error(&self, msg: &str) -> io::Result<()> {
        self.badge('\u{2717}', msg, Style::new().red(), true)
    }

    pub fn warning(&self, msg: &str) -> io::Result<()> {
        self.badge('\u{26a0}', msg, Style::new().yellow(), false)
    }

    pub fn info(&self, msg: &str) -> io::Result<()> {
        self.badge('\u{2139}', msg, Style::new().blue(), false)
    }

    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        if self.no_color {
            self.term.write_line(text)
        } else {
            self.term.write_line(&text.cyan().bold().to_string())
        }
    }

    /// `<symbol> <msg>`, with the symbol in bold and both in `tint`.
    fn badge(&self, symbol: char, msg: &str, tint: Style, always: bool) -> io::Result<()> {
        if self.quiet && !always {
            return Ok(());
        }
        let line = if self.no_color {
            format!("{symbol} {msg}")
        } else {
            format!("{} {}", symbol.style(tint.bold()), msg.style(tint))
        };
        self.term.write_line(&line)
    }

    /// Pretty-printed JSON document. Written even in quiet mode, since
    /// callers asked for it explicitly.
    pub fn json<T: Serialize + ?Sized>(&self, value: &T) -> io::Result<()> {
        let text = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
        self.term.write_line(&text)
    }

    /// Spinner on stderr for long batches.
    ///
    /// Hidden unless output is for a human on a terminal, so piped and JSON
    /// output stay clean.
    pub fn progress(&self, msg: &'static str) -> ProgressBar {
        if self.quiet
            || self.resolved_format != OutputFormat::Human
            || !io::stderr().is_terminal()
        {
            return ProgressBar::hidden();
        }
        let bar = ProgressBar::new_spinner().with_message(msg);
        bar.set_style(
            ProgressStyle::with_template("{spinner} {msg} {pos}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.enable_steady_tick(Duration::from_millis(100));
        bar
    }

    pub fn supports_color(&self) -> bool {
        !self.no_color
    }

    pub fn is_json(&self) -> bool {
        self.resolved_format == OutputFormat::Json
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
