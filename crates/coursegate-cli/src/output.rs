//! Terminal output: result lines, status marks and JSON.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;
use crate::error::{CliError, CliResult};

/// Writes command results to stdout in the resolved format.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        Self {
            resolved_format: resolve_format(args.output_format, &config.output.format, io::stdout().is_terminal()),
            quiet: args.quiet,
            no_color: args.no_color || config.output.no_color,
            term: Term::stdout(),
        }
    }

    /// Chatter; dropped under `--quiet`.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// A result line. Always written, so `--quiet` still yields the answer.
    pub fn line(&self, msg: &str) -> io::Result<()> {
        self.term.write_line(msg)
    }

    /// Pretty-printed JSON, always written.
    pub fn json<T: Serialize>(&self, value: &T) -> CliResult<()> {
        let text = serde_json::to_string_pretty(value).map_err(|e| CliError::InvalidInput {
            message: format!("Failed to serialise output: {e}"),
            source: Some(Box::new(e)),
        })?;
        Ok(self.line(&text)?)
    }

    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.marked(Tone::Success, msg)
    }

    /// Written even under `--quiet`.
    pub fn error(&self, msg: &str) -> io::Result<()> {
        self.marked(Tone::Error, msg)
    }

    pub fn warning(&self, msg: &str) -> io::Result<()> {
        self.marked(Tone::Warning, msg)
    }

    pub fn info(&self, msg: &str) -> io::Result<()> {
        self.marked(Tone::Info, msg)
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

    /// The resolved format; never `Auto`.
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }

    fn marked(&self, tone: Tone, msg: &str) -> io::Result<()> {
        if self.quiet && tone != Tone::Error {
            return Ok(());
        }
        let mark = tone.mark();
        let line = if self.no_color {
            format!("{mark} {msg}")
        } else {
            match tone {
                Tone::Success => format!("{} {}", mark.green().bold(), msg.green()),
                Tone::Error => format!("{} {}", mark.red().bold(), msg.red()),
                Tone::Warning => format!("{} {}", mark.yellow().bold(), msg.yellow()),
                Tone::Info => format!("{} {}", mark.blue().bold(), msg),
            }
        };
        self.term.write_line(&line)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tone {
    Success,
    Error,
    Warning,
    Info,
}

impl Tone {
    const fn mark(self) -> &'static str {
        match self {
            Self::Success => "\u{2713}",
            Self::Error => "\u{2717}",
            Self::Warning => "\u{26a0}",
            Self::Info => "\u{2139}",
        }
    }
}

/// Flag first, then `output.format`, then TTY detection.
fn resolve_format(flag: OutputFormat, configured: &str, stdout_is_tty: bool) -> OutputFormat {
    let chosen = match flag {
        OutputFormat::Auto => configured.parse().unwrap_or(OutputFormat::Auto),
        explicit => explicit,
    };
    match chosen {
        OutputFormat::Auto if stdout_is_tty => OutputFormat::Human,
        OutputFormat::Auto => OutputFormat::Plain,
        resolved => resolved,
    }
}
