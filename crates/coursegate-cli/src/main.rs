//! `coursegate`: check learning-platform request payloads from the shell.
//!
//! `main` reads `.env`, parses arguments, installs logging and loads
//! settings before handing off to a command. Failures come back as
//! [`CliError`] and pick the exit status.
//!
//! ## Exit codes
//!
//! - `0` the request passed, or the command succeeded
//! - `1` internal or I/O failure
//! - `2` rejected request, unreadable payload or bad argument
//! - `3` input file not found
//! - `4` configuration or message catalog problem

use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, instrument};

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
    // RUST_LOG and COURSEGATE_* may come from .env; it is optional.
    let _ = dotenvy::dotenv();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version land here as well, with status 0.
            let _ = e.print();
            return ExitCode::from(u8::try_from(e.exit_code()).unwrap_or(2));
        }
    };

    if let Err(e) = init_logging(&cli.global) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }

    debug!(version = coursegate_core::VERSION, "coursegate starting");

    let config = match AppConfig::load(cli.global.config.as_ref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            return handle_error(
                CliError::ConfigError {
                    message: format!("{e:#}"),
                    source: None,
                },
                cli.global.verbose > 0,
            );
        }
    };

    let output = OutputManager::new(&cli.global, &config);
    let verbose = cli.global.verbose > 0;

    match run(cli, config, output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => handle_error(e, verbose),
    }
}

#[instrument(skip_all)]
fn run(cli: Cli, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let config_file = cli.global.config.as_ref();
    match cli.command {
        Commands::Validate(args) => commands::validate::execute(args, config, output),
        Commands::Kinds(args) => commands::kinds::execute(args, output),
        Commands::Messages(args) => commands::messages::execute(args, config, output),
        Commands::Init(args) => commands::init::execute(args, config_file, output),
        Commands::Completions(args) => commands::completions::execute(args),
        Commands::Config(cmd) => commands::config::execute(cmd, config_file, config, output),
    }
}

/// Report `err` on stderr and turn it into the process exit status.
fn handle_error(err: CliError, verbose: bool) -> ExitCode {
    err.log();

    // A rejected request has already printed its errors; the summary line
    // is enough.
    if let CliError::Rejected { .. } = err {
        eprintln!("{err}");
        return ExitCode::from(err.exit_code());
    }

    let msg = if std::io::IsTerminal::is_terminal(&std::io::stderr()) {
        err.format_colored(verbose)
    } else {
        err.format_plain(verbose)
    };
    eprint!("{msg}");

    ExitCode::from(err.exit_code())
}
