//! Implementation of the `coursegate validate` command.
//!
//! Responsibility: read the payload, hand it to the validation service and
//! display the report. No rules live here.

use std::io::Read as _;
use std::path::Path;

use serde_json::Value;
use tracing::{info, instrument};

use coursegate_core::application::ValidationReport;

use crate::{
    cli::{OutputFormat, ValidateArgs},
    commands::build_service,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

#[instrument(skip_all, fields(kind = %args.kind))]
pub fn execute(args: ValidateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let payload = parse_payload(&read_input(&args.input)?)?;
    let locale = args.locale.as_deref().unwrap_or(&config.locale.default);

    let service = build_service(&config)?;
    let report = service.check(args.kind, &payload, args.rule_set.as_deref(), locale)?;
    info!(accepted = report.is_accepted(), "validation finished");

    render(&report, args.kind.as_str(), &output)?;

    match report {
        ValidationReport::Accepted => Ok(()),
        ValidationReport::Rejected(errors) => Err(CliError::Rejected {
            kind: args.kind,
            errors: errors.len(),
        }),
    }
}

fn read_input(input: &Path) -> CliResult<String> {
    if input.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .with_cli_context(|| "Failed to read payload from stdin")?;
        return Ok(text);
    }
    if !input.exists() {
        return Err(CliError::InputNotFound {
            path: input.to_path_buf(),
        });
    }
    std::fs::read_to_string(input)
        .with_cli_context(|| format!("Failed to read '{}'", input.display()))
}

fn parse_payload(text: &str) -> CliResult<Value> {
    serde_json::from_str(text).map_err(|e| CliError::InvalidInput {
        message: format!("payload is not valid JSON ({e})"),
        source: Some(Box::new(e)),
    })
}

fn render(report: &ValidationReport, kind: &str, output: &OutputManager) -> CliResult<()> {
    match output.format() {
        OutputFormat::Json => output.json(report)?,
        OutputFormat::Human => match report {
            ValidationReport::Accepted => output.success(&format!("{kind} request is valid"))?,
            ValidationReport::Rejected(errors) => {
                for e in errors {
                    output.error(&format!("{}: {}", e.field, e.message))?;
                }
            }
        },
        OutputFormat::Plain | OutputFormat::Auto => match report {
            ValidationReport::Accepted => output.print("valid")?,
            ValidationReport::Rejected(errors) => {
                for e in errors {
                    output.line(&format!("{}: {}", e.field, e.message))?;
                }
            }
        },
    }
    Ok(())
}
