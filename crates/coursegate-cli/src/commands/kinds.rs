//! Implementation of the `coursegate kinds` command.

use coursegate_core::application::ValidatorRegistry;

use crate::{
    cli::{KindsArgs, KindsStyle},
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: KindsArgs, output: OutputManager) -> CliResult<()> {
    let kinds = ValidatorRegistry::standard()?.describe();

    match args.style {
        KindsStyle::Table => {
            output.header("Request kinds:")?;
            for info in &kinds {
                let sets = if info.rule_sets.is_empty() {
                    "-".to_owned()
                } else {
                    info.rule_sets.join(", ")
                };
                output.print(&format!("  {:<24} {}", info.kind.as_str(), sets))?;
            }
        }
        KindsStyle::List => {
            for info in &kinds {
                output.line(info.kind.as_str())?;
            }
        }
        // JSON goes out even in quiet mode so pipes always get something parseable.
        KindsStyle::Json => output.json(&kinds)?,
    }

    Ok(())
}
