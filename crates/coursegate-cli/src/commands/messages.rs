//! Implementation of the `coursegate messages` command.

use std::collections::BTreeMap;

use coursegate_core::{application::MessageCatalog, domain::keys};

use crate::{
    cli::{MessagesArgs, OutputFormat},
    commands::{build_service, load_catalog},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: MessagesArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let locale = args.locale.as_deref().unwrap_or(&config.locale.default);

    if args.missing {
        let missing = build_service(&config)?.coverage(locale)?;
        let names: Vec<_> = missing.iter().map(|k| k.as_str()).collect();
        if output.format() == OutputFormat::Json {
            return output.json(&names);
        }
        if names.is_empty() {
            output.success(&format!("every message has '{locale}' text"))?;
        }
        for name in names {
            output.line(name)?;
        }
        return Ok(());
    }

    let catalog = load_catalog(&config)?;
    let mut entries = BTreeMap::new();
    for key in keys::ALL {
        if let Some(text) = catalog.resolve(locale, *key)? {
            entries.insert(key.as_str(), text);
        }
    }

    if output.format() == OutputFormat::Json {
        return output.json(&entries);
    }
    if entries.is_empty() {
        let known = catalog.locales()?.join(", ");
        output.warning(&format!("no messages for locale '{locale}' (known: {known})"))?;
        return Ok(());
    }
    output.header(&format!("Messages ({locale}):"))?;
    for (key, text) in entries {
        output.line(&format!("{key} = {text}"))?;
    }
    Ok(())
}
