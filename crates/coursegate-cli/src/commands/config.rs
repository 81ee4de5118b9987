//! `coursegate config`: show the settings the other commands will use.

use std::path::PathBuf;

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Every key `config get` answers for. Unset optional keys print empty.
const KEYS: &[&str] = &[
    "locale.default",
    "locale.fallback",
    "catalog.directory",
    "output.format",
    "output.no_color",
];

pub fn execute(
    cmd: ConfigCommands,
    config_file: Option<&PathBuf>,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => output.line(&get_config_value(&config, &key)?)?,
        ConfigCommands::List => {
            output.header("Effective configuration:")?;
            output.line(to_toml(&config)?.trim_end())?;
        }
        ConfigCommands::Path => output.line(&AppConfig::active_path(config_file).display().to_string())?,
    }
    Ok(())
}

fn to_toml(config: &AppConfig) -> CliResult<String> {
    toml::to_string_pretty(config).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    })
}

/// Look `key` up as a dotted path through the serialised config.
fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    if !KEYS.contains(&key) {
        return Err(CliError::ConfigError {
            message: format!("Unknown config key '{key}' (known: {})", KEYS.join(", ")),
            source: None,
        });
    }

    let table = toml::Value::try_from(config).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    })?;

    let found = key.split('.').try_fold(&table, |node, part| node.get(part));
    Ok(match found {
        Some(toml::Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_keys_resolve() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "locale.default").unwrap(), "en");
        assert_eq!(get_config_value(&cfg, "output.format").unwrap(), "auto");
        assert_eq!(get_config_value(&cfg, "output.no_color").unwrap(), "false");
    }

    #[test]
    fn unset_directory_prints_empty() {
        assert_eq!(get_config_value(&AppConfig::default(), "catalog.directory").unwrap(), "");

        let mut cfg = AppConfig::default();
        cfg.catalog.directory = Some(PathBuf::from("messages"));
        assert_eq!(get_config_value(&cfg, "catalog.directory").unwrap(), "messages");
    }

    #[test]
    fn unknown_key_is_a_config_error() {
        let err = get_config_value(&AppConfig::default(), "locale").unwrap_err();
        assert!(matches!(err, CliError::ConfigError { .. }));
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn every_key_is_in_the_listing() {
        let listing = to_toml(&AppConfig::default()).unwrap();
        for key in KEYS.iter().filter(|k| **k != "catalog.directory") {
            let leaf = key.rsplit('.').next().unwrap();
            assert!(listing.contains(leaf), "{key}");
        }
    }
}
