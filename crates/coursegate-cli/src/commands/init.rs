//! `coursegate init`: create a default configuration file.

use std::path::PathBuf;

use crate::{
    cli::InitArgs,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Write the built-in defaults to the active configuration path.
pub fn execute(args: InitArgs, config_file: Option<&PathBuf>, output: OutputManager) -> CliResult<()> {
    let config_path = AppConfig::active_path(config_file);
    output.info(&format!("Writing default settings to {}", config_path.display()))?;

    if config_path.exists() && !args.force {
        output.warning("A config file is already there; pass --force to replace it")?;
        return Ok(());
    }

    let toml = toml::to_string_pretty(&AppConfig::default()).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise default config: {e}"),
        source: Some(Box::new(e)),
    })?;

    if let Some(parent) = config_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_cli_context(|| format!("Failed to create config directory '{}'", parent.display()))?;
    }

    std::fs::write(&config_path, &toml)
        .with_cli_context(|| format!("Failed to write config to '{}'", config_path.display()))?;

    output.success("Configuration written")?;
    Ok(())
}
