//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and handed to commands by value.
//! The libraries never read it.
//!
//! # Precedence, highest first
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `COURSEGATE_<SECTION>__<KEY>`, e.g.
//!    `COURSEGATE_LOCALE__DEFAULT=ne` (`.env` is loaded first)
//! 3. Config file (`--config`, or [`AppConfig::config_path`])
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

use coursegate_core::application::services::DEFAULT_FALLBACK_LOCALE;

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "COURSEGATE";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Message locales.
    pub locale: LocaleConfig,
    /// Where message overrides live.
    #[serde(default)]
    pub catalog: CatalogConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocaleConfig {
    /// Locale used when `--locale` is not given.
    pub default: String,
    /// Locale tried when the requested one has no text for a key.
    pub fallback: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Directory of `<locale>.toml` files merged over the built-in messages.
    pub directory: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
    /// `auto`, `human`, `plain` or `json`.
    pub format: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            locale: LocaleConfig {
                default: DEFAULT_FALLBACK_LOCALE.into(),
                fallback: DEFAULT_FALLBACK_LOCALE.into(),
            },
            catalog: CatalogConfig::default(),
            output: OutputConfig {
                no_color: false,
                format: "auto".into(),
            },
        }
    }
}

impl AppConfig {
    /// Load configuration from every layer.
    ///
    /// `config_file` is the path the user passed via `--config` (or `None`
    /// to use the default location). A missing file is not an error.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        Self::build(&Self::active_path(config_file), Environment::with_prefix(ENV_PREFIX))
    }

    /// Layer defaults, `path` and `env`, in that order.
    fn build(path: &Path, env: Environment) -> anyhow::Result<Self> {
        let defaults = Self::default();
        debug!(path = %path.display(), exists = path.exists(), "loading configuration");

        let config = Config::builder()
            .set_default("locale.default", defaults.locale.default)?
            .set_default("locale.fallback", defaults.locale.fallback)?
            .set_default("output.no_color", defaults.output.no_color)?
            .set_default("output.format", defaults.output.format)?
            .add_source(File::from(path).format(FileFormat::Toml).required(false))
            .add_source(
                env.prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("Failed to read configuration from '{}'", path.display()))?;

        config
            .try_deserialize()
            .context("Configuration has invalid values")
    }

    /// The per-user config file, or `.coursegate.toml` when the platform has
    /// no home directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "coursegate", "coursegate")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".coursegate.toml"))
    }

    /// Path of the file this process reads: `--config` or the default.
    pub fn active_path(config_file: Option<&PathBuf>) -> PathBuf {
        config_file.cloned().unwrap_or_else(Self::config_path)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use tempfile::TempDir;

    use super::*;

    fn env(vars: &[(&str, &str)]) -> Environment {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        Environment::with_prefix(ENV_PREFIX).source(Some(map))
    }

    #[test]
    fn default_locale_is_english() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.locale.default, "en");
        assert_eq!(cfg.locale.fallback, "en");
    }

    #[test]
    fn missing_file_returns_defaults() {
        let temp = TempDir::new().unwrap();
        let cfg = AppConfig::build(&temp.path().join("none.toml"), env(&[])).unwrap();
        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn file_overrides_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(
            &path,
            "[locale]\ndefault = \"ne\"\n\n[catalog]\ndirectory = \"/srv/messages\"\n",
        )
        .unwrap();

        let cfg = AppConfig::build(&path, env(&[])).unwrap();
        assert_eq!(cfg.locale.default, "ne");
        assert_eq!(cfg.locale.fallback, "en");
        assert_eq!(cfg.catalog.directory, Some(PathBuf::from("/srv/messages")));
    }

    #[test]
    fn environment_overrides_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[locale]\ndefault = \"ne\"\n").unwrap();

        let cfg = AppConfig::build(
            &path,
            env(&[
                ("COURSEGATE_LOCALE__DEFAULT", "fr"),
                ("COURSEGATE_OUTPUT__NO_COLOR", "true"),
            ]),
        )
        .unwrap();
        assert_eq!(cfg.locale.default, "fr");
        assert!(cfg.output.no_color);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[locale\ndefault = ").unwrap();

        assert!(AppConfig::build(&path, env(&[])).is_err());
    }

    #[test]
    fn defaults_round_trip_through_toml() {
        let text = toml::to_string_pretty(&AppConfig::default()).unwrap();
        let back: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(back, AppConfig::default());
    }
}
