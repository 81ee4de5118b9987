//! Filesystem-based message loader.
//!
//! Discovers `<locale>.toml` files under a directory and merges their
//! messages into an [`InMemoryCatalog`], on top of whatever it already
//! holds (normally the built-in tables).
//!
//! # Directory layout expected
//!
//! ```text
//! messages/
//! ├── en.toml      ← overrides for English
//! ├── ne.toml
//! └── extra/
//!     └── fr.toml  ← nested directories are walked too
//! ```
//!
//! # `<locale>.toml` format
//!
//! ```toml
//! [messages]
//! NameRequired = "Please give it a name."
//! OptionMoreThanOne = "Add at least two options."
//! ```
//!
//! Keys that the rule engine never emits are skipped with a warning, so a
//! typo cannot silently shadow nothing.

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info, instrument, warn};
use walkdir::WalkDir;

use coursegate_core::domain::MessageKey;

use super::InMemoryCatalog;

/// Failures that stop a whole load. Single bad files are skipped instead.
#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("messages directory not found: {0}")]
    MissingDirectory(PathBuf),

    #[error("failed to walk '{path}': {reason}")]
    Walk { path: PathBuf, reason: String },

    #[error("failed to update catalog: {0}")]
    Catalog(#[from] coursegate_core::error::CoreError),
}

/// Deserialised representation of a `<locale>.toml` file.
#[derive(Debug, Deserialize)]
struct MessageFile {
    #[serde(default)]
    messages: BTreeMap<String, String>,
}

/// What one [`CatalogLoader::load_into`] call did.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LoadSummary {
    /// Locales with at least one merged message, sorted.
    pub locales: Vec<String>,
    pub merged: usize,
    /// Entries dropped because the key is not a known message key.
    pub unknown_keys: usize,
    /// Files that could not be read or parsed.
    pub skipped_files: usize,
}

/// Loads message overrides from a directory tree.
///
/// ```no_run
/// use coursegate_adapters::catalog::{CatalogLoader, InMemoryCatalog};
///
/// let catalog = InMemoryCatalog::with_builtin()?;
/// let summary = CatalogLoader::new("./messages").load_into(&catalog)?;
/// println!("merged {} messages", summary.merged);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct CatalogLoader {
    dir: PathBuf,
}

impl CatalogLoader {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Merge every `<locale>.toml` under the directory into `catalog`.
    ///
    /// Files are visited in path order, so when two files name the same
    /// locale the later path wins.
    #[instrument(skip(self, catalog), fields(dir = %self.dir.display()))]
    pub fn load_into(&self, catalog: &InMemoryCatalog) -> Result<LoadSummary, LoaderError> {
        if !self.dir.is_dir() {
            return Err(LoaderError::MissingDirectory(self.dir.clone()));
        }

        let mut summary = LoadSummary::default();

        for entry in WalkDir::new(&self.dir).sort_by_file_name() {
            let entry = entry.map_err(|e| LoaderError::Walk {
                path: self.dir.clone(),
                reason: e.to_string(),
            })?;
            let path = entry.path();
            if !entry.file_type().is_file() || path.extension().is_none_or(|ext| ext != "toml") {
                continue;
            }
            let Some(locale) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };

            let file = match read_file(path) {
                Ok(file) => file,
                Err(reason) => {
                    // One bad file must not block the others.
                    warn!(path = %path.display(), %reason, "skipping message file");
                    summary.skipped_files += 1;
                    continue;
                }
            };

            let mut known = Vec::with_capacity(file.messages.len());
            for (key, text) in file.messages {
                if MessageKey::lookup(&key).is_some() {
                    known.push((key, text));
                } else {
                    warn!(path = %path.display(), %key, "unknown message key");
                    summary.unknown_keys += 1;
                }
            }
            if known.is_empty() {
                continue;
            }

            summary.merged += catalog.merge(locale, known)?;
            if !summary.locales.iter().any(|l| l == locale) {
                summary.locales.push(locale.to_owned());
            }
            debug!(path = %path.display(), locale, "loaded message file");
        }

        summary.locales.sort();
        info!(
            merged = summary.merged,
            locales = summary.locales.len(),
            "message overrides loaded"
        );
        Ok(summary)
    }
}

fn read_file(path: &Path) -> Result<MessageFile, String> {
    let raw = fs::read_to_string(path).map_err(|e| e.to_string())?;
    toml::from_str(&raw).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use coursegate_core::{application::ports::MessageCatalog, domain::keys};
    use tempfile::TempDir;

    use super::*;

    fn write(dir: &Path, rel: &str, content: &str) {
        let full = dir.join(rel);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full, content).unwrap();
    }

    #[test]
    fn missing_directory_is_an_error() {
        let loader = CatalogLoader::new("/absolutely/does/not/exist");
        assert!(matches!(
            loader.load_into(&InMemoryCatalog::new()),
            Err(LoaderError::MissingDirectory(_))
        ));
    }

    #[test]
    fn overrides_builtin_text() {
        let temp = TempDir::new().unwrap();
        write(
            temp.path(),
            "en.toml",
            "[messages]\nNameRequired = \"Please give it a name.\"\n",
        );

        let catalog = InMemoryCatalog::with_builtin().unwrap();
        let summary = CatalogLoader::new(temp.path()).load_into(&catalog).unwrap();

        assert_eq!(summary.merged, 1);
        assert_eq!(summary.locales, ["en"]);
        assert_eq!(
            catalog.resolve("en", keys::NAME_REQUIRED).unwrap().as_deref(),
            Some("Please give it a name.")
        );
        // Untouched keys keep their built-in text.
        assert_eq!(
            catalog.resolve("en", keys::VIDEO_REQUIRED).unwrap().as_deref(),
            Some("Video is required.")
        );
    }

    #[test]
    fn walks_nested_directories_and_adds_locales() {
        let temp = TempDir::new().unwrap();
        write(
            temp.path(),
            "extra/fr.toml",
            "[messages]\nNameRequired = \"Le nom est obligatoire.\"\n",
        );

        let catalog = InMemoryCatalog::new();
        let summary = CatalogLoader::new(temp.path()).load_into(&catalog).unwrap();

        assert_eq!(summary.locales, ["fr"]);
        assert_eq!(catalog.locales().unwrap(), ["fr"]);
    }

    #[test]
    fn unknown_keys_are_dropped() {
        let temp = TempDir::new().unwrap();
        write(
            temp.path(),
            "en.toml",
            "[messages]\nNameRequird = \"typo\"\nGroupRequired = \"Pick a group.\"\n",
        );

        let catalog = InMemoryCatalog::new();
        let summary = CatalogLoader::new(temp.path()).load_into(&catalog).unwrap();

        assert_eq!(summary.unknown_keys, 1);
        assert_eq!(summary.merged, 1);
        assert_eq!(catalog.keys("en").unwrap(), ["GroupRequired"]);
    }

    #[test]
    fn malformed_files_are_skipped() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "bad.toml", "[messages\nNameRequired = ");
        write(temp.path(), "ne.toml", "[messages]\nNameRequired = \"नाम चाहिन्छ।\"\n");
        write(temp.path(), "README.md", "not a catalog");

        let catalog = InMemoryCatalog::new();
        let summary = CatalogLoader::new(temp.path()).load_into(&catalog).unwrap();

        assert_eq!(summary.skipped_files, 1);
        assert_eq!(summary.locales, ["ne"]);
    }
}
