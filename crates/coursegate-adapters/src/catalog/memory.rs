//! In-memory message catalog with built-in tables.

use std::{
    collections::HashMap,
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use coursegate_core::{
    application::{ApplicationError, ports::MessageCatalog},
    domain::MessageKey,
    error::CoreResult,
};
use tracing::debug;

use crate::builtin_messages;

type Tables = HashMap<String, HashMap<String, String>>;

/// Thread-safe in-memory catalog, keyed by locale then message key.
#[derive(Clone, Default)]
pub struct InMemoryCatalog {
    inner: Arc<RwLock<Tables>>,
}

impl InMemoryCatalog {
    /// Create a new empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog with the built-in tables loaded.
    pub fn with_builtin() -> CoreResult<Self> {
        let catalog = Self::new();
        catalog.load_builtin()?;
        Ok(catalog)
    }

    /// Load the built-in tables, replacing any entries they cover.
    pub fn load_builtin(&self) -> CoreResult<()> {
        for (locale, table) in builtin_messages::all_tables() {
            self.merge(
                locale,
                table.iter().map(|(key, text)| (key.as_str().to_owned(), (*text).to_owned())),
            )?;
        }
        Ok(())
    }

    /// Set the text for one key.
    pub fn insert(&self, locale: &str, key: MessageKey, text: impl Into<String>) -> CoreResult<()> {
        self.write()?
            .entry(locale.to_owned())
            .or_default()
            .insert(key.as_str().to_owned(), text.into());
        Ok(())
    }

    /// Merge `entries` into `locale`, overwriting existing text.
    ///
    /// Returns how many entries were merged.
    pub fn merge(
        &self,
        locale: &str,
        entries: impl IntoIterator<Item = (String, String)>,
    ) -> CoreResult<usize> {
        let mut inner = self.write()?;
        let table = inner.entry(locale.to_owned()).or_default();
        let before = table.len();
        let mut merged = 0;
        for (key, text) in entries {
            table.insert(key, text);
            merged += 1;
        }
        debug!(locale, merged, added = table.len() - before, "merged messages");
        Ok(merged)
    }

    /// Number of messages across all locales.
    pub fn len(&self) -> CoreResult<usize> {
        Ok(self.read()?.values().map(HashMap::len).sum())
    }

    pub fn is_empty(&self) -> CoreResult<bool> {
        Ok(self.len()? == 0)
    }

    fn read(&self) -> CoreResult<RwLockReadGuard<'_, Tables>> {
        self.inner.read().map_err(|_| lock_error())
    }

    fn write(&self) -> CoreResult<RwLockWriteGuard<'_, Tables>> {
        self.inner.write().map_err(|_| lock_error())
    }
}

fn lock_error() -> coursegate_core::error::CoreError {
    ApplicationError::CatalogUnavailable {
        reason: "catalog lock poisoned".into(),
    }
    .into()
}

impl MessageCatalog for InMemoryCatalog {
    fn resolve(&self, locale: &str, key: MessageKey) -> CoreResult<Option<String>> {
        Ok(self
            .read()?
            .get(locale)
            .and_then(|table| table.get(key.as_str()))
            .cloned())
    }

    fn locales(&self) -> CoreResult<Vec<String>> {
        let mut locales: Vec<String> = self
            .read()?
            .iter()
            .filter(|(_, table)| !table.is_empty())
            .map(|(locale, _)| locale.clone())
            .collect();
        locales.sort();
        Ok(locales)
    }

    fn keys(&self, locale: &str) -> CoreResult<Vec<String>> {
        let mut keys: Vec<String> = self
            .read()?
            .get(locale)
            .map(|table| table.keys().cloned().collect())
            .unwrap_or_default();
        keys.sort();
        Ok(keys)
    }
}
