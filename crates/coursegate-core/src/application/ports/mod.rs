//! Driven (output) ports - implemented by infrastructure.
//!
//! The `coursegate-adapters` crate provides implementations.

use crate::domain::MessageKey;
use crate::error::CoreResult;

/// Port for turning message keys into localized text.
///
/// Implemented by:
/// - `coursegate_adapters::catalog::InMemoryCatalog` (built-in tables, plus
///   anything `CatalogLoader` merges in from disk)
///
/// Lookups never fall back to another locale; that policy belongs to
/// [`ValidationService`](crate::application::ValidationService).
#[cfg_attr(test, mockall::automock)]
pub trait MessageCatalog: Send + Sync {
    /// Text for `key` in `locale`, if the catalog has one.
    fn resolve(&self, locale: &str, key: MessageKey) -> CoreResult<Option<String>>;

    /// Locales with at least one message, sorted.
    fn locales(&self) -> CoreResult<Vec<String>>;

    /// Keys translated in `locale`, sorted.
    fn keys(&self, locale: &str) -> CoreResult<Vec<String>>;
}
