//! Command handlers, one module per subcommand.

pub mod completions;
pub mod config;
pub mod init;
pub mod kinds;
pub mod messages;
pub mod validate;

use std::sync::Arc;

use tracing::{debug, instrument};

use coursegate_adapters::{CatalogLoader, InMemoryCatalog};
use coursegate_core::application::{ValidationService, ValidatorRegistry};

use crate::{config::AppConfig, error::CliResult};

/// Built-in messages plus whatever `catalog.directory` adds.
#[instrument(skip_all)]
pub(crate) fn load_catalog(config: &AppConfig) -> CliResult<InMemoryCatalog> {
    let catalog = InMemoryCatalog::with_builtin()?;
    if let Some(dir) = &config.catalog.directory {
        let summary = CatalogLoader::new(dir).load_into(&catalog)?;
        debug!(?summary, "applied message overrides");
    }
    Ok(catalog)
}

/// The standard registry behind a localizing service.
pub(crate) fn build_service(config: &AppConfig) -> CliResult<ValidationService> {
    let registry = Arc::new(ValidatorRegistry::standard()?);
    let catalog = Arc::new(load_catalog(config)?);
    Ok(ValidationService::new(registry, catalog).with_fallback_locale(config.locale.fallback.clone()))
}
