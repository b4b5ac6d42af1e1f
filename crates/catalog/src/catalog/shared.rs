//! Shared catalog handle with atomic replacement.
//!
//! Readers take a cheap [`Arc`] snapshot and keep using it for as long as they
//! like. A reload builds the new catalog completely before swapping it in, so
//! a reader observes either the old or the new catalog and never a partially
//! built one. A reload that fails validation leaves the current catalog in
//! place.

use std::sync::{Arc, PoisonError, RwLock};

use tracing::{info, warn};

use super::Catalog;
use super::definition::CatalogDefinition;
use crate::common::LoadError;
use crate::config::BuildConfig;

/// Supplier of instruction definitions.
pub trait DefinitionSource {
    /// Produces a complete definition set.
    ///
    /// # Errors
    ///
    /// Implementation-specific; parsing failures map to [`LoadError::Parse`].
    fn load(&self) -> Result<CatalogDefinition, LoadError>;
}

/// Definitions held as JSON text.
#[derive(Clone, Debug)]
pub struct JsonSource {
    text: String,
}

impl JsonSource {
    /// Wraps JSON definition text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl DefinitionSource for JsonSource {
    fn load(&self) -> Result<CatalogDefinition, LoadError> {
        Ok(CatalogDefinition::from_json(&self.text)?)
    }
}

/// Cloneable, thread-safe handle to the current catalog.
#[derive(Clone, Debug)]
pub struct SharedCatalog {
    current: Arc<RwLock<Arc<Catalog>>>,
}

impl SharedCatalog {
    /// Publishes `catalog` as the current catalog.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            current: Arc::new(RwLock::new(Arc::new(catalog))),
        }
    }

    /// The catalog current at the time of the call.
    pub fn snapshot(&self) -> Arc<Catalog> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Publishes `catalog`, returning the one it replaced.
    pub fn replace(&self, catalog: Catalog) -> Arc<Catalog> {
        self.publish(Arc::new(catalog))
    }

    fn publish(&self, next: Arc<Catalog>) -> Arc<Catalog> {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *guard, next)
    }

    /// Loads and validates a new definition set, then publishes it.
    ///
    /// Returns the catalog this call published, even if another writer has
    /// replaced it since.
    ///
    /// # Errors
    ///
    /// Returns the load or build failure; the current catalog is unchanged.
    pub fn reload(
        &self,
        source: &dyn DefinitionSource,
        config: &BuildConfig,
    ) -> Result<Arc<Catalog>, LoadError> {
        let catalog = source
            .load()
            .and_then(|definition| {
                Catalog::from_definition(definition, config).map_err(LoadError::from)
            })
            .inspect_err(|error| warn!(%error, "catalog reload rejected"))?;
        let published = Arc::new(catalog);
        let _previous = self.publish(Arc::clone(&published));
        info!(
            instructions = published.len(),
            "instruction catalog reloaded"
        );
        Ok(published)
    }
}
