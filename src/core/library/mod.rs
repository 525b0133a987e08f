// src/core/library/mod.rs

//! The content-provider abstraction consulted when resolving `fuo://` URLs.
//!
//! Concrete providers (local files, streaming services) live in the host
//! application. The protocol layer only needs to enumerate provider ids, look a
//! provider up, and ask it to load an entity by identifier.

use crate::core::fuo_url::{EntityRef, EntityType};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

mod registry;

pub use registry::Library;

/// Failures a `ModelClass` reports when loading an entity.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LoadError {
    #[error("entity not found: {identifier}")]
    NotFound { identifier: String },
    #[error("{message}")]
    Other { message: String },
}

/// A live library object (song, artist, album, ...) owned by a provider.
pub trait Model: Send + Sync + fmt::Debug {
    /// The id of the provider the model came from.
    fn source(&self) -> &str;

    fn entity_type(&self) -> EntityType;

    /// The provider-scoped primary key.
    fn identifier(&self) -> &str;

    /// The addressable reference for this model.
    fn entity_ref(&self) -> EntityRef {
        EntityRef::new(self.source(), self.entity_type(), self.identifier())
    }
}

/// Loads models of a single entity type for one provider.
pub trait ModelClass: Send + Sync {
    fn load(&self, identifier: &str) -> Result<Arc<dyn Model>, LoadError>;
}

/// A pluggable content source.
pub trait Provider: Send + Sync {
    /// Stable provider identifier (e.g., "local" or "netease").
    fn id(&self) -> &str;

    /// Human-friendly provider name.
    fn name(&self) -> &str {
        self.id()
    }

    /// The model class serving `entity_type`, if the provider supports it.
    fn model_class(&self, entity_type: EntityType) -> Option<Arc<dyn ModelClass>>;
}

/// The set of providers currently known to the application.
pub trait ProviderRegistry: Send + Sync {
    fn list_providers(&self) -> Vec<String>;

    fn get_provider(&self, id: &str) -> Option<Arc<dyn Provider>>;
}
