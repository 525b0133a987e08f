// src/core/library/registry.rs

use super::{Provider, ProviderRegistry};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::sync::Arc;
use tracing::{debug, warn};

/// An in-memory `ProviderRegistry`.
///
/// Providers may be registered and removed at any time; lookups always see the
/// current set, so a freshly registered provider is addressable immediately.
#[derive(Default)]
pub struct Library {
    providers: DashMap<String, Arc<dyn Provider>>,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a provider. Returns false and leaves the registry untouched if a
    /// provider with the same id already exists.
    pub fn register(&self, provider: Arc<dyn Provider>) -> bool {
        let id = provider.id().to_string();
        if id.is_empty() {
            warn!("Refusing to register a provider with an empty id.");
            return false;
        }
        match self.providers.entry(id) {
            Entry::Occupied(entry) => {
                warn!("Provider '{}' is already registered.", entry.key());
                false
            }
            Entry::Vacant(entry) => {
                debug!("Registered provider '{}'.", entry.key());
                entry.insert(provider);
                true
            }
        }
    }

    pub fn deregister(&self, id: &str) -> Option<Arc<dyn Provider>> {
        self.providers.remove(id).map(|(_, provider)| provider)
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl ProviderRegistry for Library {
    fn list_providers(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.providers.iter().map(|e| e.key().clone()).collect();
        ids.sort();
        ids
    }

    fn get_provider(&self, id: &str) -> Option<Arc<dyn Provider>> {
        self.providers.get(id).map(|e| e.value().clone())
    }
}
