// src/core/fuo_url.rs

//! The `fuo://` addressing scheme for library entities.
//!
//! Every entity is named by `fuo://{provider}/{namespace}/{identifier}`, where
//! the namespace is fixed per entity type (`songs`, `artists`, ...). Decoding
//! validates the provider against the registry at call time.

use crate::core::FuoError;
use crate::core::library::{Model, ProviderRegistry};
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;
use tracing::debug;

pub const URL_SCHEME: &str = "fuo";

/// The kinds of library entity a URL can name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum EntityType {
    Song,
    Artist,
    Album,
    Playlist,
    User,
    Lyric,
}

impl EntityType {
    /// The URL path segment for this type.
    pub fn namespace(self) -> &'static str {
        match self {
            EntityType::Song => "songs",
            EntityType::Artist => "artists",
            EntityType::Album => "albums",
            EntityType::Playlist => "playlists",
            EntityType::User => "users",
            EntityType::Lyric => "lyrics",
        }
    }

    pub fn from_namespace(namespace: &str) -> Option<Self> {
        EntityType::iter().find(|t| t.namespace() == namespace)
    }

    pub fn name(self) -> &'static str {
        match self {
            EntityType::Song => "song",
            EntityType::Artist => "artist",
            EntityType::Album => "album",
            EntityType::Playlist => "playlist",
            EntityType::User => "user",
            EntityType::Lyric => "lyric",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EntityType {
    type Err = FuoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EntityType::iter()
            .find(|t| t.name() == s)
            .ok_or_else(|| FuoError::Internal(format!("unknown entity type '{s}'")))
    }
}

/// A reference to one entity of one provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntityRef {
    pub provider_id: String,
    pub entity_type: EntityType,
    pub identifier: String,
}

impl EntityRef {
    pub fn new(
        provider_id: impl Into<String>,
        entity_type: EntityType,
        identifier: impl Into<String>,
    ) -> Self {
        Self {
            provider_id: provider_id.into(),
            entity_type,
            identifier: identifier.into(),
        }
    }

    pub fn to_url(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for EntityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}://{}/{}/{}",
            URL_SCHEME,
            self.provider_id,
            self.entity_type.namespace(),
            self.identifier
        )
    }
}

/// Returns the URL naming `entity`.
pub fn encode(entity: &EntityRef) -> String {
    entity.to_url()
}

/// Returns the URL naming a live model.
pub fn encode_model(model: &dyn Model) -> String {
    model.entity_ref().to_url()
}

/// Parses `url` into an `EntityRef`, accepting only providers the registry
/// currently knows about.
pub fn decode(url: &str, registry: &dyn ProviderRegistry) -> Result<EntityRef, FuoError> {
    // Provider ids are opaque registry keys, not hostnames, so only the
    // scheme is checked before matching against the registry.
    if url.split_once("://").map(|(scheme, _)| scheme) != Some(URL_SCHEME) {
        return Err(FuoError::InvalidUrl(format!(
            "{url}: scheme must be '{URL_SCHEME}'"
        )));
    }

    let providers: Vec<String> = registry
        .list_providers()
        .into_iter()
        .filter(|id| !id.is_empty())
        .collect();
    if providers.is_empty() {
        return Err(FuoError::InvalidUrl(format!("{url}: no providers registered")));
    }

    let pattern = url_pattern(&providers)?;
    let caps = pattern
        .captures(url)
        .ok_or_else(|| FuoError::InvalidUrl(url.to_string()))?;

    let namespace = &caps[2];
    let entity_type = EntityType::from_namespace(namespace)
        .ok_or_else(|| FuoError::InvalidUrl(format!("{url}: unknown namespace '{namespace}'")))?;

    Ok(EntityRef::new(&caps[1], entity_type, &caps[3]))
}

/// Decodes `url` and loads the entity it names.
///
/// A malformed URL fails with `InvalidUrl`; a well-formed URL whose entity
/// cannot be loaded fails with `EntityNotFound`.
pub fn resolve(url: &str, registry: &dyn ProviderRegistry) -> Result<Arc<dyn Model>, FuoError> {
    let entity = decode(url, registry)?;
    let provider = registry
        .get_provider(&entity.provider_id)
        .ok_or_else(|| FuoError::ProviderNotFound(entity.provider_id.clone()))?;
    let class = provider.model_class(entity.entity_type).ok_or_else(|| {
        FuoError::UnsupportedEntityType {
            provider: entity.provider_id.clone(),
            entity_type: entity.entity_type,
        }
    })?;
    debug!("Loading {} from provider '{}'", entity, provider.name());
    class
        .load(&entity.identifier)
        .map_err(|e| FuoError::EntityNotFound {
            url: url.to_string(),
            reason: e.to_string(),
        })
}

/// Builds `^fuo://(p1|p2|...)/(songs|artists|...)/(\w+)$` for the given providers.
fn url_pattern(providers: &[String]) -> Result<Regex, FuoError> {
    let sources = providers
        .iter()
        .map(|p| regex::escape(p))
        .collect::<Vec<_>>()
        .join("|");
    let namespaces = EntityType::iter()
        .map(|t| t.namespace())
        .collect::<Vec<_>>()
        .join("|");
    Ok(Regex::new(&format!(
        r"^{URL_SCHEME}://({sources})/({namespaces})/(\w+)$"
    ))?)
}
