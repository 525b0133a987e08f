// src/core/errors.rs

//! Defines the primary error type for the protocol layer.

use crate::core::fuo_url::EntityType;
use std::sync::Arc;
use thiserror::Error;

/// The main error enum, representing all failures the protocol layer can surface.
#[derive(Error, Debug)]
pub enum FuoError {
    #[error("IO Error: {0}")]
    Io(Arc<std::io::Error>),

    /// The received line contained no tokens at all.
    #[error("Empty command")]
    EmptyCommand,

    /// The first token of the line is not a usable action name.
    #[error("Invalid action '{0}'")]
    InvalidAction(String),

    #[error("Unknown command '{0}'")]
    UnknownCommand(String),

    /// The string is not a well-formed `fuo://` URL for a known provider.
    #[error("Invalid url: {0}")]
    InvalidUrl(String),

    #[error("Provider '{0}' not found")]
    ProviderNotFound(String),

    #[error("Provider '{provider}' has no model for entity type '{entity_type}'")]
    UnsupportedEntityType {
        provider: String,
        entity_type: EntityType,
    },

    /// The URL was valid but the provider could not load the entity.
    #[error("Entity not found: {url} ({reason})")]
    EntityNotFound { url: String, reason: String },

    #[error("Handler Error: {0}")]
    Handler(String),

    #[error("Internal Error: {0}")]
    Internal(String),
}

impl FuoError {
    /// True for the failures produced by `Command::parse`.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, FuoError::EmptyCommand | FuoError::InvalidAction(_))
    }
}

// `std::io::Error` is not cloneable, so the variant holds it behind an Arc.
impl Clone for FuoError {
    fn clone(&self) -> Self {
        match self {
            FuoError::Io(e) => FuoError::Io(Arc::clone(e)),
            FuoError::EmptyCommand => FuoError::EmptyCommand,
            FuoError::InvalidAction(s) => FuoError::InvalidAction(s.clone()),
            FuoError::UnknownCommand(s) => FuoError::UnknownCommand(s.clone()),
            FuoError::InvalidUrl(s) => FuoError::InvalidUrl(s.clone()),
            FuoError::ProviderNotFound(s) => FuoError::ProviderNotFound(s.clone()),
            FuoError::UnsupportedEntityType {
                provider,
                entity_type,
            } => FuoError::UnsupportedEntityType {
                provider: provider.clone(),
                entity_type: *entity_type,
            },
            FuoError::EntityNotFound { url, reason } => FuoError::EntityNotFound {
                url: url.clone(),
                reason: reason.clone(),
            },
            FuoError::Handler(s) => FuoError::Handler(s.clone()),
            FuoError::Internal(s) => FuoError::Internal(s.clone()),
        }
    }
}

impl PartialEq for FuoError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (FuoError::Io(e1), FuoError::Io(e2)) => e1.kind() == e2.kind(),
            (FuoError::InvalidAction(s1), FuoError::InvalidAction(s2)) => s1 == s2,
            (FuoError::UnknownCommand(s1), FuoError::UnknownCommand(s2)) => s1 == s2,
            (FuoError::InvalidUrl(s1), FuoError::InvalidUrl(s2)) => s1 == s2,
            (FuoError::ProviderNotFound(s1), FuoError::ProviderNotFound(s2)) => s1 == s2,
            (
                FuoError::UnsupportedEntityType {
                    provider: p1,
                    entity_type: t1,
                },
                FuoError::UnsupportedEntityType {
                    provider: p2,
                    entity_type: t2,
                },
            ) => p1 == p2 && t1 == t2,
            (
                FuoError::EntityNotFound { url: u1, reason: r1 },
                FuoError::EntityNotFound { url: u2, reason: r2 },
            ) => u1 == u2 && r1 == r2,
            (FuoError::Handler(s1), FuoError::Handler(s2)) => s1 == s2,
            (FuoError::Internal(s1), FuoError::Internal(s2)) => s1 == s2,
            _ => std::mem::discriminant(self) == std::mem::discriminant(other),
        }
    }
}

impl From<std::io::Error> for FuoError {
    fn from(e: std::io::Error) -> Self {
        FuoError::Io(Arc::new(e))
    }
}

impl From<regex::Error> for FuoError {
    fn from(e: regex::Error) -> Self {
        FuoError::Internal(format!("Failed to build url pattern: {e}"))
    }
}

impl From<anyhow::Error> for FuoError {
    fn from(e: anyhow::Error) -> Self {
        FuoError::Handler(format!("{e:#}"))
    }
}
