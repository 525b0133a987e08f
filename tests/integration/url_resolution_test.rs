// tests/integration/url_resolution_test.rs

//! Integration tests for resolving `fuo://` URLs against a live library.

use super::fixtures::*;
use super::test_helpers::*;
use fuod::core::library::{Model, ProviderRegistry};
use fuod::core::{EntityType, FuoError};
use fuod::fuo_url;
use std::sync::Arc;

#[tokio::test]
async fn test_show_resolves_url_over_tcp() {
    let server = TestServer::start(library_with(PROVIDERS, KNOWN_IDS), ScriptedExecutor::new()).await;
    let mut client = server.connect().await;
    client.greeting().await;

    assert_eq!(
        client.command("show fuo://netease/albums/42\n").await,
        "ACK show fuo://netease/albums/42\nfuo://netease/albums/42\nOK\n"
    );
    server.stop().await;
}

#[tokio::test]
async fn test_show_with_unknown_provider_fails() {
    let server = TestServer::start(library_with(PROVIDERS, KNOWN_IDS), ScriptedExecutor::new()).await;
    let mut client = server.connect().await;
    client.greeting().await;

    assert_eq!(client.command("show fuo://qq/songs/1\n").await, "\nOops\n");
    assert_eq!(client.command("show fuo://local/songs/999\n").await, "\nOops\n");
    server.stop().await;
}

#[tokio::test]
async fn test_provider_registered_later_is_addressable() {
    let library = library_with(&["local"], KNOWN_IDS);
    let server = TestServer::start(library.clone(), ScriptedExecutor::new()).await;
    let mut client = server.connect().await;
    client.greeting().await;

    assert_eq!(client.command("show fuo://xiami/songs/1\n").await, "\nOops\n");

    assert!(library.register(Arc::new(MemoryProvider::new("xiami", KNOWN_IDS))));
    assert_eq!(
        client.command("show fuo://xiami/songs/1\n").await,
        "ACK show fuo://xiami/songs/1\nfuo://xiami/songs/1\nOK\n"
    );
    server.stop().await;
}

#[test]
fn test_invalid_url_and_missing_entity_are_distinct() {
    let library = library_with(PROVIDERS, KNOWN_IDS);

    let malformed = fuo_url::resolve("fuo://local/tracks/1", library.as_ref()).unwrap_err();
    assert!(matches!(malformed, FuoError::InvalidUrl(_)));

    let missing = fuo_url::resolve("fuo://local/songs/404", library.as_ref()).unwrap_err();
    assert!(matches!(missing, FuoError::EntityNotFound { .. }));
}

#[test]
fn test_every_entity_type_resolves_for_every_provider() {
    use strum::IntoEnumIterator;

    let library = library_with(PROVIDERS, KNOWN_IDS);
    for provider in library.list_providers() {
        for entity_type in EntityType::iter() {
            for id in KNOWN_IDS {
                let url = format!("fuo://{provider}/{}/{id}", entity_type.namespace());
                let model = fuo_url::resolve(&url, library.as_ref()).unwrap();
                assert_eq!(model.source(), provider);
                assert_eq!(model.entity_type(), entity_type);
                assert_eq!(fuo_url::encode_model(model.as_ref()), url);
            }
        }
    }
}

#[test]
fn test_deregistered_provider_is_rejected() {
    let library = library_with(PROVIDERS, KNOWN_IDS);
    assert!(fuo_url::decode("fuo://netease/songs/1", library.as_ref()).is_ok());

    library.deregister("netease");
    let err = fuo_url::decode("fuo://netease/songs/1", library.as_ref()).unwrap_err();
    assert!(matches!(err, FuoError::InvalidUrl(_)));
}
