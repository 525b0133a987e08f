// tests/property/url_roundtrip_test.rs

//! Property-based tests for `fuo://` URL encoding and decoding.

use fuod::core::library::{Library, ModelClass, Provider};
use fuod::core::{EntityRef, EntityType, FuoError};
use fuod::fuo_url;
use proptest::prelude::*;
use std::sync::Arc;
use strum::IntoEnumIterator;

struct NamedProvider(String);

impl Provider for NamedProvider {
    fn id(&self) -> &str {
        &self.0
    }
    fn model_class(&self, _: EntityType) -> Option<Arc<dyn ModelClass>> {
        None
    }
}

fn library(ids: &[String]) -> Library {
    let library = Library::new();
    for id in ids {
        library.register(Arc::new(NamedProvider(id.clone())));
    }
    library
}

fn entity_type() -> impl Strategy<Value = EntityType> {
    prop::sample::select(EntityType::iter().collect::<Vec<_>>())
}

/// Any id the registry accepts that cannot be confused with a path separator.
fn provider_id() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z][a-z0-9]{0,11}",
        "[a-zA-Z0-9 ^|<>\\[\\]{}().*+?$%#@!~歌]{1,12}",
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 200,
        max_shrink_iters: 1000,
        ..ProptestConfig::default()
    })]

    #[test]
    fn test_encode_then_decode_with_registered_provider(
        providers in prop::collection::hash_set(provider_id(), 1..5),
        pick in any::<prop::sample::Index>(),
        ty in entity_type(),
        identifier in "[A-Za-z0-9_]{1,32}",
    ) {
        let providers: Vec<String> = providers.into_iter().collect();
        let provider = pick.get(&providers).clone();
        let library = library(&providers);

        let entity = EntityRef::new(provider, ty, identifier);
        let url = fuo_url::encode(&entity);
        prop_assert_eq!(fuo_url::decode(&url, &library).unwrap(), entity);
    }

    #[test]
    fn test_unregistered_provider_is_invalid(
        registered in "[a-m]{1,8}",
        other in "[n-z]{1,8}",
        ty in entity_type(),
        identifier in "[A-Za-z0-9_]{1,16}",
    ) {
        let library = library(&[registered]);
        let url = fuo_url::encode(&EntityRef::new(other, ty, identifier));
        let err = fuo_url::decode(&url, &library).unwrap_err();
        prop_assert!(matches!(err, FuoError::InvalidUrl(_)));
    }

    #[test]
    fn test_non_word_identifier_is_invalid(
        ty in entity_type(),
        head in "[a-z0-9]{1,6}",
        bad in "[.~:+=]",
    ) {
        let library = library(&["local".to_string()]);
        let url = format!("fuo://local/{}/{head}{bad}", ty.namespace());
        let err = fuo_url::decode(&url, &library).unwrap_err();
        prop_assert!(matches!(err, FuoError::InvalidUrl(_)));
    }

    #[test]
    fn test_provider_prefix_does_not_match(
        provider in "[a-z]{2,8}",
        ty in entity_type(),
    ) {
        // A registered id must match the authority exactly, not as a prefix.
        let library = library(&[provider.clone()]);
        let url = format!("fuo://{provider}x/{}/1", ty.namespace());
        prop_assert!(fuo_url::decode(&url, &library).is_err());
    }
}
