//! RegistryBuilder with static and custom discovery. Nothing is registered at link time in this binary.

use std::sync::Arc;

use jrl_spi_rs::{
    provider, Candidates, Capability, Discovery, DiscoveryError, LinkedDiscovery, RegistryBuilder,
    SpiError, StaticDiscovery,
};

trait Greeter: Send + Sync {
    fn greet(&self) -> String;
}

macro_rules! greeter {
    ($name:ident, $text:expr) => {
        #[derive(Default)]
        struct $name;

        impl Greeter for $name {
            fn greet(&self) -> String {
                $text.into()
            }
        }
    };
}

greeter!(EnglishGreeter, "hello");
greeter!(FrenchGreeter, "bonjour");
greeter!(SpanishGreeter, "hola");

struct Cached;

impl Greeter for Cached {
    fn greet(&self) -> String {
        "cached".into()
    }
}

#[test]
fn static_discovery_picks_first_in_order() {
    let discovery = StaticDiscovery::new(vec![
        provider!(dyn Greeter => EnglishGreeter),
        provider!(dyn Greeter => FrenchGreeter),
    ]);
    let registry = RegistryBuilder::new().static_discovery(discovery).build();
    let greeter = registry.resolve::<dyn Greeter>().unwrap();
    assert_eq!(greeter.greet(), "hello");
    assert!(registry.contains::<EnglishGreeter>());
    assert!(!registry.contains::<FrenchGreeter>());
}

#[test]
fn appended_provider_loses_to_existing_ones() {
    let discovery = StaticDiscovery::from_slice(&[provider!(dyn Greeter => EnglishGreeter)])
        .with(provider!(dyn Greeter => FrenchGreeter))
        .with(provider!(dyn Greeter => SpanishGreeter));
    assert_eq!(discovery.providers().len(), 3);
    assert_eq!(discovery.providers()[2].name, "SpanishGreeter");

    let registry = RegistryBuilder::new().static_discovery(discovery).build();
    let first = registry.resolve::<dyn Greeter>().unwrap();
    let second = registry.resolve_or_default::<dyn Greeter, _>(|| Arc::new(Cached));
    assert_eq!(first.greet(), "hello");
    assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn static_discovery_filters_by_capability() {
    trait Other: Send + Sync {}
    let discovery = StaticDiscovery::new(vec![provider!(dyn Greeter => EnglishGreeter)]);
    let mut candidates = discovery.discover(Capability::of::<dyn Other>()).unwrap();
    assert!(candidates.next().is_none());
}

#[test]
fn default_builder_uses_linked_discovery() {
    let registry = RegistryBuilder::default().build();
    match registry.resolve::<dyn Greeter>() {
        Err(SpiError::NotFound(name)) => assert_eq!(name, "Greeter"),
        _ => panic!("expected NotFound"),
    }
    let greeter = registry.resolve_or_default::<dyn Greeter, _>(|| Arc::new(Cached));
    assert_eq!(greeter.greet(), "cached");
    assert!(LinkedDiscovery
        .discover(Capability::of::<dyn Greeter>())
        .unwrap()
        .next()
        .is_none());
}

struct Offline;

impl Discovery for Offline {
    fn discover(&self, _capability: Capability) -> Result<Candidates<'_>, DiscoveryError> {
        Err(DiscoveryError::Unavailable("offline".into()))
    }
}

#[test]
fn custom_adapter() {
    let registry = RegistryBuilder::new().adapter(Offline).build();
    let greeter = registry.resolve_or_default::<dyn Greeter, _>(|| Arc::new(Cached));
    assert_eq!(greeter.greet(), "cached");
    assert!(matches!(
        registry.resolve::<dyn Greeter>(),
        Err(SpiError::Discovery(DiscoveryError::Unavailable(_)))
    ));
    assert!(registry.is_empty());
}
