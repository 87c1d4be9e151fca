//! Link-time discovery: providers submitted with `provide!` or `#[derive(Provider)]`.
//!
//! Each registration is a [`ProviderReg`] placed in the `inventory` collection.
//! At startup the linker has gathered every registration from every crate in
//! the binary, so enumeration is a plain walk over that collection.

use jrl_spi_core::{Candidates, Capability, Discovery, DiscoveryError, Provider};

/// Wrapper for `inventory::collect!`.
pub struct ProviderReg(pub Provider);
inventory::collect!(ProviderReg);

/// Discovery over every provider linked into the binary.
///
/// Order is the order the linker emits registrations in. It is stable for a
/// given build but not specified across builds or platforms, so when several
/// providers exist for one capability, which one wins is not guaranteed. Use
/// [`StaticDiscovery`](super::StaticDiscovery) when the order matters.
#[derive(Clone, Copy, Debug, Default)]
pub struct LinkedDiscovery;

impl Discovery for LinkedDiscovery {
    fn discover(&self, capability: Capability) -> Result<Candidates<'_>, DiscoveryError> {
        Ok(Box::new(
            inventory::iter::<ProviderReg>
                .into_iter()
                .filter(move |reg| reg.0.provides(capability))
                .map(|reg| reg.0.instantiate()),
        ))
    }
}

/// Every linked registration as (capability, provider name), in discovery order.
pub fn linked_providers() -> impl Iterator<Item = (Capability, &'static str)> {
    inventory::iter::<ProviderReg>
        .into_iter()
        .map(|reg| (reg.0.capability(), reg.0.name))
}

/// Register a provider at link time. Same arguments as [`provider!`](crate::provider).
///
/// ```ignore
/// provide!(dyn Greeter => EnglishGreeter);
/// provide!(dyn Store => PgStore, try_with = PgStore::connect);
/// ```
#[macro_export]
macro_rules! provide {
    ($($args:tt)+) => {
        $crate::inventory::submit! {
            $crate::ProviderReg($crate::provider!($($args)+))
        }
    };
}
