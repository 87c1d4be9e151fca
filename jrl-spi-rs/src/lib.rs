//! jrl-spi Rust facade: link-time providers, RegistryBuilder, process-wide registry on jrl-spi-core.

pub mod discovery;
pub mod global;

pub use discovery::{linked_providers, LinkedDiscovery, ProviderReg, RegistryBuilder, StaticDiscovery};
pub use global::{global, instance, instance_or_default};
pub use jrl_spi_core::{
    provider, BoxError, Candidates, Capability, ConcreteType, Discovery, DiscoveryError,
    Implementation, Lookup, Provider, Registry, SpiError,
};
pub use jrl_spi_rs_macros::Provider;

#[doc(hidden)]
pub use inventory;
