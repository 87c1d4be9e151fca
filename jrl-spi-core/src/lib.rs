//! jrl-spi core: registry, capability identity, discovery trait. Shared by the Rust facade.

pub mod capability;
pub mod discovery;
pub mod provider;
pub mod registry;

pub use capability::{Capability, ConcreteType, Implementation};
pub use discovery::{Candidates, Discovery, DiscoveryError};
pub use provider::Provider;
pub use registry::{Lookup, Registry};

use thiserror::Error;

/// Boxed error accepted from fallible provider constructors.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Error, Debug)]
pub enum SpiError {
    /// No provider is registered for the capability (simple name).
    #[error("fail to load spi, capability: {0}")]
    NotFound(String),
    #[error(transparent)]
    Discovery(#[from] DiscoveryError),
}
