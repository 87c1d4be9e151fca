//! Discovery trait: capability -> candidate implementations, in discovery order.

use std::sync::Arc;

use thiserror::Error;

use crate::capability::{Capability, Implementation};
use crate::BoxError;

#[derive(Error, Debug)]
pub enum DiscoveryError {
    /// A provider constructor returned an error.
    #[error("provider {provider} failed to construct: {source}")]
    Construction {
        provider: &'static str,
        #[source]
        source: BoxError,
    },
    /// The discovered candidate does not provide the requested capability.
    #[error("provider {provider} does not implement {capability}")]
    Mismatch {
        capability: &'static str,
        provider: &'static str,
    },
    /// The discovery source itself could not enumerate candidates.
    #[error("discovery unavailable: {0}")]
    Unavailable(String),
}

impl DiscoveryError {
    pub fn construction(provider: &'static str, error: impl Into<BoxError>) -> Self {
        Self::Construction {
            provider,
            source: error.into(),
        }
    }
}

/// Lazy, finite, ordered candidates. Each item is constructed when pulled.
pub type Candidates<'a> = Box<dyn Iterator<Item = Result<Implementation, DiscoveryError>> + 'a>;

/// Where implementations come from. Implementations: link-time registrations, static lists, test fakes.
pub trait Discovery: Send + Sync {
    /// Return candidates for `capability`, first one wins.
    fn discover(&self, capability: Capability) -> Result<Candidates<'_>, DiscoveryError>;
}

impl<D: Discovery + ?Sized> Discovery for Arc<D> {
    fn discover(&self, capability: Capability) -> Result<Candidates<'_>, DiscoveryError> {
        (**self).discover(capability)
    }
}

impl<D: Discovery + ?Sized> Discovery for Box<D> {
    fn discover(&self, capability: Capability) -> Result<Candidates<'_>, DiscoveryError> {
        (**self).discover(capability)
    }
}

impl<D: Discovery + ?Sized> Discovery for &D {
    fn discover(&self, capability: Capability) -> Result<Candidates<'_>, DiscoveryError> {
        (**self).discover(capability)
    }
}
