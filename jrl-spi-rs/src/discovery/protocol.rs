//! Discovery from an explicit provider list. Trait is in jrl_spi_core::discovery.

use jrl_spi_core::{Candidates, Capability, Discovery, DiscoveryError, Provider};

/// Discovery from a static, ordered provider list. Order is insertion order.
#[derive(Clone, Debug, Default)]
pub struct StaticDiscovery {
    providers: Vec<Provider>,
}

impl StaticDiscovery {
    pub fn new(providers: Vec<Provider>) -> Self {
        Self { providers }
    }

    /// Build from a slice of providers.
    pub fn from_slice(providers: &[Provider]) -> Self {
        Self {
            providers: providers.to_vec(),
        }
    }

    /// Append a provider; it loses to every provider already listed for the same capability.
    pub fn with(mut self, provider: Provider) -> Self {
        self.providers.push(provider);
        self
    }

    pub fn providers(&self) -> &[Provider] {
        &self.providers
    }
}

impl Discovery for StaticDiscovery {
    fn discover(&self, capability: Capability) -> Result<Candidates<'_>, DiscoveryError> {
        Ok(Box::new(
            self.providers
                .iter()
                .filter(move |p| p.provides(capability))
                .map(Provider::instantiate),
        ))
    }
}
