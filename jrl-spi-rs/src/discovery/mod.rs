//! Discovery sources and RegistryBuilder.

mod linked;
mod protocol;

pub use linked::{linked_providers, LinkedDiscovery, ProviderReg};
pub use protocol::StaticDiscovery;

use jrl_spi_core::{Discovery, Registry};

/// Registry configuration: pick one discovery source, then build.
/// Defaults to [`LinkedDiscovery`] when no source is set.
pub struct RegistryBuilder {
    adapter: Option<Box<dyn Discovery>>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self { adapter: None }
    }

    /// Providers registered at link time.
    pub fn linked(mut self) -> Self {
        self.adapter = Some(Box::new(LinkedDiscovery));
        self
    }

    /// Explicit ordered provider list.
    pub fn static_discovery(mut self, discovery: StaticDiscovery) -> Self {
        self.adapter = Some(Box::new(discovery));
        self
    }

    /// Use custom implementation.
    pub fn adapter(mut self, impl_: impl Discovery + 'static) -> Self {
        self.adapter = Some(Box::new(impl_));
        self
    }

    pub fn build(self) -> Registry {
        match self.adapter {
            Some(adapter) => Registry::new(adapter),
            None => Registry::new(LinkedDiscovery),
        }
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}
