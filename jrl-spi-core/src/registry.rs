//! Instance registry: resolve a capability through discovery, memoize per concrete type.

use std::any::{Any, TypeId};
use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use crate::capability::{Capability, ConcreteType, Implementation};
use crate::discovery::{Discovery, DiscoveryError};
use crate::SpiError;

/// Outcome of one lookup, before a policy (default or fail) is applied.
#[derive(Debug)]
pub enum Lookup<C: ?Sized> {
    Found(Arc<C>),
    Empty,
    Failed(DiscoveryError),
}

/// Registry: discovery source plus a concrete type -> instance cache.
///
/// The cache is insert-if-absent and never cleared. Whichever instance of a
/// concrete type lands first is the one every caller gets, including callers
/// asking through a different capability that the same type provides.
pub struct Registry {
    discovery: Box<dyn Discovery>,
    instances: DashMap<TypeId, Arc<dyn Any + Send + Sync>>,
}

impl Registry {
    pub fn new(discovery: impl Discovery + 'static) -> Self {
        Self {
            discovery: Box::new(discovery),
            instances: DashMap::new(),
        }
    }

    /// Take the first candidate for `C` and memoize it. Later candidates are never pulled.
    pub fn lookup<C: ?Sized + 'static>(&self) -> Lookup<C> {
        let capability = Capability::of::<C>();
        let mut candidates = match self.discovery.discover(capability) {
            Ok(candidates) => candidates,
            Err(e) => return Lookup::Failed(e),
        };
        match candidates.next() {
            None => Lookup::Empty,
            Some(Err(e)) => Lookup::Failed(e),
            Some(Ok(implementation)) => match self.memoize(capability, implementation) {
                Ok(instance) => Lookup::Found(instance),
                Err(e) => Lookup::Failed(e),
            },
        }
    }

    /// Resolve `C`, or fall back to `default()` when nothing is registered or discovery fails.
    ///
    /// Failures are logged at error level and swallowed. The default is never cached.
    pub fn resolve_or_default<C, F>(&self, default: F) -> Arc<C>
    where
        C: ?Sized + 'static,
        F: FnOnce() -> Arc<C>,
    {
        match self.lookup::<C>() {
            Lookup::Found(instance) => instance,
            Lookup::Empty => default(),
            Lookup::Failed(error) => {
                tracing::error!(
                    capability = Capability::of::<C>().simple_name(),
                    error = %error,
                    "fail to load spi, falling back to default"
                );
                default()
            }
        }
    }

    /// Resolve `C` or fail.
    ///
    /// An empty discovery is reported as [`SpiError::NotFound`]. Discovery
    /// failures are returned as they are, without logging; unlike
    /// [`resolve_or_default`](Self::resolve_or_default) this does not treat
    /// them as "not found".
    pub fn resolve<C: ?Sized + 'static>(&self) -> Result<Arc<C>, SpiError> {
        match self.lookup::<C>() {
            Lookup::Found(instance) => Ok(instance),
            Lookup::Empty => Err(SpiError::NotFound(
                Capability::of::<C>().simple_name().to_owned(),
            )),
            Lookup::Failed(error) => Err(error.into()),
        }
    }

    /// Whether an instance of concrete type `T` has been memoized.
    pub fn contains<T: 'static>(&self) -> bool {
        self.instances.contains_key(&TypeId::of::<T>())
    }

    /// Number of memoized concrete types.
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    fn memoize<C: ?Sized + 'static>(
        &self,
        capability: Capability,
        implementation: Implementation,
    ) -> Result<Arc<C>, DiscoveryError> {
        let concrete = implementation.concrete();
        if implementation.capability() != capability {
            return Err(mismatch(capability, concrete));
        }
        // The shard lock is released before logging; subscribers may call back into the registry.
        let (shared, inserted) = match self.instances.entry(concrete.id()) {
            Entry::Occupied(entry) => (Arc::clone(entry.get()), false),
            Entry::Vacant(entry) => {
                let stored = entry.insert(Arc::clone(implementation.instance()));
                (Arc::clone(stored.value()), true)
            }
        };
        if inserted {
            tracing::debug!(
                capability = capability.simple_name(),
                provider = concrete.name(),
                "memoized spi instance"
            );
        }
        implementation
            .cast::<C>(shared)
            .ok_or_else(|| mismatch(capability, concrete))
    }
}

fn mismatch(capability: Capability, concrete: ConcreteType) -> DiscoveryError {
    DiscoveryError::Mismatch {
        capability: capability.simple_name(),
        provider: concrete.name(),
    }
}
