//! Provider descriptor: what a registration looks like before it is constructed.

use std::fmt;

use crate::capability::{Capability, Implementation};
use crate::discovery::DiscoveryError;

/// One registration: capability, display name, constructor.
///
/// Plain fn pointers so descriptors can live in `static` items; build them
/// with [`provider!`](crate::provider).
#[derive(Clone, Copy)]
pub struct Provider {
    pub capability: fn() -> Capability,
    pub name: &'static str,
    pub constructor: fn() -> Result<Implementation, DiscoveryError>,
}

impl Provider {
    pub fn capability(&self) -> Capability {
        (self.capability)()
    }

    pub fn provides(&self, capability: Capability) -> bool {
        self.capability() == capability
    }

    /// Run the constructor.
    pub fn instantiate(&self) -> Result<Implementation, DiscoveryError> {
        (self.constructor)()
    }
}

impl fmt::Debug for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Provider")
            .field("capability", &self.capability().name())
            .field("name", &self.name)
            .finish()
    }
}

/// Build a [`Provider`] for `capability => concrete type`.
///
/// ```ignore
/// provider!(dyn Greeter => EnglishGreeter);                          // Default
/// provider!(dyn Greeter => EnglishGreeter, with = EnglishGreeter::new);
/// provider!(dyn Store => PgStore, try_with = PgStore::connect);      // Result<_, E>
/// ```
#[macro_export]
macro_rules! provider {
    ($capability:ty => $provider:ty) => {
        $crate::provider!($capability => $provider, with = <$provider as ::std::default::Default>::default)
    };
    ($capability:ty => $provider:ty, with = $construct:expr) => {
        $crate::Provider {
            capability: $crate::Capability::of::<$capability>,
            name: ::std::stringify!($provider),
            constructor: || {
                let instance: $provider = ($construct)();
                ::std::result::Result::Ok($crate::__implementation!($capability => $provider, instance))
            },
        }
    };
    ($capability:ty => $provider:ty, try_with = $construct:expr) => {
        $crate::Provider {
            capability: $crate::Capability::of::<$capability>,
            name: ::std::stringify!($provider),
            constructor: || {
                let instance: $provider = ($construct)().map_err(|error| {
                    $crate::DiscoveryError::construction(::std::stringify!($provider), error)
                })?;
                ::std::result::Result::Ok($crate::__implementation!($capability => $provider, instance))
            },
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! __implementation {
    ($capability:ty => $provider:ty, $instance:expr) => {
        $crate::Implementation::new::<$capability, $provider>(
            ::std::sync::Arc::new($instance),
            |instance: ::std::sync::Arc<$provider>| -> ::std::sync::Arc<$capability> { instance },
        )
    };
}
