//! Process-wide registry over linked providers, plus free-function entry points.

use std::sync::{Arc, LazyLock};

use jrl_spi_core::{Registry, SpiError};

use crate::discovery::LinkedDiscovery;

static GLOBAL: LazyLock<Registry> = LazyLock::new(|| {
    tracing::debug!("initializing process-wide spi registry");
    Registry::new(LinkedDiscovery)
});

/// The process-wide registry. Lives for the process; never cleared.
pub fn global() -> &'static Registry {
    &GLOBAL
}

/// Resolve `C` from linked providers or fail. See [`Registry::resolve`].
pub fn instance<C: ?Sized + 'static>() -> Result<Arc<C>, SpiError> {
    global().resolve::<C>()
}

/// Resolve `C` from linked providers, falling back to `default`. See [`Registry::resolve_or_default`].
pub fn instance_or_default<C, F>(default: F) -> Arc<C>
where
    C: ?Sized + 'static,
    F: FnOnce() -> Arc<C>,
{
    global().resolve_or_default(default)
}
