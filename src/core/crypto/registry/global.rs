/*!
Process-wide suite registry.

The registry is set at most once. `install` replaces the defaults with a
custom registry, but only before anything has read the global one; the
first lookup without an installed registry freezes the built-in suites
in place.
*/

use once_cell::sync::OnceCell;

use crate::core::crypto::registry::manager::{SuiteHandle, SuiteRegistry, SuiteRegistryBuilder};
use crate::core::error::RegistryError;

// Global registry instance
static REGISTRY: OnceCell<SuiteRegistry> = OnceCell::new();

/// Install `registry` as the process-wide registry.
///
/// Fails with `RegistryError::AlreadyInstalled` once a registry has been
/// installed or the default one has been used.
pub fn install(registry: SuiteRegistry) -> Result<(), RegistryError> {
    let names = registry.names();
    REGISTRY
        .set(registry)
        .map_err(|_| RegistryError::AlreadyInstalled)?;
    log::debug!("Installed suite registry with {:?}", names);
    Ok(())
}

/// Get the process-wide registry
pub fn get_registry() -> &'static SuiteRegistry {
    REGISTRY.get_or_init(|| {
        let registry = SuiteRegistryBuilder::with_defaults().build();
        log::debug!("Using default suite registry with {:?}", registry.names());
        registry
    })
}

/// Look up a suite by name in the process-wide registry
pub fn find(name: &str) -> Result<SuiteHandle, RegistryError> {
    get_registry().find(name)
}

/// Look up a suite by name in the process-wide registry, panicking if absent
pub fn must_find(name: &str) -> SuiteHandle {
    get_registry().must_find(name)
}

/// List all suites in the process-wide registry
pub fn list_suites() -> Vec<String> {
    get_registry().names()
}
