//! Process-wide access point for obtaining loggers.

use std::sync::{Arc, OnceLock};

use crate::{Logger, SetFactoryError, noop};

static FACTORY: OnceLock<Arc<dyn LoggerFactory>> = OnceLock::new();

/// Source of loggers, implemented by a backend binding.
pub trait LoggerFactory: Send + Sync + 'static {
    /// Returns a logger named after the code calling into the facade.
    ///
    /// # Panics
    ///
    /// Implementations panic when the calling code cannot be identified; a
    /// logger that cannot name its owner would mis-attribute its output.
    fn instance(&self) -> Arc<dyn Logger>;

    /// Returns the logger for `name` at the binding's default level.
    fn logger(&self, name: &str) -> Arc<dyn Logger>;
}

/// Installs the process-wide factory.
///
/// # Errors
///
/// Returns [`SetFactoryError`] if a factory was already installed.
pub fn set_factory(factory: Arc<dyn LoggerFactory>) -> Result<(), SetFactoryError> {
    FACTORY.set(factory).map_err(|_| SetFactoryError)
}

/// The installed factory, if any.
#[must_use]
pub fn factory() -> Option<&'static Arc<dyn LoggerFactory>> {
    FACTORY.get()
}

/// Returns a logger named after the calling code.
///
/// Without an installed factory this is the shared no-op logger.
///
/// # Panics
///
/// Panics if the installed factory cannot identify the calling code.
#[inline(never)]
#[must_use]
pub fn instance() -> Arc<dyn Logger> {
    match FACTORY.get() {
        Some(factory) => factory.instance(),
        None => noop(),
    }
}

/// Returns the logger for `name` at the default level.
///
/// Without an installed factory this is the shared no-op logger.
#[must_use]
pub fn logger(name: &str) -> Arc<dyn Logger> {
    match FACTORY.get() {
        Some(factory) => factory.logger(name),
        None => noop(),
    }
}
