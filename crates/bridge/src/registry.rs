//! Per-name, per-level cache of bridge loggers.

use std::any::type_name;
use std::fmt;
use std::sync::Arc;

use bridgelog_facade::{Level, Logger, LoggerFactory, noop, set_factory};
use dashmap::DashMap;
use tracing::debug;

use crate::caller::most_recent_caller_of_any;
use crate::config::RegistryOptions;
use crate::error::Result;
use crate::level::to_native;
use crate::logger::BridgeLogger;
use crate::native::{NativeLevel, NativeLoggerFactory};

/// Name given to loggers requested with an empty name.
pub const ROOT_LOGGER_NAME: &str = "ROOT";

pub(crate) struct RegistryInner {
    factory: Box<dyn NativeLoggerFactory>,
    options: RegistryOptions,
    loggers: [DashMap<String, Arc<BridgeLogger>>; NativeLevel::COUNT],
}

impl RegistryInner {
    fn get_logger(self: &Arc<Self>, name: &str, level: Level) -> Option<Arc<BridgeLogger>> {
        let level = to_native(level)?;
        let name = if name.is_empty() { ROOT_LOGGER_NAME } else { name };
        let loggers = &self.loggers[level.index()];

        if let Some(logger) = loggers.get(name) {
            return Some(Arc::clone(logger.value()));
        }

        let logger = loggers.entry(name.to_string()).or_insert_with(|| {
            let native = self.factory.logger(name);
            let logger = BridgeLogger::new(
                name.to_string(),
                level,
                native,
                self.options.enabled_check,
                Arc::downgrade(self),
            );
            debug!(logger = name, %level, enabled = logger.is_enabled(), "constructed logger");
            Arc::new(logger)
        });
        Some(Arc::clone(logger.value()))
    }

    pub(crate) fn get(self: &Arc<Self>, name: &str, level: Level) -> Arc<dyn Logger> {
        match self.get_logger(name, level) {
            Some(logger) => logger,
            None => noop(),
        }
    }
}

/// Hands out one [`BridgeLogger`] per name and level.
///
/// Loggers are constructed on first request, under the map entry's lock, so
/// concurrent first requests for the same key construct exactly once. They
/// live as long as the registry. Registries are independent of each other;
/// [`LoggerRegistry::install`] makes one the process-wide facade factory.
///
/// The native factory is called while that entry lock is held and must not
/// request a logger from the same registry.
#[derive(Clone)]
pub struct LoggerRegistry {
    inner: Arc<RegistryInner>,
}

impl LoggerRegistry {
    /// Creates a registry over `factory` with default options.
    pub fn new(factory: impl NativeLoggerFactory) -> Self {
        Self::with_options(factory, RegistryOptions::default())
    }

    /// Creates a registry over `factory`.
    pub fn with_options(factory: impl NativeLoggerFactory, options: RegistryOptions) -> Self {
        Self {
            inner: Arc::new(RegistryInner {
                factory: Box::new(factory),
                options,
                loggers: std::array::from_fn(|_| DashMap::new()),
            }),
        }
    }

    /// Options the registry was created with.
    #[must_use]
    pub fn options(&self) -> &RegistryOptions {
        &self.inner.options
    }

    /// The logger for `name` at `level`.
    ///
    /// [`Level::Off`] yields the shared no-op logger without touching the
    /// cache. An empty name is treated as [`ROOT_LOGGER_NAME`].
    #[must_use]
    pub fn get(&self, name: &str, level: Level) -> Arc<dyn Logger> {
        self.inner.get(name, level)
    }

    /// Typed variant of [`LoggerRegistry::get`]; `None` for [`Level::Off`].
    #[must_use]
    pub fn get_logger(&self, name: &str, level: Level) -> Option<Arc<BridgeLogger>> {
        self.inner.get_logger(name, level)
    }

    /// The logger for `name` at the default level.
    #[must_use]
    pub fn logger(&self, name: &str) -> Arc<dyn Logger> {
        self.get(name, self.inner.options.default_level)
    }

    /// A logger at the default level named after the code calling this
    /// registry or the facade's access point.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CallerNotFound`](crate::Error::CallerNotFound) if the
    /// calling code cannot be identified. Nothing is cached in that case.
    #[inline(never)]
    pub fn try_instance(&self) -> Result<Arc<dyn Logger>> {
        let caller =
            most_recent_caller_of_any(&[type_name::<Self>(), bridgelog_facade::ACCESS_POINT])?;
        Ok(self.logger(&caller.owner))
    }

    /// Like [`LoggerRegistry::try_instance`].
    ///
    /// # Panics
    ///
    /// Panics if the calling code cannot be identified.
    #[inline(never)]
    #[must_use]
    pub fn instance(&self) -> Arc<dyn Logger> {
        match self.try_instance() {
            Ok(logger) => logger,
            Err(error) => panic!("{error}"),
        }
    }

    /// Number of cached loggers across all levels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.loggers.iter().map(DashMap::len).sum()
    }

    /// Whether no logger has been constructed yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.loggers.iter().all(DashMap::is_empty)
    }

    /// Number of cached loggers at `level`.
    #[must_use]
    pub fn cached(&self, level: Level) -> usize {
        to_native(level).map_or(0, |level| self.inner.loggers[level.index()].len())
    }

    /// Installs this registry as the process-wide facade factory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FactoryAlreadySet`](crate::Error::FactoryAlreadySet)
    /// if a factory was already installed.
    pub fn install(self) -> Result<Self> {
        set_factory(Arc::new(self.clone()))?;
        debug!(options = ?self.inner.options, "installed logger registry");
        Ok(self)
    }
}

impl LoggerFactory for LoggerRegistry {
    #[inline(never)]
    fn instance(&self) -> Arc<dyn Logger> {
        Self::instance(self)
    }

    fn logger(&self, name: &str) -> Arc<dyn Logger> {
        Self::logger(self, name)
    }
}

impl fmt::Debug for LoggerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerRegistry")
            .field("options", &self.inner.options)
            .field("loggers", &self.len())
            .finish_non_exhaustive()
    }
}

/// Builds a registry over `factory` and installs it as the facade factory.
///
/// # Errors
///
/// Returns [`Error::FactoryAlreadySet`](crate::Error::FactoryAlreadySet) if a
/// factory was already installed.
pub fn init(factory: impl NativeLoggerFactory, options: RegistryOptions) -> Result<LoggerRegistry> {
    LoggerRegistry::with_options(factory, options).install()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EnabledCheck;
    use crate::native::{FormatArg, NativeLogger};
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Silent(String);

    impl NativeLogger for Silent {
        fn name(&self) -> &str {
            &self.0
        }

        fn is_enabled(&self, level: NativeLevel) -> bool {
            level >= NativeLevel::Info
        }

        fn log_formatted(&self, _level: NativeLevel, _template: &str, _args: &[FormatArg<'_>]) {}
    }

    #[derive(Clone, Default)]
    struct Counting(Arc<AtomicUsize>);

    impl NativeLoggerFactory for Counting {
        fn logger(&self, name: &str) -> Arc<dyn NativeLogger> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Arc::new(Silent(name.to_string()))
        }
    }

    #[test]
    fn test_same_key_same_instance() {
        let factory = Counting::default();
        let registry = LoggerRegistry::new(factory.clone());
        let a = registry.get("svc", Level::Debug);
        let b = registry.get("svc", Level::Debug);
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(factory.0.load(Ordering::SeqCst), 1);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.cached(Level::Debug), 1);
    }

    #[test]
    fn test_levels_are_cached_separately() {
        let registry = LoggerRegistry::new(Counting::default());
        let info = registry.get("svc", Level::Info);
        let warn = registry.get("svc", Level::Warn);
        assert!(!Arc::ptr_eq(&info, &warn));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_off_is_not_cached() {
        let registry = LoggerRegistry::new(Counting::default());
        assert!(Arc::ptr_eq(&registry.get("svc", Level::Off), &noop()));
        assert!(registry.get_logger("svc", Level::Off).is_none());
        assert!(registry.is_empty());
        assert_eq!(registry.cached(Level::Off), 0);
    }

    #[test]
    fn test_default_level_applies_to_named_loggers() {
        let options = RegistryOptions::default().with_default_level(Level::Warn);
        let registry = LoggerRegistry::with_options(Counting::default(), options);
        assert_eq!(registry.logger("svc").level(), Level::Warn);
    }

    #[test]
    fn test_empty_name_is_root() {
        let registry = LoggerRegistry::new(Counting::default());
        let root = registry.get("", Level::Info);
        assert_eq!(root.name(), ROOT_LOGGER_NAME);
        assert!(Arc::ptr_eq(&root, &registry.get(ROOT_LOGGER_NAME, Level::Info)));
    }

    #[test]
    fn test_instance_names_after_calling_module() {
        let registry = LoggerRegistry::new(Counting::default());
        let logger = registry.try_instance().unwrap();
        assert!(logger.name().ends_with("registry::tests"), "name was {}", logger.name());
    }

    #[test]
    fn test_unresolved_caller_caches_nothing() {
        use crate::caller::{CallerFrame, find_caller};

        let registry = LoggerRegistry::new(Counting::default());
        let frames: Vec<CallerFrame> = [
            "bridgelog::registry::LoggerRegistry::try_instance",
            "bridgelog::registry::LoggerRegistry::instance",
            "bridgelog_facade::factory::instance",
        ]
        .into_iter()
        .filter_map(|symbol| CallerFrame::from_symbol(symbol, None, None))
        .collect();
        let boundaries = [type_name::<LoggerRegistry>(), bridgelog_facade::ACCESS_POINT];

        let logger = find_caller(&frames, &boundaries).map(|caller| registry.logger(&caller.owner));
        assert!(logger.is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_accessors() {
        let options = RegistryOptions::default()
            .with_default_level(Level::Debug)
            .with_enabled_check(EnabledCheck::Snapshot);
        let registry = LoggerRegistry::with_options(Counting::default(), options);
        assert_eq!(registry.options().default_level, Level::Debug);
        assert_eq!(registry.options().enabled_check, EnabledCheck::Snapshot);

        let logger = registry.get_logger("svc", Level::Warn).unwrap();
        assert_eq!(logger.native_level(), NativeLevel::Warn);
        assert_eq!(logger.native_logger().name(), "svc");
        assert!(logger.native_logger().is_enabled(NativeLevel::Warn));
    }

    #[test]
    fn test_debug_output() {
        let registry = LoggerRegistry::new(Counting::default());
        let logger = registry.get_logger("svc", Level::Debug).unwrap();
        assert_eq!(
            format!("{logger:?}"),
            "BridgeLogger { name: \"svc\", level: Debug, enabled: false }"
        );
    }
}
