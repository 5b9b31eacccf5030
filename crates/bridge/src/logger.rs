//! The facade logger handed out by the registry.

use std::any::type_name;
use std::error::Error;
use std::fmt;
use std::sync::{Arc, Weak};

use bridgelog_facade::{Arg, Level, Logger, Message, noop};
use tracing::warn;

use crate::builder::CallerBoundaryEventBuilder;
use crate::config::EnabledCheck;
use crate::event::{DefaultEventBuilder, EventBuilder};
use crate::native::{NativeLevel, NativeLogger};
use crate::registry::RegistryInner;

/// An immutable logger for one name at one level.
///
/// Obtain instances from a [`LoggerRegistry`](crate::LoggerRegistry); the
/// registry returns the same instance for the same name and level.
pub struct BridgeLogger {
    name: String,
    level: NativeLevel,
    enabled: bool,
    check: EnabledCheck,
    native: Arc<dyn NativeLogger>,
    registry: Weak<RegistryInner>,
}

impl BridgeLogger {
    pub(crate) fn new(
        name: String,
        level: NativeLevel,
        native: Arc<dyn NativeLogger>,
        check: EnabledCheck,
        registry: Weak<RegistryInner>,
    ) -> Self {
        Self {
            enabled: native.is_enabled(level),
            name,
            level,
            check,
            native,
            registry,
        }
    }

    /// Caller boundary stamped on every event this logger emits.
    #[must_use]
    pub fn caller_boundary() -> &'static str {
        type_name::<Self>()
    }

    /// Level of this logger in the backend's terms.
    #[must_use]
    pub const fn native_level(&self) -> NativeLevel {
        self.level
    }

    /// The backend logger events are delegated to.
    #[must_use]
    pub fn native_logger(&self) -> &dyn NativeLogger {
        &*self.native
    }

    /// Starts an event at this logger's level; `None` when disabled.
    ///
    /// No caller boundary is set yet, so an adapter building on this logger
    /// can stamp its own before [`Logger::emit`] would stamp
    /// [`BridgeLogger::caller_boundary`].
    #[must_use]
    pub fn event_builder(&self) -> Option<CallerBoundaryEventBuilder<'_>> {
        self.is_enabled().then(|| {
            CallerBoundaryEventBuilder::new(DefaultEventBuilder::new(&*self.native, self.level))
        })
    }
}

impl Logger for BridgeLogger {
    fn name(&self) -> &str {
        &self.name
    }

    fn level(&self) -> Level {
        self.level.into()
    }

    fn is_enabled(&self) -> bool {
        match self.check {
            EnabledCheck::Live => self.native.is_enabled(self.level),
            EnabledCheck::Snapshot => self.enabled,
        }
    }

    fn at_level(self: Arc<Self>, level: Level) -> Arc<dyn Logger> {
        if level == self.level() {
            return self;
        }
        if level.is_off() {
            return noop();
        }
        if let Some(registry) = self.registry.upgrade() {
            return registry.get(&self.name, level);
        }
        warn!(logger = %self.name, %level, "registry dropped, switching to the no-op logger");
        noop()
    }

    fn emit(&self, cause: Option<&(dyn Error + 'static)>, message: Message<'_>, args: &[Arg<'_>]) {
        let Some(mut builder) = self.event_builder() else {
            return;
        };
        builder
            .set_caller_boundary(Self::caller_boundary())
            .set_message(message.resolve());
        for arg in args {
            builder.add_argument(arg.resolve());
        }
        if let Some(cause) = cause {
            builder.set_cause(cause);
        }
        builder.log();
    }
}

impl fmt::Debug for BridgeLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BridgeLogger")
            .field("name", &self.name)
            .field("level", &self.level)
            .field("enabled", &self.is_enabled())
            .finish()
    }
}
