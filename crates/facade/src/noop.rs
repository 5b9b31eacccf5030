//! No-operation logger implementation.

use std::error::Error;
use std::sync::{Arc, LazyLock};

use crate::{Arg, Level, Logger, Message};

static NOOP: LazyLock<Arc<dyn Logger>> = LazyLock::new(|| Arc::new(NoopLogger));

/// Returns the shared, stateless logger used for [`Level::Off`].
///
/// Every call returns the same instance.
#[must_use]
pub fn noop() -> Arc<dyn Logger> {
    Arc::clone(&NOOP)
}

/// A logger that is never enabled and discards everything.
///
/// It has no name; switching its level always yields the shared instance.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLogger;

impl Logger for NoopLogger {
    fn name(&self) -> &str {
        ""
    }

    fn level(&self) -> Level {
        Level::Off
    }

    #[inline]
    fn is_enabled(&self) -> bool {
        false
    }

    fn at_level(self: Arc<Self>, _level: Level) -> Arc<dyn Logger> {
        noop()
    }

    #[inline]
    fn emit(&self, _cause: Option<&(dyn Error + 'static)>, _message: Message<'_>, _args: &[Arg<'_>]) {}
}
