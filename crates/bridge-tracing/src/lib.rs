//! bridgelog native backend over [`tracing`].
//!
//! Loggers only accept printf-style calls, so events arrive with markers and
//! key/value pairs already folded into the message. Each event is emitted
//! with a `logger` field naming the bridgelog logger and, when there is a
//! cause, an `exception` field with its display text.
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

use std::sync::Arc;

use bridgelog::{FormatArg, NativeLevel, NativeLogger, NativeLoggerFactory, format_message};
use tracing::Level;

/// Native logger factory emitting `tracing` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingBackend;

impl TracingBackend {
    /// Creates the backend.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl NativeLoggerFactory for TracingBackend {
    fn logger(&self, name: &str) -> Arc<dyn NativeLogger> {
        Arc::new(TracingLogger {
            name: name.to_string(),
        })
    }
}

/// Native logger for one name.
#[derive(Debug)]
pub struct TracingLogger {
    name: String,
}

macro_rules! emit {
    ($level:expr, $logger:expr, $cause:expr, $message:expr) => {
        match $cause {
            Some(cause) => {
                tracing::event!($level, logger = %$logger, exception = %cause, "{}", $message);
            }
            None => tracing::event!($level, logger = %$logger, "{}", $message),
        }
    };
}

impl NativeLogger for TracingLogger {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_enabled(&self, level: NativeLevel) -> bool {
        match level {
            NativeLevel::Trace => tracing::enabled!(Level::TRACE),
            NativeLevel::Debug => tracing::enabled!(Level::DEBUG),
            NativeLevel::Info => tracing::enabled!(Level::INFO),
            NativeLevel::Warn => tracing::enabled!(Level::WARN),
            NativeLevel::Error => tracing::enabled!(Level::ERROR),
        }
    }

    fn log_formatted(&self, level: NativeLevel, template: &str, args: &[FormatArg<'_>]) {
        let formatted = format_message(template, args);
        let (name, message, cause) = (&self.name, &formatted.message, formatted.cause);
        match level {
            NativeLevel::Trace => emit!(Level::TRACE, name, cause, message),
            NativeLevel::Debug => emit!(Level::DEBUG, name, cause, message),
            NativeLevel::Info => emit!(Level::INFO, name, cause, message),
            NativeLevel::Warn => emit!(Level::WARN, name, cause, message),
            NativeLevel::Error => emit!(Level::ERROR, name, cause, message),
        }
    }
}
