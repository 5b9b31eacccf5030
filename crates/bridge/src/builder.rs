//! Event builder that stamps the caller boundary once.

use std::error::Error;

use tracing::trace;

use crate::event::{DefaultEventBuilder, EventBuilder, format_args_of};
use crate::flatten::flatten;
use crate::native::{LoggingEvent, Marker, NativeLevel};

/// Wraps a backend's [`DefaultEventBuilder`] so the caller boundary is set by
/// the first caller only.
///
/// Adapter layers stacked on one another each try to stamp their own
/// boundary; the innermost layer that builds the event stamps first and wins.
/// On backends without a structured entry point, markers and key/value pairs
/// are folded into the message and the cause is passed as the trailing
/// positional argument.
pub struct CallerBoundaryEventBuilder<'a> {
    inner: DefaultEventBuilder<'a>,
    boundary_set: bool,
}

impl<'a> CallerBoundaryEventBuilder<'a> {
    /// Wraps `inner`; the first boundary set on the result sticks.
    #[must_use]
    pub const fn new(inner: DefaultEventBuilder<'a>) -> Self {
        Self {
            inner,
            boundary_set: false,
        }
    }

    /// Wraps `inner` with `boundary` already fixed.
    #[must_use]
    pub fn with_boundary(inner: DefaultEventBuilder<'a>, boundary: impl Into<String>) -> Self {
        let mut builder = Self::new(inner);
        builder.set_caller_boundary(boundary);
        builder
    }

    /// The event assembled so far.
    #[must_use]
    pub const fn event(&self) -> &LoggingEvent<'a> {
        self.inner.event()
    }
}

impl<'a> EventBuilder<'a> for CallerBoundaryEventBuilder<'a> {
    fn set_message(&mut self, message: impl Into<String>) -> &mut Self {
        self.inner.set_message(message);
        self
    }

    fn set_cause(&mut self, cause: &'a (dyn Error + 'static)) -> &mut Self {
        self.inner.set_cause(cause);
        self
    }

    fn add_argument(&mut self, argument: impl Into<String>) -> &mut Self {
        self.inner.add_argument(argument);
        self
    }

    fn add_marker(&mut self, marker: impl Into<Marker>) -> &mut Self {
        self.inner.add_marker(marker);
        self
    }

    fn add_key_value(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.inner.add_key_value(key, value);
        self
    }

    fn set_caller_boundary(&mut self, boundary: impl Into<String>) -> &mut Self {
        if self.boundary_set {
            let ignored: String = boundary.into();
            trace!(
                %ignored,
                kept = ?self.inner.event().caller_boundary,
                "caller boundary already set"
            );
            return self;
        }
        self.inner.set_caller_boundary(boundary);
        self.boundary_set = true;
        self
    }

    fn log(self) {
        let (logger, event) = self.inner.into_parts();
        if let Some(aware) = logger.as_event_aware() {
            aware.log_event(&event);
            return;
        }

        let message = flatten(&event.markers, &event.key_value_pairs, &event.message);
        let args = format_args_of(&event);
        match event.level {
            NativeLevel::Trace => logger.trace(&message, &args),
            NativeLevel::Debug => logger.debug(&message, &args),
            NativeLevel::Info => logger.info(&message, &args),
            NativeLevel::Warn => logger.warn(&message, &args),
            NativeLevel::Error => logger.error(&message, &args),
        }
    }
}
