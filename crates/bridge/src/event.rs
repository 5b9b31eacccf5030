//! The backend's own chainable event builder.

use std::error::Error;

use crate::native::{FormatArg, KeyValuePair, LoggingEvent, Marker, NativeLevel, NativeLogger};

/// Chainable protocol for assembling and emitting one [`LoggingEvent`].
pub trait EventBuilder<'a> {
    /// Sets the message template.
    fn set_message(&mut self, message: impl Into<String>) -> &mut Self;

    /// Attaches the error that caused the event.
    fn set_cause(&mut self, cause: &'a (dyn Error + 'static)) -> &mut Self;

    /// Appends a positional argument.
    fn add_argument(&mut self, argument: impl Into<String>) -> &mut Self;

    /// Appends a marker tag.
    fn add_marker(&mut self, marker: impl Into<Marker>) -> &mut Self;

    /// Appends a key/value pair.
    fn add_key_value(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self;

    /// Records the identifier of the adapter frame nearest the backend.
    fn set_caller_boundary(&mut self, boundary: impl Into<String>) -> &mut Self;

    /// Emits the event.
    fn log(self);
}

/// Builder handed out by a native logger.
///
/// Each [`set_caller_boundary`](EventBuilder::set_caller_boundary) call
/// overwrites the previous one, and printf-only backends receive only the
/// message, arguments and cause: markers and key/value pairs are dropped.
pub struct DefaultEventBuilder<'a> {
    logger: &'a dyn NativeLogger,
    event: LoggingEvent<'a>,
}

impl<'a> DefaultEventBuilder<'a> {
    /// Starts an event at `level` for `logger`.
    #[must_use]
    pub fn new(logger: &'a dyn NativeLogger, level: NativeLevel) -> Self {
        Self {
            logger,
            event: LoggingEvent::new(level, logger.name()),
        }
    }

    /// The event assembled so far.
    #[must_use]
    pub const fn event(&self) -> &LoggingEvent<'a> {
        &self.event
    }

    /// Splits the builder into its native logger and event.
    #[must_use]
    pub fn into_parts(self) -> (&'a dyn NativeLogger, LoggingEvent<'a>) {
        (self.logger, self.event)
    }
}

impl<'a> EventBuilder<'a> for DefaultEventBuilder<'a> {
    fn set_message(&mut self, message: impl Into<String>) -> &mut Self {
        self.event.message = message.into();
        self
    }

    fn set_cause(&mut self, cause: &'a (dyn Error + 'static)) -> &mut Self {
        self.event.cause = Some(cause);
        self
    }

    fn add_argument(&mut self, argument: impl Into<String>) -> &mut Self {
        self.event.arguments.push(argument.into());
        self
    }

    fn add_marker(&mut self, marker: impl Into<Marker>) -> &mut Self {
        self.event.markers.push(marker.into());
        self
    }

    fn add_key_value(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.event
            .key_value_pairs
            .push(KeyValuePair::new(key, value));
        self
    }

    fn set_caller_boundary(&mut self, boundary: impl Into<String>) -> &mut Self {
        self.event.caller_boundary = Some(boundary.into());
        self
    }

    fn log(self) {
        if let Some(aware) = self.logger.as_event_aware() {
            aware.log_event(&self.event);
            return;
        }
        let args = format_args_of(&self.event);
        self.logger
            .log_formatted(self.event.level, &self.event.message, &args);
    }
}

/// Positional arguments of `event` with its cause appended last.
pub(crate) fn format_args_of<'a>(event: &LoggingEvent<'a>) -> Vec<FormatArg<'a>> {
    let mut args: Vec<FormatArg<'a>> = event
        .arguments
        .iter()
        .cloned()
        .map(FormatArg::Text)
        .collect();
    if let Some(cause) = event.cause {
        args.push(FormatArg::Cause(cause));
    }
    args
}
