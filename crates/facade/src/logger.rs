//! Facade logger trait and the message/argument shapes it accepts.

use std::borrow::Cow;
use std::error::Error;
use std::fmt;
use std::sync::Arc;

use crate::Level;

/// A log message: literal text, any displayable value, or a lazy producer.
///
/// Lazy producers are evaluated at most once, on the calling thread, and only
/// when the receiving logger is enabled.
pub enum Message<'a> {
    /// Literal text
    Text(Cow<'a, str>),
    /// Any value rendered through its `Display` impl
    Display(&'a dyn fmt::Display),
    /// Producer evaluated only if the event is emitted
    Lazy(&'a dyn Fn() -> String),
}

impl<'a> Message<'a> {
    /// Wraps a producer that is only evaluated when the logger is enabled.
    #[must_use]
    pub fn lazy(producer: &'a dyn Fn() -> String) -> Self {
        Self::Lazy(producer)
    }

    /// Wraps a value whose `Display` output becomes the message.
    #[must_use]
    pub fn display(value: &'a dyn fmt::Display) -> Self {
        Self::Display(value)
    }

    /// Resolves the message to text, running the producer if there is one.
    #[must_use]
    pub fn resolve(self) -> String {
        match self {
            Self::Text(text) => text.into_owned(),
            Self::Display(value) => value.to_string(),
            Self::Lazy(producer) => producer(),
        }
    }
}

impl fmt::Debug for Message<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Self::Display(value) => f.debug_tuple("Display").field(&value.to_string()).finish(),
            Self::Lazy(_) => f.write_str("Lazy(..)"),
        }
    }
}

impl<'a> From<&'a str> for Message<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(Cow::Borrowed(text))
    }
}

impl From<String> for Message<'_> {
    fn from(text: String) -> Self {
        Self::Text(Cow::Owned(text))
    }
}

impl<'a> From<Cow<'a, str>> for Message<'a> {
    fn from(text: Cow<'a, str>) -> Self {
        Self::Text(text)
    }
}

/// A positional message argument: a value or a lazy producer.
pub enum Arg<'a> {
    /// Borrowed text
    Text(&'a str),
    /// Any value rendered through its `Display` impl
    Value(&'a dyn fmt::Display),
    /// Producer evaluated only if the event is emitted
    Lazy(&'a dyn Fn() -> String),
}

impl<'a> Arg<'a> {
    /// Wraps a value whose `Display` output becomes the argument.
    #[must_use]
    pub fn value(value: &'a dyn fmt::Display) -> Self {
        Self::Value(value)
    }

    /// Wraps a producer that is only evaluated when the logger is enabled.
    #[must_use]
    pub fn lazy(producer: &'a dyn Fn() -> String) -> Self {
        Self::Lazy(producer)
    }

    /// Resolves the argument to text, running the producer if there is one.
    #[must_use]
    pub fn resolve(&self) -> String {
        match self {
            Self::Text(text) => (*text).to_string(),
            Self::Value(value) => value.to_string(),
            Self::Lazy(producer) => producer(),
        }
    }
}

impl fmt::Debug for Arg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Self::Value(value) => f.debug_tuple("Value").field(&value.to_string()).finish(),
            Self::Lazy(_) => f.write_str("Lazy(..)"),
        }
    }
}

impl<'a> From<&'a str> for Arg<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(text)
    }
}

impl<'a, T: fmt::Display> From<&'a T> for Arg<'a> {
    fn from(value: &'a T) -> Self {
        Self::Value(value)
    }
}

/// A named logger fixed at one level.
///
/// Handles are cheap to share (`Arc<dyn Logger>`) and immutable; switching
/// level yields another handle rather than mutating this one.
pub trait Logger: Send + Sync + 'static {
    /// Name of the logging scope, conventionally the owning type's path.
    fn name(&self) -> &str;

    /// Level every event from this handle is emitted at.
    fn level(&self) -> Level;

    /// Whether events from this handle reach the backend.
    fn is_enabled(&self) -> bool;

    /// Returns the handle for the same name at `level`.
    ///
    /// Returns `self` when the level is unchanged and the shared no-op logger
    /// for [`Level::Off`].
    fn at_level(self: Arc<Self>, level: Level) -> Arc<dyn Logger>;

    /// Emits one event.
    ///
    /// Implementations return before resolving `message` or any of `args`
    /// when the handle is disabled.
    fn emit(&self, cause: Option<&(dyn Error + 'static)>, message: Message<'_>, args: &[Arg<'_>]);
}

/// Convenience logging methods available on every [`Logger`].
pub trait LoggerExt: Logger {
    /// Logs a message.
    #[inline]
    fn log<'a>(&self, message: impl Into<Message<'a>>) {
        self.emit(None, message.into(), &[]);
    }

    /// Logs a message template with positional `{}` arguments.
    #[inline]
    fn log_args<'a>(&self, message: impl Into<Message<'a>>, args: &[Arg<'_>]) {
        self.emit(None, message.into(), args);
    }

    /// Logs an error; its `Display` text becomes the message.
    #[inline]
    fn log_cause(&self, error: &(dyn Error + 'static)) {
        let text = || error.to_string();
        self.emit(Some(error), Message::lazy(&text), &[]);
    }

    /// Logs an error with an explicit message.
    #[inline]
    fn log_cause_msg<'a>(&self, error: &(dyn Error + 'static), message: impl Into<Message<'a>>) {
        self.emit(Some(error), message.into(), &[]);
    }

    /// Logs an error with a message template and positional arguments.
    #[inline]
    fn log_cause_args<'a>(
        &self,
        error: &(dyn Error + 'static),
        message: impl Into<Message<'a>>,
        args: &[Arg<'_>],
    ) {
        self.emit(Some(error), message.into(), args);
    }
}

impl<T: Logger + ?Sized> LoggerExt for T {}
