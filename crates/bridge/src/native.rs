//! Contract the bridge requires from a native logging backend.

use std::error::Error;
use std::fmt;
use std::sync::Arc;

/// Levels understood by native backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NativeLevel {
    /// Trace
    Trace,
    /// Debug
    Debug,
    /// Info
    Info,
    /// Warn
    Warn,
    /// Error
    Error,
}

impl NativeLevel {
    /// Number of native levels.
    pub const COUNT: usize = 5;

    /// All native levels, in ascending order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Trace,
        Self::Debug,
        Self::Info,
        Self::Warn,
        Self::Error,
    ];

    /// Position of the level in [`NativeLevel::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for NativeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Trace => "TRACE",
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        })
    }
}

/// A named tag attached to an event.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Marker(String);

impl Marker {
    /// Creates a marker.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Name of the marker.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Marker {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Marker {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// A key/value pair attached to an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyValuePair {
    /// Key
    pub key: String,
    /// Value
    pub value: String,
}

impl KeyValuePair {
    /// Creates a pair.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for KeyValuePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

/// Positional argument of a printf-style native call.
#[derive(Debug, Clone)]
pub enum FormatArg<'a> {
    /// Resolved argument text
    Text(String),
    /// An error; when it is the last argument backends treat it as the cause
    Cause(&'a (dyn Error + 'static)),
}

impl fmt::Display for FormatArg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Cause(cause) => fmt::Display::fmt(cause, f),
        }
    }
}

/// One log record as assembled by an event builder.
#[derive(Debug, Clone)]
pub struct LoggingEvent<'a> {
    /// Level of the event
    pub level: NativeLevel,
    /// Name of the native logger the event is addressed to
    pub logger_name: &'a str,
    /// Message template
    pub message: String,
    /// Positional arguments, in call order
    pub arguments: Vec<String>,
    /// Error that caused the event
    pub cause: Option<&'a (dyn Error + 'static)>,
    /// Marker tags, in attachment order
    pub markers: Vec<Marker>,
    /// Key/value pairs, in attachment order
    pub key_value_pairs: Vec<KeyValuePair>,
    /// Identifier of the adapter frame nearest the backend
    pub caller_boundary: Option<String>,
}

impl<'a> LoggingEvent<'a> {
    /// Creates an empty event.
    #[must_use]
    pub const fn new(level: NativeLevel, logger_name: &'a str) -> Self {
        Self {
            level,
            logger_name,
            message: String::new(),
            arguments: Vec::new(),
            cause: None,
            markers: Vec::new(),
            key_value_pairs: Vec::new(),
            caller_boundary: None,
        }
    }
}

/// Native logger that accepts structured events.
pub trait EventAware: Send + Sync {
    /// Emits a structured event.
    fn log_event(&self, event: &LoggingEvent<'_>);
}

/// A backend logger for one name.
pub trait NativeLogger: Send + Sync {
    /// Name the logger was created for.
    fn name(&self) -> &str;

    /// Whether `level` is enabled for this logger.
    fn is_enabled(&self, level: NativeLevel) -> bool;

    /// Emits `template` with positional `{}` arguments.
    fn log_formatted(&self, level: NativeLevel, template: &str, args: &[FormatArg<'_>]);

    /// The structured entry point, for backends that have one.
    fn as_event_aware(&self) -> Option<&dyn EventAware> {
        None
    }

    /// Whether trace is enabled.
    fn is_trace_enabled(&self) -> bool {
        self.is_enabled(NativeLevel::Trace)
    }

    /// Whether debug is enabled.
    fn is_debug_enabled(&self) -> bool {
        self.is_enabled(NativeLevel::Debug)
    }

    /// Whether info is enabled.
    fn is_info_enabled(&self) -> bool {
        self.is_enabled(NativeLevel::Info)
    }

    /// Whether warn is enabled.
    fn is_warn_enabled(&self) -> bool {
        self.is_enabled(NativeLevel::Warn)
    }

    /// Whether error is enabled.
    fn is_error_enabled(&self) -> bool {
        self.is_enabled(NativeLevel::Error)
    }

    /// Emits a trace template.
    fn trace(&self, template: &str, args: &[FormatArg<'_>]) {
        self.log_formatted(NativeLevel::Trace, template, args);
    }

    /// Emits a debug template.
    fn debug(&self, template: &str, args: &[FormatArg<'_>]) {
        self.log_formatted(NativeLevel::Debug, template, args);
    }

    /// Emits an info template.
    fn info(&self, template: &str, args: &[FormatArg<'_>]) {
        self.log_formatted(NativeLevel::Info, template, args);
    }

    /// Emits a warn template.
    fn warn(&self, template: &str, args: &[FormatArg<'_>]) {
        self.log_formatted(NativeLevel::Warn, template, args);
    }

    /// Emits an error template.
    fn error(&self, template: &str, args: &[FormatArg<'_>]) {
        self.log_formatted(NativeLevel::Error, template, args);
    }
}

/// Creates native loggers by name.
pub trait NativeLoggerFactory: Send + Sync + 'static {
    /// Returns the native logger for `name`.
    fn logger(&self, name: &str) -> Arc<dyn NativeLogger>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_level_index_matches_all() {
        for (index, level) in NativeLevel::ALL.into_iter().enumerate() {
            assert_eq!(level.index(), index);
        }
    }

    #[test]
    fn test_format_arg_display() {
        let error = std::io::Error::other("boom");
        assert_eq!(FormatArg::Text("a".into()).to_string(), "a");
        assert_eq!(FormatArg::Cause(&error).to_string(), "boom");
    }

    #[test]
    fn test_key_value_pair_display() {
        assert_eq!(KeyValuePair::new("user", "42").to_string(), "user=42");
    }
}
