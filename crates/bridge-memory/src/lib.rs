//! In-memory native backend for bridgelog.
//!
//! Records every event it receives so tests can assert on what reached the
//! backend and through which path. Thresholds can be changed at any time.
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use bridgelog::{
    EventAware, FormatArg, KeyValuePair, Level, LoggingEvent, Marker, NativeLevel, NativeLogger,
    NativeLoggerFactory, format_message,
};
use parking_lot::{Mutex, RwLock};

/// Which entry points the backend's loggers expose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Loggers accept structured events.
    Structured,
    /// Loggers only accept printf-style calls.
    Formatted,
}

/// One event as received by the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedEvent {
    /// Level of the event
    pub level: NativeLevel,
    /// Name of the native logger that received it
    pub logger: String,
    /// Message template as received
    pub message: String,
    /// Template with placeholders substituted
    pub rendered: String,
    /// Positional arguments as received; on the printf path this includes a
    /// trailing cause
    pub arguments: Vec<String>,
    /// Display text of the cause
    pub cause: Option<String>,
    /// Markers, structured path only
    pub markers: Vec<Marker>,
    /// Key/value pairs, structured path only
    pub key_value_pairs: Vec<KeyValuePair>,
    /// Caller boundary, structured path only
    pub caller_boundary: Option<String>,
    /// Whether the event came through [`EventAware::log_event`]
    pub structured: bool,
}

struct Shared {
    mode: Mode,
    default_threshold: RwLock<Level>,
    thresholds: RwLock<HashMap<String, Level>>,
    events: Mutex<Vec<CapturedEvent>>,
    lookups: AtomicUsize,
}

/// Native logger factory that records events in memory.
///
/// Clones share the same records and thresholds.
#[derive(Clone)]
pub struct MemoryBackend {
    shared: Arc<Shared>,
}

impl MemoryBackend {
    /// A backend whose loggers accept structured events.
    #[must_use]
    pub fn structured() -> Self {
        Self::new(Mode::Structured)
    }

    /// A backend whose loggers only accept printf-style calls.
    #[must_use]
    pub fn formatted() -> Self {
        Self::new(Mode::Formatted)
    }

    /// A backend in `mode`, enabled from [`Level::Trace`] up.
    #[must_use]
    pub fn new(mode: Mode) -> Self {
        Self {
            shared: Arc::new(Shared {
                mode,
                default_threshold: RwLock::new(Level::Trace),
                thresholds: RwLock::new(HashMap::new()),
                events: Mutex::new(Vec::new()),
                lookups: AtomicUsize::new(0),
            }),
        }
    }

    /// Mode of this backend.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.shared.mode
    }

    /// Sets the lowest enabled level for `name`; [`Level::Off`] disables it.
    pub fn set_threshold(&self, name: &str, threshold: Level) {
        self.shared
            .thresholds
            .write()
            .insert(name.to_string(), threshold);
    }

    /// Sets the lowest enabled level for names without their own threshold.
    pub fn set_default_threshold(&self, threshold: Level) {
        *self.shared.default_threshold.write() = threshold;
    }

    /// Events received so far, oldest first.
    #[must_use]
    pub fn events(&self) -> Vec<CapturedEvent> {
        self.shared.events.lock().clone()
    }

    /// Forgets all received events.
    pub fn clear(&self) {
        self.shared.events.lock().clear();
    }

    /// How many native loggers the backend has created.
    #[must_use]
    pub fn lookups(&self) -> usize {
        self.shared.lookups.load(Ordering::SeqCst)
    }
}

impl Default for MemoryBackend {
    fn default() -> Self {
        Self::structured()
    }
}

impl NativeLoggerFactory for MemoryBackend {
    fn logger(&self, name: &str) -> Arc<dyn NativeLogger> {
        self.shared.lookups.fetch_add(1, Ordering::SeqCst);
        Arc::new(MemoryLogger {
            name: name.to_string(),
            shared: Arc::clone(&self.shared),
        })
    }
}

struct MemoryLogger {
    name: String,
    shared: Arc<Shared>,
}

impl MemoryLogger {
    fn record(&self, event: CapturedEvent) {
        self.shared.events.lock().push(event);
    }
}

impl NativeLogger for MemoryLogger {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_enabled(&self, level: NativeLevel) -> bool {
        let threshold = self
            .shared
            .thresholds
            .read()
            .get(&self.name)
            .copied()
            .unwrap_or_else(|| *self.shared.default_threshold.read());
        Level::from(level) >= threshold
    }

    fn log_formatted(&self, level: NativeLevel, template: &str, args: &[FormatArg<'_>]) {
        let formatted = format_message(template, args);
        self.record(CapturedEvent {
            level,
            logger: self.name.clone(),
            message: template.to_string(),
            rendered: formatted.message,
            arguments: args.iter().map(ToString::to_string).collect(),
            cause: formatted.cause.map(ToString::to_string),
            markers: Vec::new(),
            key_value_pairs: Vec::new(),
            caller_boundary: None,
            structured: false,
        });
    }

    fn as_event_aware(&self) -> Option<&dyn EventAware> {
        match self.shared.mode {
            Mode::Structured => Some(self),
            Mode::Formatted => None,
        }
    }
}

impl EventAware for MemoryLogger {
    fn log_event(&self, event: &LoggingEvent<'_>) {
        let args: Vec<FormatArg<'_>> = event
            .arguments
            .iter()
            .cloned()
            .map(FormatArg::Text)
            .collect();
        self.record(CapturedEvent {
            level: event.level,
            logger: event.logger_name.to_string(),
            message: event.message.clone(),
            rendered: format_message(&event.message, &args).message,
            arguments: event.arguments.clone(),
            cause: event.cause.map(ToString::to_string),
            markers: event.markers.clone(),
            key_value_pairs: event.key_value_pairs.clone(),
            caller_boundary: event.caller_boundary.clone(),
            structured: true,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds() {
        let backend = MemoryBackend::structured();
        let logger = backend.logger("svc");
        assert!(logger.is_trace_enabled());

        backend.set_default_threshold(Level::Warn);
        assert!(!logger.is_info_enabled());
        assert!(logger.is_warn_enabled());

        backend.set_threshold("svc", Level::Debug);
        assert!(logger.is_debug_enabled());
        assert!(!logger.is_trace_enabled());

        backend.set_threshold("svc", Level::Off);
        assert!(!logger.is_error_enabled());
    }

    #[test]
    fn test_mode_controls_event_awareness() {
        assert_eq!(MemoryBackend::default().mode(), Mode::Structured);
        assert_eq!(MemoryBackend::formatted().mode(), Mode::Formatted);
        assert!(MemoryBackend::structured().logger("a").as_event_aware().is_some());
        assert!(MemoryBackend::formatted().logger("a").as_event_aware().is_none());
    }

    #[test]
    fn test_printf_capture() {
        let backend = MemoryBackend::formatted();
        let logger = backend.logger("svc");
        let cause = std::io::Error::other("eof");
        logger.warn("read {} bytes", &[FormatArg::Text("12".into()), FormatArg::Cause(&cause)]);

        let events = backend.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].level, NativeLevel::Warn);
        assert_eq!(events[0].rendered, "read 12 bytes");
        assert_eq!(events[0].arguments, vec!["12".to_string(), "eof".to_string()]);
        assert_eq!(events[0].cause.as_deref(), Some("eof"));
        assert!(!events[0].structured);
    }

    #[test]
    fn test_lookups_and_clear() {
        let backend = MemoryBackend::default();
        let shared = backend.clone();
        let logger = backend.logger("a");
        let _ = backend.logger("b");
        logger.info("x", &[]);
        assert_eq!(shared.lookups(), 2);
        assert_eq!(shared.events().len(), 1);
        shared.clear();
        assert!(backend.events().is_empty());
    }
}
