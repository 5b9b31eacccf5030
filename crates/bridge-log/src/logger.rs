use std::error::Error;
use std::path::Path;
use std::sync::Arc;

use bridgelog::{
    CallerFrame, EventAware, FormatArg, KeyValuePair, LoggingEvent, Marker, NativeLevel,
    NativeLogger, NativeLoggerFactory, format_message, most_recent_caller_of_any,
};
use log::{Metadata, Record};

use crate::config::{LogBackendConfig, LogBackendConfigBuilder};

/// Key under which each marker is attached.
const MARKER_KEY: &str = "marker";

/// Key under which the cause's display text is attached.
const EXCEPTION_KEY: &str = "exception";

/// Native logger factory writing to the installed `log` logger.
#[derive(Debug, Clone, Default)]
pub struct LogBackend {
    config: Arc<LogBackendConfig>,
}

impl LogBackend {
    /// Backend with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend with `config`.
    #[must_use]
    pub fn with_config(config: LogBackendConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Starts a configuration for [`LogBackend::with_config`].
    #[must_use]
    pub fn builder() -> LogBackendConfigBuilder {
        LogBackendConfigBuilder::new()
    }

    /// Configuration in use.
    #[must_use]
    pub fn config(&self) -> &LogBackendConfig {
        &self.config
    }
}

impl NativeLoggerFactory for LogBackend {
    fn logger(&self, name: &str) -> Arc<dyn NativeLogger> {
        Arc::new(LogLogger {
            name: name.to_string(),
            config: Arc::clone(&self.config),
        })
    }
}

/// Native logger for one name, targeting `log` records at that name.
#[derive(Debug)]
pub struct LogLogger {
    name: String,
    config: Arc<LogBackendConfig>,
}

impl LogLogger {
    fn locate(&self, boundary: Option<&str>) -> Option<CallerFrame> {
        let boundaries: Vec<&str> = boundary
            .into_iter()
            .chain(self.config.framework_boundaries.iter().map(String::as_str))
            .collect();
        most_recent_caller_of_any(&boundaries).ok()
    }

    fn write(
        &self,
        level: NativeLevel,
        message: &str,
        cause: Option<&(dyn Error + 'static)>,
        markers: &[Marker],
        pairs: &[KeyValuePair],
        boundary: Option<&str>,
    ) {
        let cause = cause.map(ToString::to_string);
        let mut kvs: Vec<(&str, &str)> = Vec::with_capacity(markers.len() + pairs.len() + 1);
        kvs.extend(markers.iter().map(|marker| (MARKER_KEY, marker.name())));
        kvs.extend(pairs.iter().map(|pair| (pair.key.as_str(), pair.value.as_str())));
        if let Some(cause) = &cause {
            kvs.push((EXCEPTION_KEY, cause.as_str()));
        }
        let kvs: &[(&str, &str)] = &kvs;

        let location = if self.config.include_location {
            self.locate(boundary)
        } else {
            None
        };
        let file = location
            .as_ref()
            .and_then(|frame| frame.file.as_deref())
            .and_then(Path::to_str);

        log::logger().log(
            &Record::builder()
                .level(map_level(level))
                .target(&self.name)
                .args(format_args!("{message}"))
                .key_values(&kvs)
                .file(file)
                .line(location.as_ref().and_then(|frame| frame.line))
                .module_path(location.as_ref().map(|frame| frame.owner.as_str()))
                .build(),
        );
    }
}

impl NativeLogger for LogLogger {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_enabled(&self, level: NativeLevel) -> bool {
        let level = map_level(level);
        level <= log::max_level()
            && log::logger().enabled(&Metadata::builder().level(level).target(&self.name).build())
    }

    fn log_formatted(&self, level: NativeLevel, template: &str, args: &[FormatArg<'_>]) {
        let formatted = format_message(template, args);
        self.write(level, &formatted.message, formatted.cause, &[], &[], None);
    }

    fn as_event_aware(&self) -> Option<&dyn EventAware> {
        Some(self)
    }
}

impl EventAware for LogLogger {
    fn log_event(&self, event: &LoggingEvent<'_>) {
        let args: Vec<FormatArg<'_>> = event
            .arguments
            .iter()
            .cloned()
            .map(FormatArg::Text)
            .collect();
        let formatted = format_message(&event.message, &args);
        self.write(
            event.level,
            &formatted.message,
            event.cause,
            &event.markers,
            &event.key_value_pairs,
            event.caller_boundary.as_deref(),
        );
    }
}

/// Map native levels to `log` levels
const fn map_level(level: NativeLevel) -> log::Level {
    match level {
        NativeLevel::Error => log::Level::Error,
        NativeLevel::Warn => log::Level::Warn,
        NativeLevel::Info => log::Level::Info,
        NativeLevel::Debug => log::Level::Debug,
        NativeLevel::Trace => log::Level::Trace,
    }
}
