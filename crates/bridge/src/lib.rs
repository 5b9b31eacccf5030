//! Binds the `bridgelog-facade` API to a native logging backend.
//!
//! The [`LoggerRegistry`] hands out one immutable [`BridgeLogger`] per
//! (name, level), built on top of a [`NativeLoggerFactory`]. Each event
//! passes through a [`CallerBoundaryEventBuilder`] that stamps the adapter's
//! caller boundary exactly once, then reaches the backend either as a
//! structured [`LoggingEvent`] or, for printf-only backends, as a flattened
//! message template with positional arguments.
//!
//! ```
//! use bridgelog::{LoggerRegistry, Level, LoggerExt};
//! # use bridgelog::{NativeLevel, NativeLogger, NativeLoggerFactory, FormatArg};
//! # use std::sync::Arc;
//! # struct Quiet;
//! # impl NativeLogger for Quiet {
//! #     fn name(&self) -> &str { "quiet" }
//! #     fn is_enabled(&self, _level: NativeLevel) -> bool { false }
//! #     fn log_formatted(&self, _level: NativeLevel, _template: &str, _args: &[FormatArg<'_>]) {}
//! # }
//! # struct Backend;
//! # impl NativeLoggerFactory for Backend {
//! #     fn logger(&self, _name: &str) -> Arc<dyn NativeLogger> { Arc::new(Quiet) }
//! # }
//!
//! let registry = LoggerRegistry::new(Backend);
//! let logger = registry.get("app::jobs", Level::Info);
//! logger.log("scheduler started");
//! ```
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod builder;
pub mod caller;
mod config;
mod error;
mod event;
mod flatten;
mod format;
mod level;
mod logger;
mod native;
mod registry;

pub use builder::CallerBoundaryEventBuilder;
pub use caller::{
    CallerFrame, DEFAULT_FRAMEWORK_BOUNDARIES, most_recent_caller_of, most_recent_caller_of_any,
};
pub use config::{EnabledCheck, RegistryOptions};
pub use error::{Error, Result};
pub use event::{DefaultEventBuilder, EventBuilder};
pub use flatten::flatten;
pub use format::{FormattedMessage, format_message};
pub use level::{from_native, to_native};
pub use logger::BridgeLogger;
pub use native::{
    EventAware, FormatArg, KeyValuePair, LoggingEvent, Marker, NativeLevel, NativeLogger,
    NativeLoggerFactory,
};
pub use registry::{LoggerRegistry, ROOT_LOGGER_NAME, init};

pub use bridgelog_facade::{Arg, Level, Logger, LoggerExt, LoggerFactory, Message, noop};
