//! bridgelog native backend over the [`log`] crate.
//!
//! Events reach the installed `log` logger as records targeted at the
//! bridgelog logger name. Markers, key/value pairs and the cause travel as
//! `log` key-values (`marker`, the pair's own key, `exception`). With
//! [`LogBackendConfig::include_location`] set, each record also carries the
//! file, line and module path of the application code that logged it.
//!
//! ```no_run
//! use bridgelog::{LoggerRegistry, RegistryOptions};
//! use bridgelog_log::LogBackend;
//!
//! let backend = LogBackend::with_config(LogBackend::builder().include_location(true).build());
//! let _registry = LoggerRegistry::with_options(backend, RegistryOptions::default())
//!     .install()
//!     .expect("no other registry installed");
//! ```
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod config;
mod logger;

pub use config::{LogBackendConfig, LogBackendConfigBuilder};
pub use logger::{LogBackend, LogLogger};
