//! Minimal level-based logging facade.
//!
//! Application code logs through [`Logger`] handles obtained from [`instance`]
//! or [`logger`]. The facade never exposes backend types; a binding installs a
//! [`LoggerFactory`] once per process and every handle it hands out routes
//! through that binding. Until a factory is installed, every handle is the
//! shared [`NoopLogger`].
//!
//! Messages and arguments may be literal or lazy. Lazy producers only run
//! when the logger is enabled:
//!
//! ```
//! use bridgelog_facade::{Arg, LoggerExt, Message};
//!
//! let logger = bridgelog_facade::logger("app::startup");
//! let expensive = || String::from("computed");
//! logger.log_args("state: {}", &[Arg::lazy(&expensive)]);
//! logger.log(Message::lazy(&|| format!("{} workers", 4)));
//! ```
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod error;
mod factory;
mod level;
mod logger;
mod noop;

pub use error::{ParseLevelError, SetFactoryError};
pub use factory::{LoggerFactory, factory, instance, logger, set_factory};
pub use level::Level;
pub use logger::{Arg, Logger, LoggerExt, Message};
pub use noop::{NoopLogger, noop};

/// Path prefix of the facade's public access point.
///
/// Every frame whose owner lies beneath this path belongs to the facade and is
/// skipped when the calling application code is resolved.
pub const ACCESS_POINT: &str = module_path!();

/// Logs a `format!`-style message, formatting only when the logger is enabled.
///
/// The logger may be any reference or smart pointer to a [`Logger`].
///
/// ```
/// use bridgelog_facade::{Level, Logger, log};
///
/// let logger = bridgelog_facade::noop();
/// let attempts = 3;
/// log!(logger, "retrying after {attempts} attempts");
/// assert_eq!(logger.level(), Level::Off);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $($arg:tt)*) => {{
        let logger = &$logger;
        let logger: &dyn $crate::Logger = &**logger;
        if $crate::Logger::is_enabled(logger) {
            $crate::LoggerExt::log(logger, ::std::format!($($arg)*));
        }
    }};
}
