use thiserror::Error;

/// Returned when a string does not name a [`Level`](crate::Level).
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unknown log level: {0}")]
pub struct ParseLevelError(pub String);

/// Returned when a [`LoggerFactory`](crate::LoggerFactory) has already been installed.
#[derive(Clone, Debug, Error)]
#[error("a logger factory has already been installed")]
pub struct SetFactoryError;
