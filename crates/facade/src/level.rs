//! Facade log levels.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ParseLevelError;

/// Severity of a logger, ordered from most verbose to completely silent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Verbose tracing information
    Trace,
    /// Debugging information
    Debug,
    /// General information
    Info,
    /// Warnings
    Warn,
    /// Errors
    Error,
    /// Never enabled
    Off,
}

impl Level {
    /// All levels, in ascending order.
    pub const ALL: [Self; 6] = [
        Self::Trace,
        Self::Debug,
        Self::Info,
        Self::Warn,
        Self::Error,
        Self::Off,
    ];

    /// Upper-case name of the level.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "TRACE",
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
            Self::Off => "OFF",
        }
    }

    /// Whether this is the [`Level::Off`] sentinel.
    #[must_use]
    pub const fn is_off(self) -> bool {
        matches!(self, Self::Off)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseLevelError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_ordering() {
        assert!(Level::Trace < Level::Debug);
        assert!(Level::Debug < Level::Info);
        assert!(Level::Info < Level::Warn);
        assert!(Level::Warn < Level::Error);
        assert!(Level::Error < Level::Off);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("warn".parse::<Level>().unwrap(), Level::Warn);
        assert_eq!(" Error ".parse::<Level>().unwrap(), Level::Error);
        assert_eq!("OFF".parse::<Level>().unwrap(), Level::Off);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "verbose".parse::<Level>().unwrap_err();
        assert_eq!(err.to_string(), "unknown log level: verbose");
    }

    #[test]
    fn test_display() {
        assert_eq!(Level::Info.to_string(), "INFO");
        assert_eq!(format!("{}", Level::Off), "OFF");
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&Level::Debug).unwrap(), "\"debug\"");
        let level: Level = serde_json::from_str("\"trace\"").unwrap();
        assert_eq!(level, Level::Trace);
    }
}
