//! Registry options.

use bridgelog_facade::Level;
use serde::{Deserialize, Serialize};

/// How a logger decides whether it is enabled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnabledCheck {
    /// Ask the native logger on every call.
    #[default]
    Live,

    /// Use the answer captured when the logger was constructed.
    ///
    /// Cached loggers keep that answer for the life of the registry, so later
    /// threshold changes in the backend are not observed.
    Snapshot,
}

/// Options for a [`LoggerRegistry`](crate::LoggerRegistry).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryOptions {
    /// Level of loggers obtained by name alone
    pub default_level: Level,
    /// Enablement policy of every logger the registry constructs
    pub enabled_check: EnabledCheck,
}

impl Default for RegistryOptions {
    fn default() -> Self {
        Self {
            default_level: Level::Info,
            enabled_check: EnabledCheck::Live,
        }
    }
}

impl RegistryOptions {
    /// Sets the default level.
    #[must_use]
    pub const fn with_default_level(mut self, level: Level) -> Self {
        self.default_level = level;
        self
    }

    /// Sets the enablement policy.
    #[must_use]
    pub const fn with_enabled_check(mut self, check: EnabledCheck) -> Self {
        self.enabled_check = check;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = RegistryOptions::default();
        assert_eq!(options.default_level, Level::Info);
        assert_eq!(options.enabled_check, EnabledCheck::Live);
    }

    #[test]
    fn test_partial_deserialize_keeps_defaults() {
        let options: RegistryOptions =
            serde_json::from_str(r#"{ "enabled_check": "snapshot" }"#).unwrap();
        assert_eq!(options.default_level, Level::Info);
        assert_eq!(options.enabled_check, EnabledCheck::Snapshot);

        let options: RegistryOptions = serde_json::from_str(r#"{ "default_level": "warn" }"#).unwrap();
        assert_eq!(options, RegistryOptions::default().with_default_level(Level::Warn));
    }

    #[test]
    fn test_unknown_level_is_rejected() {
        assert!(serde_json::from_str::<RegistryOptions>(r#"{ "default_level": "loud" }"#).is_err());
    }
}
