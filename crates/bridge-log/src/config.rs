//! Configuration for the `log` backend.

use bridgelog::DEFAULT_FRAMEWORK_BOUNDARIES;
use serde::{Deserialize, Serialize};

/// Configuration for a [`LogBackend`](crate::LogBackend).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogBackendConfig {
    /// Resolve the call site of every event and attach its file, line and
    /// module path to the record
    pub include_location: bool,
    /// Boundaries skipped in addition to an event's caller boundary
    pub framework_boundaries: Vec<String>,
}

impl Default for LogBackendConfig {
    fn default() -> Self {
        Self {
            include_location: false,
            framework_boundaries: DEFAULT_FRAMEWORK_BOUNDARIES
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}

/// Builder for the `log` backend configuration
pub struct LogBackendConfigBuilder {
    config: LogBackendConfig,
}

impl LogBackendConfigBuilder {
    /// Create a new builder with default configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: LogBackendConfig::default(),
        }
    }

    /// Set whether call-site location is resolved
    #[must_use]
    pub const fn include_location(mut self, include: bool) -> Self {
        self.config.include_location = include;
        self
    }

    /// Add a framework boundary
    #[must_use]
    pub fn framework_boundary(mut self, boundary: impl Into<String>) -> Self {
        self.config.framework_boundaries.push(boundary.into());
        self
    }

    /// Build the configuration
    #[must_use]
    pub fn build(self) -> LogBackendConfig {
        self.config
    }
}

impl Default for LogBackendConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let config = LogBackendConfigBuilder::new()
            .include_location(true)
            .framework_boundary("app::logging")
            .build();
        assert!(config.include_location);
        assert_eq!(
            config.framework_boundaries,
            vec!["bridgelog_facade".to_string(), "app::logging".to_string()]
        );
    }

    #[test]
    fn test_deserialize_defaults() {
        let config: LogBackendConfig = serde_json::from_str(r#"{ "include_location": true }"#).unwrap();
        assert!(config.include_location);
        assert_eq!(config.framework_boundaries, LogBackendConfig::default().framework_boundaries);
    }
}
