//! Race configuration.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Configuration for a race.
///
/// ```json
/// { "timeout_ms": 5000 }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RaceConfig {
    /// How long to wait for either target, in milliseconds.
    /// Default: None (wait forever)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,
}

impl RaceConfig {
    /// Creates a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_json(&content)
    }

    /// Parses configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Sets the race timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_ms = Some(u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX));
        self
    }

    /// Returns the race timeout, if any.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_config_new() {
        let config = RaceConfig::new();
        assert_eq!(config.timeout(), None);
    }

    #[test]
    fn test_config_from_json() {
        let config = RaceConfig::from_json(r#"{ "timeout_ms": 250 }"#).unwrap();
        assert_eq!(config.timeout(), Some(Duration::from_millis(250)));
    }

    #[test]
    fn test_config_empty_object() {
        let config = RaceConfig::from_json("{}").unwrap();
        assert_eq!(config, RaceConfig::default());
    }

    #[test]
    fn test_config_rejects_unknown_fields() {
        let result = RaceConfig::from_json(r#"{ "timeout": 250 }"#);
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "timeout_ms": 1000 }}"#).unwrap();

        let config = RaceConfig::from_file(file.path()).unwrap();
        assert_eq!(config.timeout(), Some(Duration::from_secs(1)));
    }

    #[test]
    fn test_config_missing_file() {
        let result = RaceConfig::from_file("/nonexistent/kata.json");
        assert!(matches!(result, Err(ConfigError::IoError(_))));
    }

    #[test]
    fn test_with_timeout_round_trips_through_json() {
        let config = RaceConfig::new().with_timeout(Duration::from_millis(1500));
        let json = serde_json::to_string(&config).unwrap();

        assert_eq!(json, r#"{"timeout_ms":1500}"#);
        assert_eq!(RaceConfig::from_json(&json).unwrap(), config);
    }
}
