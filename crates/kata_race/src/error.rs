//! Error types for racing and probing.

use std::time::Duration;

use thiserror::Error;

/// Error type for race operations.
#[derive(Debug, Error)]
pub enum RaceError {
    /// Neither probe completed within the configured limit.
    #[error("Timed out after {timeout:?} waiting for either target to respond")]
    Timeout { timeout: Duration },
}

/// Error type for a single probe.
///
/// A failed probe still counts as completed, so these errors never leave a
/// race. They are logged and dropped.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// Network request failed.
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    /// Failed to build HTTP client.
    #[error("Failed to build HTTP client: {0}")]
    ClientBuildError(String),

    /// The probe failed for another reason.
    #[error("Probe failed: {0}")]
    Failed(String),
}

/// Error type for loading a race configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File system I/O error.
    #[error("Failed to read config: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON parsing failed.
    #[error("Invalid config: {0}")]
    ParseError(#[from] serde_json::Error),
}
