//! Logging setup
//!
//! Service code logs through `tracing` macros. This module installs the
//! global subscriber once at startup, in human-readable or JSON form.
//! `RUST_LOG` overrides the configured level.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Output format for log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    /// One JSON object per line
    Json,
}

/// Logging section of the service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub format: LogFormat,

    /// Filter directive, e.g. "info" or "shopfloor=debug,tower_http=info"
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::default(),
            level: default_level(),
        }
    }
}

impl LoggingConfig {
    /// Builds the filter, preferring `RUST_LOG` when set.
    pub fn env_filter(&self) -> Result<EnvFilter, ObservabilityError> {
        if let Ok(filter) = EnvFilter::try_from_default_env() {
            return Ok(filter);
        }
        EnvFilter::try_new(&self.level)
            .map_err(|e| ObservabilityError::InvalidLevel(format!("{}: {}", self.level, e)))
    }
}

#[derive(Debug, Error)]
pub enum ObservabilityError {
    #[error("Invalid log level: {0}")]
    InvalidLevel(String),

    #[error("Failed to install log subscriber: {0}")]
    Install(String),
}

/// Installs the global subscriber. Fails if one is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<(), ObservabilityError> {
    let filter = config.env_filter()?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let result = match config.format {
        LogFormat::Pretty => builder.with_target(true).try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    result.map_err(|e| ObservabilityError::Install(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LoggingConfig::default();
        assert_eq!(config.format, LogFormat::Pretty);
        assert_eq!(config.level, "info");
    }

    #[test]
    fn test_deserialize_json_format() {
        let config: LoggingConfig =
            serde_json::from_str(r#"{"format": "json", "level": "debug"}"#).unwrap();
        assert_eq!(config.format, LogFormat::Json);
        assert_eq!(config.level, "debug");
    }

    #[test]
    fn test_level_directive_parses() {
        let config = LoggingConfig {
            format: LogFormat::Json,
            level: "shopfloor=debug,tower_http=info".into(),
        };
        assert!(config.env_filter().is_ok());
    }
}
