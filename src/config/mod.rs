use crate::core::{Result, ServiceObjectError};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::str::FromStr;

/// Output format for the tracing subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Pretty => write!(f, "pretty"),
            LogFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            _ => Err(format!("Invalid log format: {}", s)),
        }
    }
}

/// Library configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Default `EnvFilter` directive when `RUST_LOG` is not set
    pub log_level: String,
    pub log_format: LogFormat,
    /// Log domain failures at WARN instead of DEBUG
    pub warn_on_failure: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            warn_on_failure: true,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let config = Config {
            log_level: lookup("SERVICE_OBJECT_LOG_LEVEL").unwrap_or(defaults.log_level),
            log_format: match lookup("SERVICE_OBJECT_LOG_FORMAT") {
                Some(raw) => raw.parse::<LogFormat>().map_err(ServiceObjectError::Configuration)?,
                None => defaults.log_format,
            },
            warn_on_failure: match lookup("SERVICE_OBJECT_WARN_ON_FAILURE") {
                Some(raw) => raw.trim().parse::<bool>().map_err(|_| {
                    ServiceObjectError::configuration(
                        "Invalid SERVICE_OBJECT_WARN_ON_FAILURE",
                    )
                })?,
                None => defaults.warn_on_failure,
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.log_level.trim().is_empty() {
            return Err(ServiceObjectError::configuration(
                "Log level must not be empty",
            ));
        }

        Ok(())
    }
}
