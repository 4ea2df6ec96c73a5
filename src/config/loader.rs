//! Configuration loading from disk and environment.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::ClientConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<ClientConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: ClientConfig = toml::from_str(&content)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    tracing::debug!(path = %path.display(), origin = %config.origin, "Configuration loaded");
    Ok(config)
}

impl ClientConfig {
    /// Overlay environment variables onto `self`.
    ///
    /// - `MCSM_ORIGIN`: panel origin
    /// - `MCSM_API_KEY`: API key
    /// - `MCSM_USER_AGENT`: user agent header
    /// - `MCSM_LOG_LEVEL`: log level
    pub fn merge_env(self) -> Self {
        self.merge_from(|name| std::env::var(name).ok())
    }

    /// Build a validated configuration from defaults plus environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Self::default().merge_env();
        validate_config(&config).map_err(ConfigError::Validation)?;
        Ok(config)
    }

    fn merge_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(origin) = lookup("MCSM_ORIGIN") {
            self.origin = origin;
        }
        if let Some(api_key) = lookup("MCSM_API_KEY") {
            self.api_key = api_key;
        }
        if let Some(user_agent) = lookup("MCSM_USER_AGENT") {
            self.user_agent = user_agent;
        }
        if let Some(log_level) = lookup("MCSM_LOG_LEVEL") {
            self.log_level = log_level;
        }
        self
    }
}
