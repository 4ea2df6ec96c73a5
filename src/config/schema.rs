//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Default panel origin (the panel's web port).
pub const DEFAULT_ORIGIN: &str = "http://localhost:23333";

/// User agent sent when none is configured.
pub fn default_user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

/// Client configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Panel origin (scheme + host + port), e.g. "http://localhost:23333".
    pub origin: String,

    /// API key issued by the panel.
    pub api_key: String,

    /// User agent header for every request.
    pub user_agent: String,

    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Honour `HTTP_PROXY`/`HTTPS_PROXY` from the environment.
    pub system_proxy: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            origin: DEFAULT_ORIGIN.to_string(),
            api_key: String::new(),
            user_agent: default_user_agent(),
            log_level: "info".to_string(),
            system_proxy: true,
        }
    }
}

impl ClientConfig {
    pub fn new(origin: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = origin.into();
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_log_level(mut self, log_level: impl Into<String>) -> Self {
        self.log_level = log_level.into();
        self
    }

    pub fn with_system_proxy(mut self, enabled: bool) -> Self {
        self.system_proxy = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.origin, "http://localhost:23333");
        assert!(config.api_key.is_empty());
        assert!(config.user_agent.starts_with("mcsm-client/"));
        assert_eq!(config.log_level, "info");
        assert!(config.system_proxy);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: ClientConfig = toml::from_str(r#"api_key = "abc""#).unwrap();
        assert_eq!(config.api_key, "abc");
        assert_eq!(config.origin, DEFAULT_ORIGIN);
    }

    #[test]
    fn test_builder_methods() {
        let config = ClientConfig::new("http://10.0.0.5:23333", "k")
            .with_user_agent("bot/1.0")
            .with_log_level("debug")
            .with_system_proxy(false)
            .with_api_key("k2")
            .with_origin("https://panel.example.com");

        assert_eq!(config.origin, "https://panel.example.com");
        assert_eq!(config.api_key, "k2");
        assert_eq!(config.user_agent, "bot/1.0");
        assert_eq!(config.log_level, "debug");
        assert!(!config.system_proxy);
    }
}
