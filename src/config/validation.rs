//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Origin must be an absolute http(s) URL usable as a base
//! - Credentials and user agent must be present
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ClientConfig → Result<(), Vec<ValidationError>>

use thiserror::Error;
use url::Url;

use crate::config::schema::ClientConfig;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("origin '{0}' is not a valid URL")]
    InvalidOrigin(String),

    #[error("origin scheme '{0}' is not http or https")]
    UnsupportedScheme(String),

    #[error("api_key is empty")]
    MissingApiKey,

    #[error("user_agent is empty")]
    MissingUserAgent,
}

/// Check a configuration, collecting every problem.
pub fn validate_config(config: &ClientConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match Url::parse(&config.origin) {
        Ok(url) if url.cannot_be_a_base() => {
            errors.push(ValidationError::InvalidOrigin(config.origin.clone()));
        }
        Ok(url) if url.scheme() != "http" && url.scheme() != "https" => {
            errors.push(ValidationError::UnsupportedScheme(url.scheme().to_string()));
        }
        Ok(_) => {}
        Err(_) => errors.push(ValidationError::InvalidOrigin(config.origin.clone())),
    }

    if config.api_key.trim().is_empty() {
        errors.push(ValidationError::MissingApiKey);
    }

    if config.user_agent.trim().is_empty() {
        errors.push(ValidationError::MissingUserAgent);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_config() {
        let config = ClientConfig::new("http://localhost:23333", "k");
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let config = ClientConfig::new("ftp://files.example.com", "").with_user_agent(" ");
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::UnsupportedScheme("ftp".into()),
                ValidationError::MissingApiKey,
                ValidationError::MissingUserAgent,
            ]
        );
    }

    #[test]
    fn test_unparseable_origin() {
        let config = ClientConfig::new("localhost:23333:bad", "k");
        let errors = validate_config(&config).unwrap_err();
        assert!(matches!(errors[0], ValidationError::InvalidOrigin(_)));
    }
}
