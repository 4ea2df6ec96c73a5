//! Error types for panel API operations.

use thiserror::Error;

/// Result type for panel API operations.
pub type Result<T> = std::result::Result<T, McsmError>;

/// Errors that can occur while talking to the panel.
#[derive(Debug, Error)]
pub enum McsmError {
    /// The panel answered with something other than HTTP 200.
    #[error("unexpected status code: {status}")]
    Status { status: u16 },

    /// A 200 response whose body could not be decoded.
    #[error("failed to decode {content_type} response: {message}")]
    Decode {
        content_type: String,
        message: String,
    },

    /// The transport session has already been released.
    #[error("session is closed")]
    SessionClosed,

    /// Caller-supplied arguments that cannot be sent.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Origin URL could not be parsed or used as a base.
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Network or protocol failure below HTTP status level.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
}

impl McsmError {
    /// Status code carried by a classified error, if this is one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            McsmError::Status { status } => Some(*status),
            _ => None,
        }
    }

    /// True for errors raised locally before any network I/O.
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            McsmError::SessionClosed | McsmError::InvalidInput(_) | McsmError::InvalidUrl(_)
        )
    }
}
