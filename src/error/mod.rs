//! Error types for agent-relay.

use thiserror::Error;

/// Primary error type for all agent-relay operations.
#[derive(Error, Debug)]
pub enum RelayError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Tool execution error: {tool_name} — {message}")]
    ToolExecution { tool_name: String, message: String },

    #[error("Engine error: {0}")]
    Engine(String),
}

impl RelayError {
    /// Create an API error from a status code and message.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Whether this error is user-correctable (as opposed to operator- or
    /// upstream-caused).
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::Authentication(_) | Self::Api { status: 400..=499, .. }
        )
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, RelayError>;
