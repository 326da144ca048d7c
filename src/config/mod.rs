//! Process configuration, resolved once at startup.
//!
//! The relay reads its environment exactly once, at process start, into an
//! explicit [`RelayConfig`] value that is passed into the endpoint service.
//! A missing required variable fails startup with a
//! [`RelayError::Configuration`] instead of surfacing lazily per request.

use std::net::SocketAddr;

use crate::error::RelayError;

/// Environment variable holding the remote agent-runtime URL.
///
/// The value already includes its invocation path; the relay never appends
/// path segments to it.
pub const ENV_AGENT_CORE_URL: &str = "AGENT_CORE_API_URL";

/// Environment variable overriding the listen address (default `127.0.0.1:3000`).
pub const ENV_BIND_ADDR: &str = "RELAY_BIND_ADDR";

/// Environment variable naming the model the hosting runtime constructs the
/// agent with. The relay itself never dials the model.
pub const ENV_MODEL: &str = "AGENT_MODEL";

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_MODEL: &str = "anthropic.claude-sonnet-4-20250514-v1:0";

/// Startup configuration for the relay process.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// Remote agent-runtime endpoint the relay forwards chat messages to.
    pub agent_core_url: String,
    /// Address the HTTP front binds to.
    pub bind_addr: SocketAddr,
    /// Model identifier handed to the agent wrapper by the hosting runtime.
    pub model: String,
}

impl RelayConfig {
    /// Load from environment variables (and `.env` if present).
    ///
    /// # Errors
    ///
    /// Returns [`RelayError::Configuration`] when `AGENT_CORE_API_URL` is
    /// missing or empty, or when `RELAY_BIND_ADDR` does not parse.
    pub fn from_env() -> Result<Self, RelayError> {
        let _ = dotenvy::dotenv(); // load .env if present, ignore error
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup. Keeps validation testable
    /// without mutating process-global state.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, RelayError> {
        let agent_core_url = lookup(ENV_AGENT_CORE_URL)
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| {
                RelayError::Configuration(format!("{ENV_AGENT_CORE_URL} is not set"))
            })?;

        let bind_addr = lookup(ENV_BIND_ADDR)
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| {
                RelayError::Configuration(format!("{ENV_BIND_ADDR} is not a valid address: {e}"))
            })?;

        let model = lookup(ENV_MODEL)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        Ok(Self {
            agent_core_url,
            bind_addr,
            model,
        })
    }
}
