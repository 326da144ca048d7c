//! Transport-independent invoke route.
//!
//! [`InvokeService`] implements the whole `POST /api/agent/invoke` contract
//! against plain values (credential + body bytes in, [`Reply`] out) so it is
//! testable without an HTTP harness. The front in [`super::http`] only parses
//! and writes the wire format.

use std::sync::{Arc, OnceLock};

use serde::Deserialize;
use serde_json::{json, Value};

use crate::config::RelayConfig;
use crate::error::RelayError;
use crate::session::SessionProvider;

static SHARED_CLIENT: OnceLock<reqwest::Client> = OnceLock::new();

/// Get (or create) the shared reqwest client.
pub fn shared_client() -> &'static reqwest::Client {
    SHARED_CLIENT.get_or_init(|| {
        reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .pool_max_idle_per_host(10)
            .build()
            .expect("Failed to build HTTP client")
    })
}

/// A status code plus JSON body, ready for any transport to write out.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub status: u16,
    pub body: Value,
}

impl Reply {
    pub fn json(status: u16, body: Value) -> Self {
        Self { status, body }
    }
}

#[derive(Debug, Deserialize)]
struct InvokeRequest {
    #[serde(default)]
    message: String,
}

/// Stateless forwarder from authenticated callers to the remote agent runtime.
pub struct InvokeService {
    config: RelayConfig,
    sessions: Arc<dyn SessionProvider>,
    client: reqwest::Client,
}

impl InvokeService {
    /// Create a service using the shared HTTP client.
    pub fn new(config: RelayConfig, sessions: Arc<dyn SessionProvider>) -> Self {
        Self {
            config,
            sessions,
            client: shared_client().clone(),
        }
    }

    /// Override the HTTP client (tests, custom timeouts).
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    /// Handle one invoke request.
    ///
    /// `credential` is the raw `Authorization` value, if any; `body` is the
    /// raw request body. Never returns an error — every failure is translated
    /// into a [`Reply`] at this boundary.
    pub async fn invoke(&self, credential: Option<&str>, body: &[u8]) -> Reply {
        let Some(session) = self.sessions.resolve(credential).await else {
            return Reply::json(
                401,
                json!({ "error": "You must be signed in to use the agent." }),
            );
        };

        match self.forward(&session.access_token, body).await {
            Ok(reply) => reply,
            Err(err) => {
                tracing::error!(error = %err, "error invoking agent");
                Reply::json(
                    500,
                    json!({
                        "error": "Failed to invoke agent.",
                        "details": err.to_string(),
                    }),
                )
            }
        }
    }

    /// Validate the body and relay the message to the remote agent runtime.
    async fn forward(&self, access_token: &str, body: &[u8]) -> Result<Reply, RelayError> {
        let request: InvokeRequest = serde_json::from_slice(body)?;
        if request.message.is_empty() {
            return Ok(Reply::json(400, json!({ "error": "Message is required." })));
        }

        // The configured URL already includes its invocation path.
        let response = self
            .client
            .post(&self.config.agent_core_url)
            .bearer_auth(access_token)
            .json(&json!({ "prompt": request.message }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await?;
            tracing::warn!(status = status.as_u16(), detail = %detail, "agent runtime error");
            return Ok(Reply::json(
                status.as_u16(),
                json!({
                    "error": format!("Agent Core API error: {}", status.as_u16()),
                    "details": detail,
                }),
            ));
        }

        let data: Value = response.json().await?;
        Ok(Reply::json(200, data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::BearerSessionProvider;

    fn test_config(url: &str) -> RelayConfig {
        RelayConfig {
            agent_core_url: url.to_string(),
            bind_addr: "127.0.0.1:0".parse().unwrap(),
            model: "test-model".into(),
        }
    }

    #[tokio::test]
    async fn missing_credential_yields_401() {
        let service = InvokeService::new(
            test_config("http://127.0.0.1:9/invocations"),
            Arc::new(BearerSessionProvider::new()),
        );
        let reply = service.invoke(None, br#"{"message":"hi"}"#).await;
        assert_eq!(reply.status, 401);
        assert_eq!(
            reply.body["error"],
            "You must be signed in to use the agent."
        );
    }

    #[tokio::test]
    async fn empty_message_yields_400() {
        let service = InvokeService::new(
            test_config("http://127.0.0.1:9/invocations"),
            Arc::new(BearerSessionProvider::new()),
        );
        let reply = service
            .invoke(Some("Bearer token"), br#"{"message":""}"#)
            .await;
        assert_eq!(reply.status, 400);
        assert_eq!(reply.body["error"], "Message is required.");
    }

    #[tokio::test]
    async fn absent_message_field_yields_400() {
        let service = InvokeService::new(
            test_config("http://127.0.0.1:9/invocations"),
            Arc::new(BearerSessionProvider::new()),
        );
        let reply = service.invoke(Some("Bearer token"), b"{}").await;
        assert_eq!(reply.status, 400);
    }

    #[tokio::test]
    async fn malformed_body_yields_500() {
        let service = InvokeService::new(
            test_config("http://127.0.0.1:9/invocations"),
            Arc::new(BearerSessionProvider::new()),
        );
        let reply = service.invoke(Some("Bearer token"), b"{not json").await;
        assert_eq!(reply.status, 500);
        assert_eq!(reply.body["error"], "Failed to invoke agent.");
        assert!(reply.body["details"].as_str().is_some());
    }
}
