//! Headless chat client state.
//!
//! [`ChatSession`] owns the ordered, append-only conversation a front end
//! renders. It is deliberately free of any UI concern: submissions go through
//! a [`ChatTransport`], and every observable piece of state (messages, the
//! in-flight flag, the last error) is readable through `&self` methods.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::error::RelayError;
use crate::types::Message;

/// Placeholder shown when the agent's reply carries neither an `output` nor
/// a `response` field.
pub const NO_RESPONSE_PLACEHOLDER: &str = "No response from agent";

/// Sends one chat message to the forwarding endpoint.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    /// Submit `message` and return the endpoint's parsed JSON reply.
    async fn send(&self, message: &str) -> Result<serde_json::Value, RelayError>;
}

/// reqwest-backed transport posting `{"message": ...}` to the endpoint.
pub struct HttpChatTransport {
    client: reqwest::Client,
    endpoint_url: String,
    credential: Option<String>,
}

impl HttpChatTransport {
    /// Create a transport for the given endpoint URL.
    pub fn new(endpoint_url: impl Into<String>) -> Self {
        Self {
            client: crate::server::invoke::shared_client().clone(),
            endpoint_url: endpoint_url.into(),
            credential: None,
        }
    }

    /// Attach the caller's bearer token.
    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.credential = Some(format!("Bearer {}", token.into()));
        self
    }
}

#[async_trait]
impl ChatTransport for HttpChatTransport {
    async fn send(&self, message: &str) -> Result<serde_json::Value, RelayError> {
        let mut request = self
            .client
            .post(&self.endpoint_url)
            .json(&serde_json::json!({ "message": message }));
        if let Some(ref credential) = self.credential {
            request = request.header(reqwest::header::AUTHORIZATION, credential);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<serde_json::Value>()
                .await
                .ok()
                .and_then(|body| body["error"].as_str().map(str::to_string))
                .unwrap_or_else(|| "Failed to get response from agent".to_string());
            return Err(RelayError::api(status.as_u16(), message));
        }

        Ok(response.json().await?)
    }
}

/// Chat submission state. No machine beyond idle/submitting per exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatState {
    Idle,
    Submitting,
}

/// Result of a [`ChatSession::submit`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The message was sent and the exchange completed (check
    /// [`ChatSession::last_error`] for a failed exchange).
    Sent,
    /// Rejected: input was empty or whitespace-only. Nothing changed.
    EmptyInput,
    /// Rejected: another submission is still in flight. Nothing changed.
    Busy,
}

/// Conversation state for one page session.
///
/// Messages are appended optimistically: the user's message lands in the
/// history before the request goes out and is not rolled back on failure.
/// Failures surface through [`last_error`](Self::last_error) instead.
pub struct ChatSession {
    transport: Arc<dyn ChatTransport>,
    messages: Mutex<Vec<Message>>,
    state: Mutex<ChatState>,
    last_error: Mutex<Option<String>>,
}

impl ChatSession {
    /// Create a session over the given transport.
    pub fn new(transport: Arc<dyn ChatTransport>) -> Self {
        Self {
            transport,
            messages: Mutex::new(Vec::new()),
            state: Mutex::new(ChatState::Idle),
            last_error: Mutex::new(None),
        }
    }

    /// Snapshot of the conversation so far.
    pub async fn messages(&self) -> Vec<Message> {
        self.messages.lock().await.clone()
    }

    /// Current submission state.
    pub async fn state(&self) -> ChatState {
        *self.state.lock().await
    }

    /// The most recent exchange's error text, if it failed.
    pub async fn last_error(&self) -> Option<String> {
        self.last_error.lock().await.clone()
    }

    /// Submit user input and wait for the exchange to finish.
    ///
    /// Empty input and overlapping submissions are rejected without side
    /// effects; otherwise the trimmed text is appended immediately and the
    /// assistant's reply (or the error) is recorded when the transport
    /// returns.
    pub async fn submit(&self, input: &str) -> SubmitOutcome {
        let text = input.trim();
        if text.is_empty() {
            return SubmitOutcome::EmptyInput;
        }

        // Single-flight guard: one outstanding request per session.
        {
            let mut state = self.state.lock().await;
            if *state == ChatState::Submitting {
                return SubmitOutcome::Busy;
            }
            *state = ChatState::Submitting;
        }

        self.messages.lock().await.push(Message::user(text));
        *self.last_error.lock().await = None;

        match self.transport.send(text).await {
            Ok(body) => {
                let content = extract_assistant_content(&body);
                self.messages.lock().await.push(Message::assistant(content));
            }
            Err(err) => {
                tracing::warn!(error = %err, "chat submission failed");
                *self.last_error.lock().await = Some(err.to_string());
            }
        }

        *self.state.lock().await = ChatState::Idle;
        SubmitOutcome::Sent
    }
}

/// `output` → `response` → placeholder, with no schema validation of the
/// reply body (its shape is not part of any stated contract).
fn extract_assistant_content(body: &serde_json::Value) -> String {
    body["output"]
        .as_str()
        .or_else(|| body["response"].as_str())
        .unwrap_or(NO_RESPONSE_PLACEHOLDER)
        .to_string()
}
