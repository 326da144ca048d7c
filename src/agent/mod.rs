//! Agent wrapper around an agent-execution engine.
//!
//! [`Agent`] owns a model identifier and a tool set, both fixed at
//! construction. Each [`Agent::invoke`] builds a fresh two-message
//! conversation (fixed system instruction + the user's text), hands it to the
//! engine, and extracts the most recent assistant reply from the returned
//! history. Conversational state does not survive across calls.

use std::sync::Arc;

use crate::engine::{AgentEngine, EngineRequest};
use crate::error::RelayError;
use crate::tools::Tool;
use crate::types::{Message, Role};

/// Fixed system instruction prepended to every invocation.
const SYSTEM_PROMPT: &str =
    "You are a helpful AI assistant. Use the appropriate tools to answer.";

/// Construction-time agent configuration. Immutable thereafter.
pub struct AgentConfig {
    /// Model identifier handed through to the engine.
    pub model: String,
    /// Tools the engine may invoke mid-conversation.
    pub tools: Vec<Arc<dyn Tool>>,
}

/// One agent invocation's result.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentResponse {
    /// Content of the last assistant message, or empty if the engine
    /// produced none.
    pub content: String,
    /// The full exchange, including the synthesized system instruction.
    pub messages: Vec<Message>,
}

/// Thin wrapper that configures and invokes an agent-execution engine.
pub struct Agent {
    model: String,
    tools: Vec<Arc<dyn Tool>>,
    engine: Arc<dyn AgentEngine>,
}

impl Agent {
    /// Create a new agent backed by the given engine.
    pub fn new(config: AgentConfig, engine: Arc<dyn AgentEngine>) -> Self {
        Self {
            model: config.model,
            tools: config.tools,
            engine,
        }
    }

    /// The configured model identifier.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send a user message and return the engine's reply.
    ///
    /// `user_text` may be any text, including empty; validation is the
    /// caller's responsibility.
    ///
    /// # Errors
    ///
    /// Any failure from the underlying engine propagates unhandled — no
    /// retry, no fallback, no translation.
    pub async fn invoke(&self, user_text: impl Into<String>) -> Result<AgentResponse, RelayError> {
        let user_text = user_text.into();
        tracing::info!(model = %self.model, message = %user_text, "agent invoke request");

        let messages = vec![Message::system(SYSTEM_PROMPT), Message::user(user_text)];
        let request =
            EngineRequest::new(self.model.clone(), messages).with_tools(self.tools.clone());

        let messages = self.engine.run(request).await?;

        let content = messages
            .iter()
            .rev()
            .find(|m| m.role == Role::Assistant)
            .map(|m| m.content.clone())
            .unwrap_or_default();

        tracing::info!(
            content = %content,
            total_messages = messages.len(),
            "agent invoke response"
        );

        Ok(AgentResponse { content, messages })
    }
}
