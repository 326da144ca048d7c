//! Agent-execution engine seam.
//!
//! The engine interprets a conversation, decides whether to invoke tools,
//! executes tool calls, and appends all resulting messages (tool calls, tool
//! results, the final assistant reply) to the conversation. The agent wrapper
//! delegates to it entirely and has no visibility into intermediate steps.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::RelayError;
use crate::tools::Tool;
use crate::types::Message;

/// One engine submission: the conversation so far plus the configuration the
/// agent was constructed with.
pub struct EngineRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub tools: Vec<Arc<dyn Tool>>,
}

impl EngineRequest {
    pub fn new(model: impl Into<String>, messages: Vec<Message>) -> Self {
        Self {
            model: model.into(),
            messages,
            tools: Vec::new(),
        }
    }

    pub fn with_tools(mut self, tools: Vec<Arc<dyn Tool>>) -> Self {
        self.tools = tools;
        self
    }
}

impl std::fmt::Debug for EngineRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EngineRequest")
            .field("model", &self.model)
            .field("messages", &self.messages.len())
            .field("tools", &self.tools.len())
            .finish()
    }
}

/// External agent-execution engine.
///
/// The returned sequence must begin with the submitted messages; anything the
/// engine produced during the run is appended after them in order.
#[async_trait]
pub trait AgentEngine: Send + Sync {
    async fn run(&self, request: EngineRequest) -> Result<Vec<Message>, RelayError>;
}
