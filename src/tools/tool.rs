//! Tool trait and closure-based tool wrapper.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use async_trait::async_trait;

use super::arguments::ToolArguments;
use super::types::ToolParameters;
use crate::error::RelayError;

/// Context available during tool execution.
#[derive(Debug, Clone, Default)]
pub struct ToolExecutionContext {
    /// Additional metadata for the tool.
    pub metadata: serde_json::Value,
}

/// Core tool trait — implement to create custom tools.
///
/// At this layer a tool is an opaque descriptor plus an executor; whether and
/// when it runs is decided by the agent-execution engine.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Tool name (must match what the engine calls).
    fn name(&self) -> &str;

    /// Human-readable description.
    fn description(&self) -> &str;

    /// JSON Schema parameters.
    fn parameters(&self) -> &ToolParameters;

    /// Execute the tool with parsed arguments.
    async fn execute(
        &self,
        args: &ToolArguments,
        ctx: &ToolExecutionContext,
    ) -> Result<serde_json::Value, RelayError>;
}

/// Type alias for the tool handler function.
type ToolHandler = dyn Fn(
        ToolArguments,
        ToolExecutionContext,
    ) -> Pin<Box<dyn Future<Output = Result<serde_json::Value, RelayError>> + Send>>
    + Send
    + Sync;

/// Closure-based tool for quick tool creation.
pub struct AgentTool {
    name: String,
    description: String,
    parameters: ToolParameters,
    handler: Arc<ToolHandler>,
}

impl AgentTool {
    /// Create a tool from a closure.
    pub fn new<F, Fut>(
        name: impl Into<String>,
        description: impl Into<String>,
        parameters: ToolParameters,
        handler: F,
    ) -> Self
    where
        F: Fn(ToolArguments, ToolExecutionContext) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<serde_json::Value, RelayError>> + Send + 'static,
    {
        Self {
            name: name.into(),
            description: description.into(),
            parameters,
            handler: Arc::new(move |args, ctx| Box::pin(handler(args, ctx))),
        }
    }
}

#[async_trait]
impl Tool for AgentTool {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn parameters(&self) -> &ToolParameters {
        &self.parameters
    }

    async fn execute(
        &self,
        args: &ToolArguments,
        ctx: &ToolExecutionContext,
    ) -> Result<serde_json::Value, RelayError> {
        (self.handler)(args.clone(), ctx.clone()).await
    }
}

impl std::fmt::Debug for AgentTool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AgentTool")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn closure_tool_executes_handler() {
        let tool = AgentTool::new(
            "echo",
            "Echo the input back",
            ToolParameters::object().string("text", "Text to echo", true).build(),
            |args, _ctx| async move {
                let text = args.get_str("text")?.to_string();
                Ok(json!({ "echoed": text }))
            },
        );

        let args = ToolArguments::new(json!({ "text": "hi" }));
        let result = tool.execute(&args, &ToolExecutionContext::default()).await.unwrap();
        assert_eq!(result["echoed"], "hi");
    }

    #[tokio::test]
    async fn handler_errors_propagate() {
        let tool = AgentTool::new(
            "fails",
            "Always fails",
            ToolParameters::empty(),
            |_args, _ctx| async move {
                Err(RelayError::ToolExecution {
                    tool_name: "fails".into(),
                    message: "boom".into(),
                })
            },
        );

        let err = tool
            .execute(&ToolArguments::default(), &ToolExecutionContext::default())
            .await
            .unwrap_err();
        assert!(matches!(err, RelayError::ToolExecution { .. }));
    }
}
