//! Convenience re-exports for common use.

pub use crate::agent::{Agent, AgentConfig, AgentResponse};
pub use crate::chat::{ChatSession, ChatState, ChatTransport, SubmitOutcome};
pub use crate::config::RelayConfig;
pub use crate::engine::{AgentEngine, EngineRequest};
pub use crate::error::{RelayError, Result};
pub use crate::server::{HttpServer, InvokeService, Reply};
pub use crate::session::{Session, SessionProvider};
pub use crate::tools::{AgentTool, Tool, ToolArguments, ToolParameters};
pub use crate::types::{Message, Role};
