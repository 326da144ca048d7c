//! agent-relay — authenticated chat relay for a hosted AI agent runtime.
//!
//! Three request/response components around one conversational round-trip:
//!
//! - [`agent`] — wraps an agent-execution engine with a fixed system prompt
//!   and a tool set, returning the last assistant reply plus full history.
//! - [`server`] — the forwarding endpoint: session check, bearer-token
//!   attachment, relay to the remote agent runtime, error translation.
//! - [`chat`] — headless conversation state for a chat front end:
//!   single-flight submission, optimistic append, field-fallback extraction.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use agent_relay::config::RelayConfig;
//! use agent_relay::server::{HttpServer, InvokeService};
//! use agent_relay::session::BearerSessionProvider;
//!
//! # async fn example() -> agent_relay::error::Result<()> {
//! let config = RelayConfig::from_env()?;
//! let service = Arc::new(InvokeService::new(
//!     config.clone(),
//!     Arc::new(BearerSessionProvider::new()),
//! ));
//! HttpServer::bind(config.bind_addr, service).await?.serve().await
//! # }
//! ```

pub mod agent;
pub mod chat;
pub mod config;
pub mod engine;
pub mod error;
pub mod prelude;
pub mod server;
pub mod session;
pub mod tools;
pub mod types;
