//! Core types for agent-relay.

pub mod message;

pub use message::*;
