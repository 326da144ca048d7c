//! Shared test doubles for integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use agent_relay::chat::ChatTransport;
use agent_relay::engine::{AgentEngine, EngineRequest};
use agent_relay::error::RelayError;
use agent_relay::types::Message;

/// Engine double that appends a scripted tail to whatever was submitted and
/// records the submitted conversation.
pub struct ScriptedEngine {
    tail: Vec<Message>,
    submitted: Mutex<Vec<Vec<Message>>>,
}

impl ScriptedEngine {
    pub fn new(tail: Vec<Message>) -> Self {
        Self {
            tail,
            submitted: Mutex::new(Vec::new()),
        }
    }

    /// The message sequences submitted so far.
    pub fn submissions(&self) -> Vec<Vec<Message>> {
        self.submitted.lock().unwrap().clone()
    }
}

#[async_trait]
impl AgentEngine for ScriptedEngine {
    async fn run(&self, request: EngineRequest) -> Result<Vec<Message>, RelayError> {
        self.submitted.lock().unwrap().push(request.messages.clone());
        let mut messages = request.messages;
        messages.extend(self.tail.iter().cloned());
        Ok(messages)
    }
}

/// Transport double that pops pre-queued results in order.
pub struct ScriptedTransport {
    results: Mutex<Vec<Result<serde_json::Value, RelayError>>>,
    pub calls: AtomicUsize,
}

impl ScriptedTransport {
    pub fn new(results: Vec<Result<serde_json::Value, RelayError>>) -> Self {
        Self {
            results: Mutex::new(results),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ChatTransport for ScriptedTransport {
    async fn send(&self, _message: &str) -> Result<serde_json::Value, RelayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.results
            .lock()
            .unwrap()
            .pop()
            .unwrap_or_else(|| Ok(serde_json::json!({ "output": "default" })))
    }
}

/// Transport double that blocks each send until released, to hold a
/// submission in flight.
pub struct GatedTransport {
    release: tokio::sync::Notify,
    response: serde_json::Value,
    pub calls: AtomicUsize,
}

impl GatedTransport {
    pub fn new(response: serde_json::Value) -> Self {
        Self {
            release: tokio::sync::Notify::new(),
            response,
            calls: AtomicUsize::new(0),
        }
    }

    /// Allow one in-flight send to complete.
    pub fn release_one(&self) {
        self.release.notify_one();
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ChatTransport for GatedTransport {
    async fn send(&self, _message: &str) -> Result<serde_json::Value, RelayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.release.notified().await;
        Ok(self.response.clone())
    }
}
