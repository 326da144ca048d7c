//! Typed accessors over tool-call arguments.

use crate::error::RelayError;

/// Arguments passed to a tool invocation, as parsed JSON.
#[derive(Debug, Clone, Default)]
pub struct ToolArguments {
    value: serde_json::Value,
}

impl ToolArguments {
    /// Wrap a parsed JSON value.
    pub fn new(value: serde_json::Value) -> Self {
        Self { value }
    }

    /// The raw JSON value.
    pub fn raw(&self) -> &serde_json::Value {
        &self.value
    }

    /// Get a required string argument.
    ///
    /// # Errors
    ///
    /// Returns [`RelayError::ToolExecution`] when the key is absent or not a
    /// string.
    pub fn get_str(&self, key: &str) -> Result<&str, RelayError> {
        self.value
            .get(key)
            .and_then(|v| v.as_str())
            .ok_or_else(|| RelayError::ToolExecution {
                tool_name: String::new(),
                message: format!("missing required string argument '{key}'"),
            })
    }

    /// Get an optional string argument.
    pub fn get_str_opt(&self, key: &str) -> Option<&str> {
        self.value.get(key).and_then(|v| v.as_str())
    }
}

impl From<serde_json::Value> for ToolArguments {
    fn from(value: serde_json::Value) -> Self {
        Self::new(value)
    }
}
