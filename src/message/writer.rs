//! Outgoing response envelope.

use std::collections::HashMap;
use serde::{Deserialize, Serialize};

/// Response envelope populated before it is sent across the connector transport.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponseWriter {
    /// Originating node, if the sender identifies itself.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node: Option<String>,

    /// Transport metadata (cache directives and similar).
    /// Absent until something writes into it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<HashMap<String, String>>,

    /// Opaque response body.
    pub payload: Vec<u8>,
}

impl ResponseWriter {
    /// Create an empty writer with no context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a writer carrying the given payload.
    pub fn with_payload(payload: impl Into<Vec<u8>>) -> Self {
        Self {
            payload: payload.into(),
            ..Self::default()
        }
    }

    /// Look up a context entry.
    pub fn context_value(&self, key: &str) -> Option<&str> {
        self.context
            .as_ref()
            .and_then(|ctx| ctx.get(key))
            .map(String::as_str)
    }

    /// Mutable access to the context map, creating it on first use.
    pub fn context_mut(&mut self) -> &mut HashMap<String, String> {
        self.context.get_or_insert_with(HashMap::new)
    }

    /// Number of context entries (zero when absent).
    pub fn context_len(&self) -> usize {
        self.context.as_ref().map_or(0, HashMap::len)
    }
}
