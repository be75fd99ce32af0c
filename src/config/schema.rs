//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use std::collections::HashMap;
use serde::{Deserialize, Serialize};

/// Root configuration for the connector.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ConnectorConfig {
    /// Options applied to every outgoing writer.
    pub writer: WriterConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Default write options.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct WriterConfig {
    /// Mark every response `Cache-Control: no-cache`.
    pub no_cache: bool,

    /// Static context entries attached to every response.
    pub context: HashMap<String, String>,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
