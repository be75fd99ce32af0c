//! Shared utilities for integration tests.

use std::sync::{Arc, Mutex};

use connector_kit::connector::{DispatchError, Dispatcher};
use connector_kit::message::ResponseWriter;

/// Dispatcher that keeps every writer it receives.
#[derive(Clone, Default)]
pub struct RecordingDispatcher {
    sent: Arc<Mutex<Vec<ResponseWriter>>>,
}

impl RecordingDispatcher {
    /// Snapshot of everything dispatched so far.
    pub fn sent(&self) -> Vec<ResponseWriter> {
        self.sent.lock().unwrap().clone()
    }
}

impl Dispatcher for RecordingDispatcher {
    fn dispatch(&self, writer: ResponseWriter) -> Result<(), DispatchError> {
        self.sent.lock().unwrap().push(writer);
        Ok(())
    }
}

/// Build a context map from literal pairs.
#[allow(dead_code)]
pub fn context(pairs: &[(&str, &str)]) -> std::collections::HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
