//! Connector front-end: configure a writer, then hand it to the transport.

use thiserror::Error;

use crate::config::schema::WriterConfig;
use crate::connector::options::{
    apply_options, with_connector_write_context, with_connector_write_no_cache,
    ConnectorWriteOption,
};
use crate::message::ResponseWriter;

/// Errors reported by a transport when sending a writer.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// Transport failed to deliver the message.
    #[error("Transport error: {0}")]
    Transport(String),

    /// Transport has been shut down.
    #[error("Transport closed")]
    Closed,
}

/// The transport that actually sends a fully configured writer.
pub trait Dispatcher: Send + Sync {
    fn dispatch(&self, writer: ResponseWriter) -> Result<(), DispatchError>;
}

/// Applies default and per-call options to each writer before dispatch.
pub struct Connector<D> {
    defaults: Vec<ConnectorWriteOption>,
    dispatcher: D,
}

impl<D: Dispatcher> Connector<D> {
    /// Create a connector with no default options.
    pub fn new(dispatcher: D) -> Self {
        Self {
            defaults: Vec::new(),
            dispatcher,
        }
    }

    /// Create a connector whose defaults come from configuration.
    ///
    /// Static context entries are applied before the no-cache directive.
    pub fn from_config(config: &WriterConfig, dispatcher: D) -> Self {
        let mut defaults: Vec<ConnectorWriteOption> = config
            .context
            .iter()
            .map(|(k, v)| with_connector_write_context(k.clone(), v.clone()))
            .collect();

        if config.no_cache {
            defaults.push(with_connector_write_no_cache());
        }

        tracing::debug!(default_options = defaults.len(), "Connector configured");
        Self { defaults, dispatcher }
    }

    /// Append an option applied to every write.
    pub fn with_default(mut self, option: ConnectorWriteOption) -> Self {
        self.defaults.push(option);
        self
    }

    /// Configure the writer and send it.
    ///
    /// Defaults run first so per-call options win on conflicting keys.
    pub fn write(
        &self,
        mut writer: ResponseWriter,
        options: &[ConnectorWriteOption],
    ) -> Result<(), DispatchError> {
        apply_options(&mut writer, &self.defaults);
        apply_options(&mut writer, options);

        tracing::debug!(
            context_entries = writer.context_len(),
            payload_bytes = writer.payload.len(),
            "Dispatching response"
        );

        self.dispatcher.dispatch(writer).map_err(|e| {
            tracing::warn!(error = %e, "Response dispatch failed");
            e
        })
    }

    /// Get a reference to the underlying dispatcher.
    pub fn dispatcher(&self) -> &D {
        &self.dispatcher
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recorder {
        sent: Mutex<Vec<ResponseWriter>>,
    }

    impl Dispatcher for Recorder {
        fn dispatch(&self, writer: ResponseWriter) -> Result<(), DispatchError> {
            self.sent.lock().unwrap().push(writer);
            Ok(())
        }
    }

    struct Closed;

    impl Dispatcher for Closed {
        fn dispatch(&self, _writer: ResponseWriter) -> Result<(), DispatchError> {
            Err(DispatchError::Closed)
        }
    }

    #[test]
    fn test_write_without_options_leaves_context_absent() {
        let connector = Connector::new(Recorder::default());
        connector.write(ResponseWriter::with_payload("ok"), &[]).unwrap();

        let sent = connector.dispatcher().sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert!(sent[0].context.is_none());
        assert_eq!(sent[0].payload, b"ok");
    }

    #[test]
    fn test_config_defaults_applied() {
        let config = WriterConfig {
            no_cache: true,
            context: HashMap::from([("X-Region".to_string(), "eu".to_string())]),
        };
        let connector = Connector::from_config(&config, Recorder::default());
        connector.write(ResponseWriter::new(), &[]).unwrap();

        let sent = connector.dispatcher().sent.lock().unwrap();
        assert_eq!(sent[0].context_value("Cache-Control"), Some("no-cache"));
        assert_eq!(sent[0].context_value("X-Region"), Some("eu"));
    }

    #[test]
    fn test_per_call_options_override_defaults() {
        let connector = Connector::new(Recorder::default())
            .with_default(with_connector_write_no_cache());
        connector
            .write(
                ResponseWriter::new(),
                &[with_connector_write_context("Cache-Control", "max-age=5")],
            )
            .unwrap();

        let sent = connector.dispatcher().sent.lock().unwrap();
        assert_eq!(sent[0].context_value("Cache-Control"), Some("max-age=5"));
    }

    #[test]
    fn test_dispatch_error_propagates() {
        let connector = Connector::new(Closed);
        let err = connector
            .write(ResponseWriter::new(), &[with_connector_write_no_cache()])
            .unwrap_err();
        assert!(matches!(err, DispatchError::Closed));
        assert_eq!(err.to_string(), "Transport closed");
    }
}
