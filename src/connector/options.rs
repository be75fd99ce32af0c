//! Write options applied to a response before dispatch.
//!
//! # Responsibilities
//! - Define the option type the connector accepts per write
//! - Provide the stock options (no-cache, arbitrary context entry)
//! - Apply an ordered list of options to one writer
//!
//! # Design Decisions
//! - Options are stateless closures; only the target writer mutates
//! - Options never fail
//! - Later options overwrite earlier ones on the same context key

use crate::message::ResponseWriter;

/// Context key carrying the cache directive.
pub const CACHE_CONTROL: &str = "Cache-Control";

/// Directive telling downstream layers not to cache the response.
pub const NO_CACHE: &str = "no-cache";

/// A single configuration step run against a writer before it is sent.
pub type ConnectorWriteOption = Box<dyn Fn(&mut ResponseWriter) + Send + Sync>;

/// Mark the response as non-cacheable.
///
/// Creates the writer's context if it is absent, then sets
/// `Cache-Control: no-cache`, replacing any previous directive.
pub fn with_connector_write_no_cache() -> ConnectorWriteOption {
    Box::new(|msg: &mut ResponseWriter| {
        msg.context_mut()
            .insert(CACHE_CONTROL.to_string(), NO_CACHE.to_string());
    })
}

/// Set an arbitrary context entry.
pub fn with_connector_write_context(
    key: impl Into<String>,
    value: impl Into<String>,
) -> ConnectorWriteOption {
    let key = key.into();
    let value = value.into();
    Box::new(move |msg: &mut ResponseWriter| {
        msg.context_mut().insert(key.clone(), value.clone());
    })
}

/// Run each option against the writer, in order.
pub fn apply_options(msg: &mut ResponseWriter, options: &[ConnectorWriteOption]) {
    for option in options {
        option(msg);
    }
}
