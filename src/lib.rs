//! Connector toolkit: configure outgoing response writers with composable
//! write options before handing them to a transport.

pub mod config;
pub mod connector;
pub mod message;
pub mod observability;

pub use config::ConnectorConfig;
pub use connector::{with_connector_write_no_cache, Connector, ConnectorWriteOption};
pub use message::ResponseWriter;
