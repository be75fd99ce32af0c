//! Connector write path.
//!
//! # Data Flow
//! ```text
//! caller builds ResponseWriter
//!     → Connector::write (defaults from config, then per-call options)
//!     → options.rs (each option mutates the writer in order)
//!     → Dispatcher (external transport)
//! ```
//!
//! # Design Decisions
//! - A writer is borrowed mutably by one option at a time
//! - Options hold no shared state, so distinct writers can be
//!   configured on different threads without coordination

pub mod dispatch;
pub mod options;

pub use dispatch::{Connector, DispatchError, Dispatcher};
pub use options::{
    apply_options, with_connector_write_context, with_connector_write_no_cache,
    ConnectorWriteOption, CACHE_CONTROL, NO_CACHE,
};
