//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Connector and config loader produce:
//!     → tracing events (structured fields)
//!     → logging.rs subscriber (env filter + fmt layer)
//!     → stderr
//! ```

pub mod logging;

pub use logging::init_logging;
