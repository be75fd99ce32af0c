//! Messages exchanged over the connector.
//!
//! # Design Decisions
//! - `context` is `Option<HashMap>` so "never written" and "written but
//!   empty" stay distinguishable on the wire
//! - Writers are plain owned values; options borrow them mutably

pub mod writer;

pub use writer::ResponseWriter;
