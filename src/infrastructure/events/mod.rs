//! Event Sink Implementations
//!
//! Concrete implementations of DeployEventSink:
//! - JsonEventSink: NDJSON output for CI/automation
//! - TracingEventSink: structured log records

mod json;
mod tracing_sink;

pub use json::{event_to_json, JsonEventSink};
pub use tracing_sink::TracingEventSink;
