//! Logging setup
//!
//! Console-only tracing subscriber. Logs go to stderr so that stdout
//! stays reserved for weather output.

mod logging;

pub use logging::{LogFormat, LoggingConfig, TelemetryError, init_logging};
