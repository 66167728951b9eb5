//! callview-client: Headless client for the call assistant conversation log
//!
//! This crate provides everything the front-ends need short of rendering:
//! - The log entry data model
//! - Configuration (endpoint, timeout) with environment override
//! - The one-shot HTTP fetch of the conversation log

pub mod config;
pub mod entry;
pub mod fetch;

// Re-export commonly used types
pub use config::{Config, ConfigError};
pub use entry::{latest_caller, LogEntry, Role};
pub use fetch::{fetch_log, parse_log, FetchError};

/// Returns the client version.
pub fn client_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
