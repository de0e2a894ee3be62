//! Tree formatting and display
//!
//! - `config` - Output configuration types
//! - `streaming` - Console formatter writing lines to stdout and warnings to stderr
//! - `plain` - Uncoloured formatter over arbitrary writers

mod config;
mod plain;
mod streaming;

pub use config::OutputConfig;
pub use plain::PlainFormatter;
pub use streaming::StreamingFormatter;

/// Prefix for messages on the error channel.
pub const WARNING_PREFIX: &str = "twig: warning: ";
