//! Twig - a small `tree`: directory listings with box-drawing connectors

pub mod error;
pub mod output;
pub mod roster;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{ConfigError, TraversalWarning, TreeError};
pub use output::{OutputConfig, PlainFormatter, StreamingFormatter};
pub use tree::{DisplayMode, NodeKind, NodeLine, RenderConfig, RenderStats, TreeOutput, TreeRenderer};
