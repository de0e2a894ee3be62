//! Output configuration types

/// Configuration for terminal output.
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    pub use_color: bool,
}

impl OutputConfig {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }
}
