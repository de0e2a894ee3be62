//! Configuration types for the tree renderer

use crate::error::ConfigError;

/// Which kinds of entries produce output lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DisplayMode {
    #[default]
    All,
    DirsOnly,
    FilesOnly,
}

impl DisplayMode {
    /// Build a mode from the two command-line switches.
    pub fn from_flags(dirs_only: bool, files_only: bool) -> Result<Self, ConfigError> {
        match (dirs_only, files_only) {
            (true, true) => Err(ConfigError::ConflictingModes),
            (true, false) => Ok(Self::DirsOnly),
            (false, true) => Ok(Self::FilesOnly),
            (false, false) => Ok(Self::All),
        }
    }

    pub fn shows_dirs(self) -> bool {
        self != Self::FilesOnly
    }

    pub fn shows_files(self) -> bool {
        self != Self::DirsOnly
    }
}

/// Convert a signed depth limit, rejecting negatives.
pub fn depth_from_signed(depth: i64) -> Result<usize, ConfigError> {
    usize::try_from(depth).map_err(|_| ConfigError::NegativeDepth(depth))
}

/// Configuration for one render invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderConfig {
    /// Deepest recursion level still rendered; `None` means unbounded.
    /// The root's children are listed at level 0.
    pub max_depth: Option<usize>,
    pub include_hidden: bool,
    pub mode: DisplayMode,
    /// Show the resolved path instead of the bare name for files.
    pub show_full_path: bool,
}

impl RenderConfig {
    pub fn new(mode: DisplayMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Set the depth limit from a signed value, rejecting negatives.
    pub fn with_signed_depth(self, depth: i64) -> Result<Self, ConfigError> {
        Ok(self.with_max_depth(depth_from_signed(depth)?))
    }

    pub fn with_hidden(mut self, include_hidden: bool) -> Self {
        self.include_hidden = include_hidden;
        self
    }

    pub fn with_full_path(mut self, show_full_path: bool) -> Self {
        self.show_full_path = show_full_path;
        self
    }

    /// Whether recursion into a directory at `depth` is allowed.
    pub fn allows_depth(&self, depth: usize) -> bool {
        self.max_depth.is_none_or(|max| depth <= max)
    }
}
