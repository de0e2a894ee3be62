//! Error types for configuration, rendering and traversal warnings

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Invalid combination of display options, caught before any traversal.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("options -d (dirs only) and -f (files only) are mutually exclusive")]
    ConflictingModes,

    #[error("depth must be a non-negative integer, got {0}")]
    NegativeDepth(i64),
}

/// Errors that abort a whole render.
#[derive(Debug, Error)]
pub enum TreeError {
    /// The root path is missing or could not be resolved.
    #[error("cannot access '{}': {source}", .path.display())]
    RootNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("'{}' is not a directory", .path.display())]
    NotADirectory { path: PathBuf },

    /// The root resolved but its contents cannot be listed.
    #[error("cannot open directory '{}': {source}", .path.display())]
    RootUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error writing output: {0}")]
    Output(#[from] io::Error),
}

/// Recoverable conditions reported on the error channel while the walk continues.
#[derive(Debug, Error)]
pub enum TraversalWarning {
    /// A directory below the root could not be listed; its branch is truncated.
    #[error("cannot open directory '{}': {source}", .path.display())]
    SubtreeUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The recursion ceiling was reached; the branch is truncated.
    #[error("directory nesting too deep at '{}', not descending", .path.display())]
    DepthCeiling { path: PathBuf },
}

impl TraversalWarning {
    /// Path of the directory whose branch was truncated.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::SubtreeUnreadable { path, .. } | Self::DepthCeiling { path } => path,
        }
    }
}
