//! Filesystem nodes visited during traversal

use std::ffi::OsString;
use std::path::PathBuf;

/// What a listed child turned out to be after stating it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A real directory; descended into.
    Directory,
    /// A symlink resolving to a directory; rendered as a directory but never descended.
    LinkedDirectory,
    /// A regular file (or a symlink to one) with the size of its target.
    File { size: u64 },
}

/// A child of a directory, read from the filesystem at render time.
#[derive(Debug, Clone)]
pub struct DirectoryEntry {
    /// Raw file name, used as the sort key.
    pub file_name: OsString,
    /// Display name (lossy UTF-8 of `file_name`).
    pub name: String,
    pub path: PathBuf,
    pub kind: EntryKind,
}

impl DirectoryEntry {
    pub fn new(file_name: OsString, path: PathBuf, kind: EntryKind) -> Self {
        let name = file_name.to_string_lossy().to_string();
        Self {
            file_name,
            name,
            path,
            kind,
        }
    }

    pub fn is_directory(&self) -> bool {
        matches!(self.kind, EntryKind::Directory | EntryKind::LinkedDirectory)
    }

    /// Size in bytes, defined only for files.
    pub fn size_bytes(&self) -> Option<u64> {
        match self.kind {
            EntryKind::File { size } => Some(size),
            _ => None,
        }
    }

    pub fn is_hidden(&self) -> bool {
        self.name.starts_with('.')
    }

    /// Whether the renderer may recurse into this entry.
    pub fn descends(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}
