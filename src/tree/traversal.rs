//! Directory listing, entry classification and connector glyphs.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, trace, warn};

use crate::error::TreeError;

use super::entry::{DirectoryEntry, EntryKind};

pub const BRANCH: &str = "├── ";
pub const LAST_BRANCH: &str = "└── ";
pub const PIPE_PREFIX: &str = "│   ";
pub const SPACE_PREFIX: &str = "    ";

/// Resolve the root strictly: it must exist (following symlinks) and be a directory.
pub fn resolve_root(path: &Path) -> Result<PathBuf, TreeError> {
    let resolved = fs::canonicalize(path).map_err(|source| TreeError::RootNotFound {
        path: path.to_path_buf(),
        source,
    })?;

    if !resolved.is_dir() {
        return Err(TreeError::NotADirectory {
            path: path.to_path_buf(),
        });
    }

    Ok(resolved)
}

/// List the direct children of `path`, sorted by raw file name.
///
/// Fails only if the directory itself cannot be opened. Children that vanish
/// or cannot be stated while listing are logged and left out.
pub fn list_children(path: &Path) -> io::Result<Vec<DirectoryEntry>> {
    let read_dir = fs::read_dir(path)?;

    let mut dir_entries = Vec::new();
    for entry in read_dir {
        match entry {
            Ok(e) => dir_entries.push(e),
            Err(e) => warn!("skipping unreadable entry in '{}': {}", path.display(), e),
        }
    }
    dir_entries.sort_by_key(|e| e.file_name());

    let mut children = Vec::with_capacity(dir_entries.len());
    for entry in dir_entries {
        let entry_path = entry.path();
        match classify(&entry) {
            Ok(Some(kind)) => {
                children.push(DirectoryEntry::new(entry.file_name(), entry_path, kind));
            }
            Ok(None) => trace!("skipping special file '{}'", entry_path.display()),
            Err(e) => warn!("skipping '{}': {}", entry_path.display(), e),
        }
    }

    debug!("listed {} entries in '{}'", children.len(), path.display());
    Ok(children)
}

/// Stat one entry. Symlinks are resolved for display but marked so they are never descended.
fn classify(entry: &fs::DirEntry) -> io::Result<Option<EntryKind>> {
    let file_type = entry.file_type()?;

    if file_type.is_symlink() {
        // Dangling links surface as NotFound here, same as a vanished entry
        let target = fs::metadata(entry.path())?;
        return Ok(if target.is_dir() {
            Some(EntryKind::LinkedDirectory)
        } else if target.is_file() {
            Some(EntryKind::File { size: target.len() })
        } else {
            None
        });
    }

    if file_type.is_dir() {
        Ok(Some(EntryKind::Directory))
    } else if file_type.is_file() {
        let size = entry.metadata()?.len();
        Ok(Some(EntryKind::File { size }))
    } else {
        Ok(None)
    }
}

/// Connector glyph for an entry.
pub fn connector(is_last: bool) -> &'static str {
    if is_last { LAST_BRANCH } else { BRANCH }
}

/// Calculate the prefix for child entries.
pub fn child_prefix(current_prefix: &str, is_last: bool) -> String {
    if is_last {
        format!("{}{}", current_prefix, SPACE_PREFIX)
    } else {
        format!("{}{}", current_prefix, PIPE_PREFIX)
    }
}
