//! TreeRenderer - depth-first, pre-order rendering of a directory hierarchy

use std::io;
use std::path::Path;

use crate::error::{TraversalWarning, TreeError};

use super::config::RenderConfig;
use super::entry::DirectoryEntry;
use super::traversal::{child_prefix, connector, list_children, resolve_root};

/// Recursion levels walked before a branch is cut off, even without a depth limit.
pub const DEPTH_CEILING: usize = 1024;

/// What a rendered line describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Directory,
    File { size: u64 },
}

/// One output line, handed to a `TreeOutput` sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeLine<'a> {
    /// Continuation markers inherited from ancestors.
    pub prefix: &'a str,
    pub is_last: bool,
    /// Bare name, or the full path for files when configured.
    pub label: &'a str,
    pub kind: NodeKind,
}

impl NodeLine<'_> {
    pub fn connector(&self) -> &'static str {
        connector(self.is_last)
    }

    /// Text after the label: `/` for directories, the byte count for files.
    pub fn suffix(&self) -> String {
        match self.kind {
            NodeKind::Directory => "/".to_string(),
            NodeKind::File { size } => format!(" ({} bytes)", size),
        }
    }

    /// The complete uncoloured line.
    pub fn text(&self) -> String {
        format!(
            "{}{}{}{}",
            self.prefix,
            self.connector(),
            self.label,
            self.suffix()
        )
    }
}

/// Sink for rendered lines and non-fatal warnings.
pub trait TreeOutput {
    fn output_node(&mut self, node: &NodeLine<'_>) -> io::Result<()>;

    fn warning(&mut self, warning: &TraversalWarning) -> io::Result<()>;
}

/// Counts gathered during one render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub directories: usize,
    pub files: usize,
    pub warnings: usize,
}

/// Renders a directory tree according to a `RenderConfig`.
pub struct TreeRenderer {
    config: RenderConfig,
}

impl TreeRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render the tree below `root` into `output`.
    ///
    /// Only an unresolvable or unreadable root (or a failing sink) is fatal;
    /// unreadable subdirectories are reported through `TreeOutput::warning`.
    pub fn render<O: TreeOutput>(
        &self,
        root: &Path,
        output: &mut O,
    ) -> Result<RenderStats, TreeError> {
        let root = resolve_root(root)?;
        let entries = list_children(&root).map_err(|source| TreeError::RootUnreadable {
            path: root.clone(),
            source,
        })?;

        let mut stats = RenderStats::default();
        self.render_entries(&entries, "", 0, output, &mut stats)?;
        Ok(stats)
    }

    fn render_dir<O: TreeOutput>(
        &self,
        path: &Path,
        prefix: &str,
        depth: usize,
        output: &mut O,
        stats: &mut RenderStats,
    ) -> io::Result<()> {
        if !self.config.allows_depth(depth) {
            return Ok(());
        }

        if depth >= DEPTH_CEILING {
            stats.warnings += 1;
            return output.warning(&TraversalWarning::DepthCeiling {
                path: path.to_path_buf(),
            });
        }

        let entries = match list_children(path) {
            Ok(entries) => entries,
            Err(source) => {
                stats.warnings += 1;
                return output.warning(&TraversalWarning::SubtreeUnreadable {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        self.render_entries(&entries, prefix, depth, output, stats)
    }

    fn render_entries<O: TreeOutput>(
        &self,
        entries: &[DirectoryEntry],
        prefix: &str,
        depth: usize,
        output: &mut O,
        stats: &mut RenderStats,
    ) -> io::Result<()> {
        // Connectors are chosen among the siblings that actually print a line
        let printed: Vec<bool> = entries.iter().map(|e| self.prints(e)).collect();
        let last_printed = printed.iter().rposition(|&p| p);

        for (i, entry) in entries.iter().enumerate() {
            let is_last = last_printed.is_none_or(|last| i >= last);

            if printed[i] {
                let full_path;
                let label = if self.config.show_full_path && !entry.is_directory() {
                    full_path = entry.path.display().to_string();
                    full_path.as_str()
                } else {
                    entry.name.as_str()
                };

                let kind = match entry.size_bytes() {
                    Some(size) => NodeKind::File { size },
                    None => NodeKind::Directory,
                };

                output.output_node(&NodeLine {
                    prefix,
                    is_last,
                    label,
                    kind,
                })?;

                match kind {
                    NodeKind::Directory => stats.directories += 1,
                    NodeKind::File { .. } => stats.files += 1,
                }
            }

            // Unprinted directories (files-only mode) are still descended
            if entry.descends() {
                let new_prefix = child_prefix(prefix, is_last);
                self.render_dir(&entry.path, &new_prefix, depth + 1, output, stats)?;
            }
        }

        Ok(())
    }

    /// Whether an entry produces a line of its own.
    fn prints(&self, entry: &DirectoryEntry) -> bool {
        if entry.is_directory() {
            self.config.mode.shows_dirs()
        } else {
            self.config.mode.shows_files() && (self.config.include_hidden || !entry.is_hidden())
        }
    }
}
