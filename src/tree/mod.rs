//! Directory tree rendering
//!
//! `TreeRenderer` walks a directory depth-first in byte-sorted order and hands
//! each line to a `TreeOutput` sink, using O(depth) memory.

mod config;
mod entry;
mod renderer;
mod traversal;

pub use config::{DisplayMode, RenderConfig, depth_from_signed};
pub use entry::{DirectoryEntry, EntryKind};
pub use renderer::{DEPTH_CEILING, NodeKind, NodeLine, RenderStats, TreeOutput, TreeRenderer};
pub use traversal::{child_prefix, connector, list_children, resolve_root};
