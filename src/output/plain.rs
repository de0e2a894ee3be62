//! Uncoloured formatter over arbitrary writers

use std::io::{self, Write};

use crate::error::TraversalWarning;
use crate::tree::{NodeLine, TreeOutput};

use super::WARNING_PREFIX;

/// Writes rendered lines to `out` and warnings to `err`, without colour.
pub struct PlainFormatter<W: Write, E: Write> {
    out: W,
    err: E,
}

impl<W: Write, E: Write> PlainFormatter<W, E> {
    pub fn new(out: W, err: E) -> Self {
        Self { out, err }
    }

    /// Recover the underlying writers.
    pub fn into_inner(self) -> (W, E) {
        (self.out, self.err)
    }
}

impl<W: Write, E: Write> TreeOutput for PlainFormatter<W, E> {
    fn output_node(&mut self, node: &NodeLine<'_>) -> io::Result<()> {
        writeln!(self.out, "{}", node.text())
    }

    fn warning(&mut self, warning: &TraversalWarning) -> io::Result<()> {
        writeln!(self.err, "{}{}", WARNING_PREFIX, warning)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::NodeKind;
    use std::path::PathBuf;

    #[test]
    fn test_lines_and_warnings_go_to_separate_writers() {
        let mut formatter = PlainFormatter::new(Vec::new(), Vec::new());
        formatter
            .output_node(&NodeLine {
                prefix: "│   ",
                is_last: false,
                label: "a.txt",
                kind: NodeKind::File { size: 3 },
            })
            .unwrap();
        formatter
            .output_node(&NodeLine {
                prefix: "",
                is_last: true,
                label: "src",
                kind: NodeKind::Directory,
            })
            .unwrap();
        formatter
            .warning(&TraversalWarning::DepthCeiling {
                path: PathBuf::from("/deep"),
            })
            .unwrap();

        let (out, err) = formatter.into_inner();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "│   ├── a.txt (3 bytes)\n└── src/\n"
        );
        assert_eq!(
            String::from_utf8(err).unwrap(),
            "twig: warning: directory nesting too deep at '/deep', not descending\n"
        );
    }
}
