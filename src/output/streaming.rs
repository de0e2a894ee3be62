//! Streaming output formatter
//!
//! This module provides `StreamingFormatter` which writes tree lines
//! directly to stdout as the renderer produces them, and warnings to stderr.

use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::error::TraversalWarning;
use crate::tree::{NodeKind, NodeLine, TreeOutput};

use super::WARNING_PREFIX;
use super::config::OutputConfig;

/// Console formatter - outputs directly to stdout without buffering.
pub struct StreamingFormatter {
    stdout: StandardStream,
    stderr: StandardStream,
}

impl StreamingFormatter {
    pub fn new(config: OutputConfig) -> Self {
        let choice = if config.use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        Self {
            stdout: StandardStream::stdout(choice),
            stderr: StandardStream::stderr(choice),
        }
    }
}

impl TreeOutput for StreamingFormatter {
    fn output_node(&mut self, node: &NodeLine<'_>) -> io::Result<()> {
        write!(self.stdout, "{}{}", node.prefix, node.connector())?;

        match node.kind {
            NodeKind::Directory => {
                self.stdout
                    .set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
                write!(self.stdout, "{}", node.label)?;
                self.stdout.reset()?;
                writeln!(self.stdout, "{}", node.suffix())?;
            }
            NodeKind::File { .. } => {
                write!(self.stdout, "{}", node.label)?;
                self.stdout
                    .set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
                write!(self.stdout, "{}", node.suffix())?;
                self.stdout.reset()?;
                writeln!(self.stdout)?;
            }
        }
        Ok(())
    }

    fn warning(&mut self, warning: &TraversalWarning) -> io::Result<()> {
        self.stdout.flush()?;
        self.stderr
            .set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
        write!(self.stderr, "{}", WARNING_PREFIX)?;
        self.stderr.reset()?;
        writeln!(self.stderr, "{}", warning)
    }
}
