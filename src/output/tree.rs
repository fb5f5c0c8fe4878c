//! Plain tree formatter
//!
//! This module provides `PlainFormatter`, which writes uncolored tree lines
//! to any `Write`: the output file, or an in-memory buffer.

use std::io::{self, Write};
use std::path::Path;

use crate::tree::{StreamingOutput, TreeWalker, connector};

/// Formatter for uncolored output to an arbitrary writer.
pub struct PlainFormatter<W: Write> {
    writer: W,
}

impl<W: Write> PlainFormatter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> StreamingOutput for PlainFormatter<W> {
    fn output_root(&mut self, name: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", name)
    }

    fn output_node(
        &mut self,
        name: &str,
        _is_dir: bool,
        is_last: bool,
        prefix: &str,
    ) -> io::Result<()> {
        writeln!(self.writer, "{}{}{}", prefix, connector(is_last), name)
    }

    fn finish(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

/// Render a whole tree, root line included, into a string.
pub fn render_to_string(walker: &TreeWalker, root: &Path) -> io::Result<String> {
    let mut formatter = PlainFormatter::new(Vec::new());
    walker.walk(root, &mut formatter)?;
    String::from_utf8(formatter.into_inner())
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
