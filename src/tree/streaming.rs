//! Sink interface the walker streams lines into

use std::io;

/// Callback for streaming output - receives one call per rendered line.
///
/// `prefix` is the indent for the entry's depth, not including the
/// connector. Implementations write `prefix`, then the connector chosen
/// by `is_last`, then `name`, then a line break.
pub trait StreamingOutput {
    fn output_root(&mut self, name: &str) -> io::Result<()>;

    fn output_node(
        &mut self,
        name: &str,
        is_dir: bool,
        is_last: bool,
        prefix: &str,
    ) -> io::Result<()>;

    /// Called once after the last line.
    fn finish(&mut self) -> io::Result<()> {
        Ok(())
    }
}
