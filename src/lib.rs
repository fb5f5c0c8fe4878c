//! dirtree - print a directory as a tree, to the console, a file, or both

pub mod coordinator;
pub mod error;
pub mod output;
#[cfg(feature = "test-utils")]
pub mod test_utils;
pub mod tree;

pub use coordinator::{
    FileReport, OutputMode, RenderRequest, RunOutcome, output_file_name, run, run_with_console,
    validate_root, write_tree_file,
};
pub use error::DirtreeError;
pub use output::{OutputConfig, PlainFormatter, StreamingFormatter, render_to_string};
pub use tree::{Lineage, StreamingOutput, TreeWalker, WalkStats, WalkerConfig};
