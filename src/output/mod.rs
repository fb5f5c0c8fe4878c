//! Tree output sinks
//!
//! This module provides the two `StreamingOutput` implementations:
//! - `StreamingFormatter` - console output, optionally colored
//! - `PlainFormatter` - uncolored output to any writer (the tree file)

mod config;
mod streaming;
mod tree;

// Re-export public types and functions
pub use config::OutputConfig;
pub use streaming::StreamingFormatter;
pub use tree::{PlainFormatter, render_to_string};
