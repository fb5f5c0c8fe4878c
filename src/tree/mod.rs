//! Directory tree walking logic
//!
//! `TreeWalker` lists a directory, orders its entries (directories first,
//! then files, each case-insensitively) and streams one line per entry into
//! a `StreamingOutput`, recursing depth-first. It keeps no tree in memory;
//! the only state threaded through recursion is the ancestor `Lineage`.

mod config;
mod entry;
mod lineage;
mod streaming;
mod traversal;
mod utils;
mod walker;

// Re-export public types
pub use config::WalkerConfig;
pub use entry::{DirEntryInfo, HIDDEN_MARKER};
pub use lineage::{BLANK_INDENT, BRANCH, LAST_BRANCH, Lineage, PIPE_INDENT, connector};
pub use streaming::StreamingOutput;
pub use traversal::{list_ordered, loops_back, order_entries, read_entries};
pub use utils::{compare_names, root_name};
pub use walker::{TreeWalker, WalkStats};
