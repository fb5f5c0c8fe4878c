//! TreeWalker - renders a directory depth-first into a streaming sink

use std::io;
use std::path::Path;

use super::config::WalkerConfig;
use super::lineage::Lineage;
use super::streaming::StreamingOutput;
use super::traversal::{list_ordered, loops_back};
use super::utils::root_name;

/// Counts of what a walk emitted, root excluded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkStats {
    pub directories: usize,
    pub files: usize,
}

impl WalkStats {
    fn add(&mut self, other: WalkStats) {
        self.directories += other.directories;
        self.files += other.files;
    }
}

/// Streaming tree walker. Holds nothing but its config; every walk lists
/// the filesystem afresh and uses O(depth) memory.
#[derive(Debug, Clone, Default)]
pub struct TreeWalker {
    config: WalkerConfig,
}

impl TreeWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    /// Emit the root's name, then everything beneath it.
    pub fn walk<O: StreamingOutput>(&self, root: &Path, output: &mut O) -> io::Result<WalkStats> {
        output.output_root(&root_name(root))?;
        let stats = self.render(root, &mut Lineage::new(), output)?;
        output.finish()?;
        Ok(stats)
    }

    /// Emit the children of `dir` below the given ancestor lineage.
    ///
    /// A directory that can't be listed emits nothing. Symlinked
    /// directories are entered unless they lead back to an ancestor of
    /// `dir`. Only sink errors are returned.
    pub fn render<O: StreamingOutput>(
        &self,
        dir: &Path,
        lineage: &mut Lineage,
        output: &mut O,
    ) -> io::Result<WalkStats> {
        let entries = list_ordered(dir, &self.config);
        let prefix = lineage.prefix();
        let total = entries.len();
        let mut stats = WalkStats::default();

        for (i, entry) in entries.iter().enumerate() {
            let is_last = i == total - 1;
            output.output_node(&entry.name, entry.is_dir, is_last, &prefix)?;

            if !entry.is_dir {
                stats.files += 1;
                continue;
            }

            stats.directories += 1;
            if entry.is_symlink && loops_back(dir, &entry.path) {
                log::debug!("not following {}: leads back to an ancestor", entry.path.display());
                continue;
            }

            lineage.push(is_last);
            let result = self.render(&entry.path, lineage, output);
            lineage.pop();
            stats.add(result?);
        }

        Ok(stats)
    }
}
