//! Test utilities for building temporary directory trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory tree for testing.
///
/// Everything lives under a named root directory inside the temp dir, so
/// the root's name (and so the output filename) is predictable. The whole
/// tree is removed when dropped.
pub struct TestTree {
    dir: TempDir,
    root: PathBuf,
}

impl TestTree {
    /// Create an empty tree whose root directory is called `root_name`.
    pub fn new(root_name: &str) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let root = dir.path().join(root_name);
        fs::create_dir(&root).expect("Failed to create root dir");
        Self { dir, root }
    }

    /// The root directory to render.
    pub fn path(&self) -> &Path {
        &self.root
    }

    /// The temp dir holding the root; a convenient working directory.
    pub fn workdir(&self) -> &Path {
        self.dir.path()
    }

    /// Add a file below the root.
    ///
    /// Creates parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.root.join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Add a (possibly nested) directory below the root.
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.root.join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Build a directory `levels` deep with one file at the bottom.
    pub fn add_chain(&self, levels: usize, leaf: &str) -> PathBuf {
        let mut rel = PathBuf::new();
        for i in 0..levels {
            rel.push(format!("level{}", i));
        }
        rel.push(leaf);
        self.add_file(&rel.to_string_lossy(), "")
    }
}
