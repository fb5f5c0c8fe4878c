//! Directory entries as the walker sees them

use std::fs::{self, DirEntry};
use std::path::PathBuf;

/// Names starting with this character are hidden.
pub const HIDDEN_MARKER: char = '.';

/// A child of a directory, classified for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntryInfo {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
    pub is_hidden: bool,
    pub is_symlink: bool,
}

impl DirEntryInfo {
    /// Classify a raw directory entry. Returns `None` if its type can't be read.
    pub fn from_dir_entry(entry: &DirEntry) -> Option<Self> {
        let file_type = entry.file_type().ok()?;
        let path = entry.path();
        let is_symlink = file_type.is_symlink();

        // Links sort by what they point at; a dangling link is a file
        let is_dir = if is_symlink {
            fs::metadata(&path).is_ok_and(|m| m.is_dir())
        } else {
            file_type.is_dir()
        };

        let name = entry.file_name().to_string_lossy().to_string();
        let is_hidden = is_hidden(&name, entry);

        Some(Self {
            name,
            path,
            is_dir,
            is_hidden,
            is_symlink,
        })
    }
}

#[cfg(windows)]
fn is_hidden(name: &str, entry: &DirEntry) -> bool {
    use std::os::windows::fs::MetadataExt;

    const FILE_ATTRIBUTE_HIDDEN: u32 = 0x2;

    name.starts_with(HIDDEN_MARKER)
        || entry
            .metadata()
            .is_ok_and(|m| m.file_attributes() & FILE_ATTRIBUTE_HIDDEN != 0)
}

#[cfg(not(windows))]
fn is_hidden(name: &str, _entry: &DirEntry) -> bool {
    name.starts_with(HIDDEN_MARKER)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn entry_named(dir: &TempDir, name: &str) -> DirEntryInfo {
        fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .find(|e| e.file_name() == name)
            .and_then(|e| DirEntryInfo::from_dir_entry(&e))
            .expect("entry should exist")
    }

    #[test]
    fn test_classifies_files_and_dirs() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("src")).unwrap();
        fs::write(dir.path().join("main.rs"), "fn main() {}").unwrap();

        let src = entry_named(&dir, "src");
        assert!(src.is_dir);
        assert!(!src.is_symlink);
        assert!(!src.is_hidden);

        let main = entry_named(&dir, "main.rs");
        assert!(!main.is_dir);
    }

    #[test]
    fn test_dot_prefix_is_hidden() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(".env"), "").unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();

        assert!(entry_named(&dir, ".env").is_hidden);
        assert!(entry_named(&dir, ".git").is_hidden);
    }

    #[test]
    #[cfg(unix)]
    fn test_symlink_classified_by_target() {
        use std::os::unix::fs::symlink;

        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("real")).unwrap();
        symlink(dir.path().join("real"), dir.path().join("link")).unwrap();
        symlink("nowhere", dir.path().join("dangling")).unwrap();

        let link = entry_named(&dir, "link");
        assert!(link.is_dir);
        assert!(link.is_symlink);

        let dangling = entry_named(&dir, "dangling");
        assert!(!dangling.is_dir);
        assert!(dangling.is_symlink);
    }
}
