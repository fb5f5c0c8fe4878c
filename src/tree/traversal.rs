//! Listing, filtering and ordering of one directory level.

use std::fs;
use std::path::Path;

use super::config::WalkerConfig;
use super::entry::DirEntryInfo;
use super::utils::compare_names;

/// Read the immediate children of `path`.
///
/// Returns `None` when the directory can't be listed. Entries that fail
/// to read mid-listing are dropped.
pub fn read_entries(path: &Path) -> Option<Vec<DirEntryInfo>> {
    let entries = match std::fs::read_dir(path) {
        Ok(e) => e,
        Err(err) => {
            log::debug!("skipping unreadable directory {}: {}", path.display(), err);
            return None;
        }
    };

    Some(
        entries
            .filter_map(|e| e.ok())
            .filter_map(|e| DirEntryInfo::from_dir_entry(&e))
            .collect(),
    )
}

/// Put one directory's entries in emission order: visible directories,
/// then visible files, each sorted case-insensitively.
pub fn order_entries(entries: Vec<DirEntryInfo>, config: &WalkerConfig) -> Vec<DirEntryInfo> {
    let (mut dirs, mut files): (Vec<_>, Vec<_>) = entries
        .into_iter()
        .filter(|entry| config.show_hidden || !entry.is_hidden)
        .partition(|entry| entry.is_dir);

    dirs.sort_by(|a, b| compare_names(&a.name, &b.name));
    files.sort_by(|a, b| compare_names(&a.name, &b.name));

    dirs.extend(files);
    dirs
}

/// List a directory and order it for rendering. Unreadable directories
/// come back empty.
pub fn list_ordered(path: &Path, config: &WalkerConfig) -> Vec<DirEntryInfo> {
    read_entries(path)
        .map(|entries| order_entries(entries, config))
        .unwrap_or_default()
}

/// Whether following the symlink `link`, found in `dir`, would land on
/// `dir` or one of its ancestors. Links that can't be resolved count as
/// looping so they are never entered.
pub fn loops_back(dir: &Path, link: &Path) -> bool {
    let Ok(target) = fs::canonicalize(link) else {
        return true;
    };
    dir.ancestors()
        .filter_map(|ancestor| fs::canonicalize(ancestor).ok())
        .any(|ancestor| ancestor.starts_with(&target))
}
