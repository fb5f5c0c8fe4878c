//! Shared utility functions for tree walking

use std::cmp::Ordering;
use std::path::Path;

/// Compare two entry names ignoring case, falling back to exact order
/// so that the result is total.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
        .then_with(|| a.cmp(b))
}

/// Name shown on the first line of a rendering.
///
/// Uses the last path component; paths without one (`.`, `..`, `/`) are
/// shown as given.
pub fn root_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_names_ignores_case() {
        assert_eq!(compare_names("apple", "Banana"), Ordering::Less);
        assert_eq!(compare_names("Zebra", "apple"), Ordering::Greater);
        assert_eq!(compare_names("README.md", "readme.md"), Ordering::Less);
        assert_eq!(compare_names("same", "same"), Ordering::Equal);
    }

    #[test]
    fn test_compare_names_prefix_sorts_first() {
        assert_eq!(compare_names("lib", "lib.rs"), Ordering::Less);
        assert_eq!(compare_names("a", "AB"), Ordering::Less);
    }

    #[test]
    fn test_compare_names_utf8() {
        assert_eq!(compare_names("Éclair", "éclair"), Ordering::Less);
        assert_eq!(compare_names("日本", "日本語"), Ordering::Less);
    }

    #[test]
    fn test_root_name() {
        assert_eq!(root_name(Path::new("/home/user/project")), "project");
        assert_eq!(root_name(Path::new("project/")), "project");
        assert_eq!(root_name(Path::new(".")), ".");
        assert_eq!(root_name(Path::new("/")), "/");
    }
}
