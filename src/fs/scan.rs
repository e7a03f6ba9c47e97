//! Recursive directory listing.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Get a recursive directory listing.
///
/// Walks the tree rooted at `path` and returns the full path of every
/// non-directory entry, in traversal order. When `search` is given, only
/// paths containing it (case-sensitive) are kept.
///
/// An unreadable or nonexistent root yields an empty listing rather than
/// an error; unreadable subtrees are skipped the same way.
pub fn scan_dir_recursive(path: &Path, search: Option<&str>) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for entry in WalkDir::new(path).into_iter().filter_map(|e| e.ok()) {
        if entry.file_type().is_dir() {
            continue;
        }

        let filename = entry.path().to_string_lossy();

        // Iterator artifacts ("." / ".." self-references, stray directory
        // entries) render with a trailing dot or slash and are excluded.
        if filename.ends_with('.') || filename.ends_with('/') {
            continue;
        }

        match search {
            Some(needle) if !filename.contains(needle) => continue,
            _ => files.push(entry.path().to_path_buf()),
        }
    }

    files
}
