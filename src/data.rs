//! Data structures for representing directory entries and scan results.
//!
//! This module defines the core data structures used throughout `durank`:
//! the entries produced by an [`EntryLister`](crate::lister::EntryLister)
//! and the [`ScanResult`] returned by the traversal engine.

use fnv::FnvHashMap;
use std::path::{Path, PathBuf};

/// Represents a single immediate child of a directory, as produced by a lister.
///
/// # Fields
/// * `path` - The full path of the entry (`parent.join(name)`)
/// * `kind` - What the entry is; links are never resolved
/// * `size` - Size in bytes for files, 0 for everything else
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedEntry {
    pub path: PathBuf,
    pub kind: EntryKind,
    pub size: u64,
}

/// Represents the type of a listed entry.
///
/// # Variants
/// * `File` - A regular file (or anything that is neither dir nor link)
/// * `Dir` - A directory
/// * `Symlink` - A symbolic or reparse link, never followed
/// * `Inaccessible` - An entry whose type or size could not be read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Dir,
    Symlink,
    Inaccessible,
}

/// The outcome of a single traversal.
///
/// Every map is keyed by the absolute directory path. The maps are owned by
/// the result; consumers only borrow them.
///
/// # Fields
/// * `total_size` - Recursive size of every visited directory
/// * `own_size` - Bytes of files located directly in each directory
/// * `children` - Immediate subdirectories in enumeration order
/// * `visited` - Number of directories visited, root included
/// * `visit_order` - Directories in the order they were popped
#[derive(Debug, Clone, Default)]
pub struct ScanResult {
    pub total_size: FnvHashMap<PathBuf, u64>,
    pub own_size: FnvHashMap<PathBuf, u64>,
    pub children: FnvHashMap<PathBuf, Vec<PathBuf>>,
    pub visited: u64,
    pub visit_order: Vec<PathBuf>,
}

impl ScanResult {
    /// Recursive size of `dir`, or 0 if it was never visited.
    pub fn total_of(&self, dir: &Path) -> u64 {
        self.total_size.get(dir).copied().unwrap_or(0)
    }

    /// Direct file bytes of `dir`, or 0 if it was never visited.
    pub fn own_of(&self, dir: &Path) -> u64 {
        self.own_size.get(dir).copied().unwrap_or(0)
    }

    /// Immediate subdirectories of `dir` in enumeration order.
    pub fn children_of(&self, dir: &Path) -> &[PathBuf] {
        self.children.get(dir).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// A single row of the ranked table (used for CSV serialization).
///
/// # Fields
/// * `rank` - 1-based position in the ranking
/// * `path` - Full path of the directory
/// * `size_bytes` - Recursive size in bytes
/// * `size_human` - Human-readable size (e.g., "1.20 MB")
#[derive(Debug, Clone, serde::Serialize)]
pub struct RankedDir {
    pub rank: usize,
    pub path: String,
    pub size_bytes: u64,
    pub size_human: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_result_lookups_default_to_empty() {
        let mut result = ScanResult::default();
        let root = PathBuf::from("/data");
        let child = root.join("logs");
        result.total_size.insert(root.clone(), 10);
        result.own_size.insert(root.clone(), 4);
        result.children.insert(root.clone(), vec![child.clone()]);

        assert_eq!(result.total_of(&root), 10);
        assert_eq!(result.own_of(&root), 4);
        assert_eq!(result.children_of(&root), &[child.clone()]);

        assert_eq!(result.total_of(&child), 0);
        assert_eq!(result.own_of(&child), 0);
        assert!(result.children_of(&child).is_empty());
    }
}
