//! Immediate-entry enumeration for a single directory.
//!
//! The traversal engine never touches the filesystem directly; it asks an
//! [`EntryLister`] for the children of one directory at a time. [`FsLister`]
//! is the real implementation on top of [`std::fs::read_dir`]. Tests swap in
//! their own listers to simulate failures.
//!
//! Links are never followed: an entry's type comes from
//! [`DirEntry::file_type`], which reports the link itself.

use crate::cli::SizeMode;
use crate::data::{EntryKind, ListedEntry};
use std::fs::{self, DirEntry, Metadata};
use std::io;
use std::path::{Path, PathBuf};

/// Lazy sequence of the immediate entries of a directory.
pub type Entries<'a> = Box<dyn Iterator<Item = ListedEntry> + 'a>;

/// Source of directory listings for the traversal engine.
pub trait EntryLister {
    /// Lists the immediate entries of `dir`.
    ///
    /// # Errors
    /// Returns an error if the directory itself cannot be opened. Failures on
    /// individual entries are reported in-band as [`EntryKind::Inaccessible`].
    fn list(&self, dir: &Path) -> io::Result<Entries<'_>>;
}

/// Lists directories on the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsLister {
    mode: SizeMode,
}

impl FsLister {
    pub fn new(mode: SizeMode) -> Self {
        Self { mode }
    }
}

impl EntryLister for FsLister {
    fn list(&self, dir: &Path) -> io::Result<Entries<'_>> {
        let mode = self.mode;
        let parent = dir.to_path_buf();
        let read_dir = fs::read_dir(dir)?;
        Ok(Box::new(read_dir.map(move |entry| match entry {
            Ok(entry) => classify(&entry, mode),
            Err(err) => {
                tracing::debug!("Skipping unreadable entry in {:?}: {}", parent, err);
                inaccessible(parent.clone())
            }
        })))
    }
}

fn classify(entry: &DirEntry, mode: SizeMode) -> ListedEntry {
    let path = entry.path();
    let file_type = match entry.file_type() {
        Ok(t) => t,
        Err(err) => {
            tracing::debug!("Cannot read type of {:?}: {}", path, err);
            return inaccessible(path);
        }
    };

    if file_type.is_symlink() {
        return ListedEntry {
            path,
            kind: EntryKind::Symlink,
            size: 0,
        };
    }
    if file_type.is_dir() {
        return ListedEntry {
            path,
            kind: EntryKind::Dir,
            size: 0,
        };
    }

    // DirEntry::metadata does not traverse links
    match entry.metadata() {
        Ok(meta) => ListedEntry {
            path,
            kind: EntryKind::File,
            size: entry_size(&meta, mode),
        },
        Err(err) => {
            tracing::debug!("Cannot stat {:?}: {}", path, err);
            inaccessible(path)
        }
    }
}

fn inaccessible(path: PathBuf) -> ListedEntry {
    ListedEntry {
        path,
        kind: EntryKind::Inaccessible,
        size: 0,
    }
}

/// Returns the size of a file according to `mode`.
///
/// * `SizeMode::Apparent` - the logical length in bytes
/// * `SizeMode::Allocated` - `st_blocks * 512` on Unix, like `du`; the
///   logical length elsewhere
pub fn entry_size(meta: &Metadata, mode: SizeMode) -> u64 {
    match mode {
        SizeMode::Apparent => meta.len(),
        SizeMode::Allocated => allocated_size(meta),
    }
}

#[cfg(unix)]
fn allocated_size(meta: &Metadata) -> u64 {
    use std::os::unix::fs::MetadataExt;
    meta.blocks() * 512
}

#[cfg(not(unix))]
fn allocated_size(meta: &Metadata) -> u64 {
    meta.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sorted_listing(dir: &Path) -> Vec<ListedEntry> {
        let mut entries: Vec<ListedEntry> = FsLister::default()
            .list(dir)
            .expect("listing should succeed")
            .collect();
        entries.sort_by(|a, b| a.path.cmp(&b.path));
        entries
    }

    #[test]
    fn test_lists_files_and_dirs() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.bin"), vec![0u8; 100]).unwrap();
        fs::create_dir(temp.path().join("b")).unwrap();

        let entries = sorted_listing(temp.path());
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].kind, EntryKind::File);
        assert_eq!(entries[0].size, 100);
        assert_eq!(entries[0].path, temp.path().join("a.bin"));
        assert_eq!(entries[1].kind, EntryKind::Dir);
        assert_eq!(entries[1].size, 0);
    }

    #[test]
    fn test_empty_dir_lists_nothing() {
        let temp = TempDir::new().unwrap();
        assert!(sorted_listing(temp.path()).is_empty());
    }

    #[test]
    fn test_missing_dir_is_an_error() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("gone");
        assert!(FsLister::default().list(&missing).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinks_are_tagged_not_followed() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("target");
        fs::create_dir(&target).unwrap();
        fs::write(temp.path().join("file.txt"), b"hello").unwrap();
        std::os::unix::fs::symlink(&target, temp.path().join("dir_link")).unwrap();
        std::os::unix::fs::symlink(temp.path().join("file.txt"), temp.path().join("file_link"))
            .unwrap();

        let entries = sorted_listing(temp.path());
        let kind_of = |name: &str| {
            entries
                .iter()
                .find(|e| e.path == temp.path().join(name))
                .map(|e| e.kind)
        };
        assert_eq!(kind_of("dir_link"), Some(EntryKind::Symlink));
        assert_eq!(kind_of("file_link"), Some(EntryKind::Symlink));
        assert_eq!(kind_of("target"), Some(EntryKind::Dir));
        assert_eq!(kind_of("file.txt"), Some(EntryKind::File));
    }

    #[cfg(unix)]
    #[test]
    fn test_allocated_size_is_block_multiple() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("data.bin");
        fs::write(&path, vec![1u8; 10]).unwrap();
        let meta = fs::symlink_metadata(&path).unwrap();

        assert_eq!(entry_size(&meta, SizeMode::Apparent), 10);
        assert_eq!(entry_size(&meta, SizeMode::Allocated) % 512, 0);
    }
}
