//! Directory traversal and size aggregation for `durank`.
//!
//! This module handles:
//! - Iterative depth-first traversal with an explicit stack (no recursion)
//! - Per-directory own-size accumulation from an [`EntryLister`]
//! - Post-order aggregation of own sizes into recursive totals
//! - Filtering via glob-based exclude rules
//! - Progress spinner via `indicatif`
//!
//! The main entry points are [`scan`] and [`scan_with`], which return a
//! [`ScanResult`] owned by the caller.
//!
//! A directory is always popped (and logged) before any of its descendants
//! are discovered, so walking the visit log backwards finalises every child
//! before its parent. Aggregation is two linear passes and never touches the
//! filesystem again.

use crate::cli::SizeMode;
use crate::data::{EntryKind, ScanResult};
use crate::lister::{EntryLister, FsLister};
use fnv::{FnvHashMap, FnvHashSet};
use globset::GlobSet;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Options controlling a scan.
///
/// # Fields
/// * `exclude` - Directories matching this set are neither visited nor counted
/// * `progress` - Show a spinner on stderr while traversing
#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    pub exclude: GlobSet,
    pub progress: bool,
}

/// Scans `root` on the local filesystem with apparent sizes and no exclusions.
pub fn scan(root: &Path) -> ScanResult {
    scan_with(
        root,
        &FsLister::new(SizeMode::Apparent),
        &ScanOptions::default(),
    )
}

/// Walks the tree below `root` once and returns fully aggregated sizes.
///
/// # Arguments
/// * `root` - Absolute path of the directory to scan (validated by the caller)
/// * `lister` - Source of directory listings
/// * `options` - Exclusion rules and progress display
///
/// # Returns
/// * `ScanResult` - Totals, own sizes, child relation, visit count and log
///
/// Enumeration failures never abort the scan: an unreadable directory is
/// counted as visited with no size and no children, and an unreadable file
/// contributes nothing.
pub fn scan_with<L: EntryLister + ?Sized>(
    root: &Path,
    lister: &L,
    options: &ScanOptions,
) -> ScanResult {
    let pb = spinner(options.progress);

    let mut own_size: FnvHashMap<PathBuf, u64> = FnvHashMap::default();
    let mut children: FnvHashMap<PathBuf, Vec<PathBuf>> = FnvHashMap::default();
    let mut visit_order: Vec<PathBuf> = Vec::new();
    let mut stack: Vec<PathBuf> = vec![root.to_path_buf()];
    // Every directory ever pushed; a path gets at most one parent edge.
    let mut discovered: FnvHashSet<PathBuf> = FnvHashSet::default();
    discovered.insert(root.to_path_buf());

    while let Some(dir) = stack.pop() {
        if own_size.contains_key(&dir) {
            tracing::debug!("Already visited {:?}, skipping", dir);
            continue;
        }

        let mut own = 0u64;
        let mut subdirs = Vec::new();

        match lister.list(&dir) {
            Ok(entries) => {
                for entry in entries {
                    match entry.kind {
                        EntryKind::File => own += entry.size,
                        EntryKind::Dir => {
                            if options.exclude.is_match(&entry.path) {
                                tracing::debug!("Excluded {:?}", entry.path);
                                continue;
                            }
                            if !discovered.insert(entry.path.clone()) {
                                tracing::debug!("Duplicate entry {:?}, skipping", entry.path);
                                continue;
                            }
                            subdirs.push(entry.path);
                        }
                        EntryKind::Symlink | EntryKind::Inaccessible => {}
                    }
                }
            }
            Err(err) => {
                tracing::debug!("Cannot enumerate {:?}: {}", dir, err);
            }
        }

        stack.extend(subdirs.iter().cloned());
        if !subdirs.is_empty() {
            children.insert(dir.clone(), subdirs);
        }
        own_size.insert(dir.clone(), own);
        visit_order.push(dir);

        if let Some(pb) = &pb {
            pb.set_message(visit_order.len().to_string());
            pb.tick();
        }
    }

    if let Some(pb) = &pb {
        pb.finish_and_clear();
    }

    let total_size = aggregate(&visit_order, &own_size, &children);
    let visited = visit_order.len() as u64;
    tracing::debug!("Visited {} directories under {:?}", visited, root);

    ScanResult {
        total_size,
        own_size,
        children,
        visited,
        visit_order,
    }
}

/// Converts own sizes into recursive totals.
///
/// `visit_order` must list every parent before its descendants; iterating it
/// in reverse then sees every child's final total before the parent adds it.
/// An edge from a directory to itself is ignored.
pub fn aggregate(
    visit_order: &[PathBuf],
    own_size: &FnvHashMap<PathBuf, u64>,
    children: &FnvHashMap<PathBuf, Vec<PathBuf>>,
) -> FnvHashMap<PathBuf, u64> {
    let mut total_size: FnvHashMap<PathBuf, u64> = visit_order
        .iter()
        .map(|dir| (dir.clone(), own_size.get(dir).copied().unwrap_or(0)))
        .collect();

    for dir in visit_order.iter().rev() {
        let Some(kids) = children.get(dir) else {
            continue;
        };
        let sum: u64 = kids
            .iter()
            .filter(|child| *child != dir)
            .map(|child| total_size.get(child).copied().unwrap_or(0))
            .sum();
        if let Some(total) = total_size.get_mut(dir) {
            *total += sum;
        }
    }

    total_size
}

fn spinner(enabled: bool) -> Option<ProgressBar> {
    if !enabled {
        return None;
    }
    let pb = ProgressBar::new_spinner();
    match ProgressStyle::default_spinner()
        .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
        .template("{spinner} Scanning directories... {msg} [{elapsed}]")
    {
        Ok(style) => pb.set_style(style),
        Err(err) => tracing::warn!("Failed to set progress template: {}", err),
    }
    pb.enable_steady_tick(Duration::from_millis(100));
    Some(pb)
}
