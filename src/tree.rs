//! Bounded tree view of the largest subdirectories.
//!
//! Starting at the scan root, each node lists its children ordered by
//! recursive size (largest first), keeping at most `per_level_limit` of them
//! and descending no deeper than `depth_limit` levels:
//!
//! ```text
//! project (1.20 MB)
//! ├── target (1.00 MB)
//! │   └── debug (1.00 MB)
//! └── src (200.00 kB)
//! ```
//!
//! The child order is computed into a fresh vector per node; the scan's
//! `children` relation is only read. Rendering uses an explicit stack.

use crate::utils::{display_name, human_size};
use fnv::FnvHashMap;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

struct Frame<'a> {
    node: &'a Path,
    prefix: String,
    depth: usize,
    is_last: bool,
}

/// Renders the tree rooted at `root` into lines without trailing newlines.
///
/// # Arguments
/// * `root` - Node printed first, without connector
/// * `children` - Parent to immediate subdirectories relation
/// * `total_size` - Recursive size of each directory (missing means 0)
/// * `depth_limit` - Nodes at this depth are printed but not expanded
/// * `per_level_limit` - Maximum children shown under any node
pub fn render_tree(
    root: &Path,
    children: &FnvHashMap<PathBuf, Vec<PathBuf>>,
    total_size: &FnvHashMap<PathBuf, u64>,
    depth_limit: usize,
    per_level_limit: usize,
) -> Vec<String> {
    let size_of = |p: &Path| total_size.get(p).copied().unwrap_or(0);
    let mut lines = Vec::new();
    let mut stack = vec![Frame {
        node: root,
        prefix: String::new(),
        depth: 0,
        is_last: true,
    }];

    while let Some(frame) = stack.pop() {
        let (line_prefix, child_prefix) = if frame.depth == 0 {
            (String::new(), String::new())
        } else if frame.is_last {
            (
                format!("{}└── ", frame.prefix),
                format!("{}    ", frame.prefix),
            )
        } else {
            (
                format!("{}├── ", frame.prefix),
                format!("{}│   ", frame.prefix),
            )
        };

        lines.push(format!(
            "{}{} ({})",
            line_prefix,
            display_name(frame.node),
            human_size(size_of(frame.node))
        ));

        if frame.depth >= depth_limit {
            continue;
        }

        let shown = largest_children(frame.node, children, total_size, per_level_limit);
        let count = shown.len();
        // Pushed in reverse so the largest child is rendered first
        for (i, child) in shown.into_iter().enumerate().rev() {
            stack.push(Frame {
                node: child,
                prefix: child_prefix.clone(),
                depth: frame.depth + 1,
                is_last: i + 1 == count,
            });
        }
    }

    lines
}

/// Writes the rendered tree to `out`, one line per node.
pub fn write_tree<W: Write>(
    out: &mut W,
    root: &Path,
    children: &FnvHashMap<PathBuf, Vec<PathBuf>>,
    total_size: &FnvHashMap<PathBuf, u64>,
    depth_limit: usize,
    per_level_limit: usize,
) -> io::Result<()> {
    for line in render_tree(root, children, total_size, depth_limit, per_level_limit) {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

/// Children of `node` ordered by size descending, truncated to `limit`.
///
/// Equal sizes keep enumeration order.
pub fn largest_children<'a>(
    node: &Path,
    children: &'a FnvHashMap<PathBuf, Vec<PathBuf>>,
    total_size: &FnvHashMap<PathBuf, u64>,
    limit: usize,
) -> Vec<&'a Path> {
    let size_of = |p: &Path| total_size.get(p).copied().unwrap_or(0);
    let mut ordered: Vec<&Path> = children
        .get(node)
        .map(|kids| kids.iter().map(PathBuf::as_path).collect())
        .unwrap_or_default();
    ordered.sort_by(|a, b| size_of(b).cmp(&size_of(a)));
    ordered.truncate(limit);
    ordered
}
