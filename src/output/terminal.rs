//! Terminal output formatter for scan results.
//!
//! Writes the line-exact report:
//!
//! ```text
//! Scanning directory sizes under: /srv
//! This can take significant time on large drives...
//!
//! Scanned directories: 1234
//!
//! Top 3 directories by recursive size:
//! ------------------------------------------------------------------------------------------------
//! Rank          Size  Path
//! ------------------------------------------------------------------------------------------------
//!    1      12.00 GB  /srv
//! ```

use super::RULE_WIDTH;
use crate::tree::write_tree;
use crate::utils::human_size;
use fnv::FnvHashMap;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Writes the banner printed before the scan starts.
pub fn render_header<W: Write>(out: &mut W, root: &Path) -> io::Result<()> {
    writeln!(out, "Scanning directory sizes under: {}", root.display())?;
    writeln!(out, "This can take significant time on large drives...")
}

/// Writes the number of directories visited.
pub fn render_visited<W: Write>(out: &mut W, visited: u64) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Scanned directories: {}", visited)
}

/// Writes the ranked table.
///
/// # Arguments
/// * `out` - Destination writer
/// * `top` - Already-ranked `(path, size)` rows, largest first
///
/// Each row is a 4-wide right-aligned rank, a 12-wide right-aligned human
/// size and the full path.
pub fn render_ranking<W: Write>(out: &mut W, top: &[(PathBuf, u64)]) -> io::Result<()> {
    let rule = "-".repeat(RULE_WIDTH);
    writeln!(out)?;
    writeln!(out, "Top {} directories by recursive size:", top.len())?;
    writeln!(out, "{}", rule)?;
    writeln!(out, "{:>4}  {:>12}  Path", "Rank", "Size")?;
    writeln!(out, "{}", rule)?;
    for (idx, (path, size)) in top.iter().enumerate() {
        writeln!(
            out,
            "{:>4}  {:>12}  {}",
            idx + 1,
            human_size(*size),
            path.display()
        )?;
    }
    Ok(())
}

/// Writes the tree section: a header, a rule and the bounded tree.
pub fn render_tree_section<W: Write>(
    out: &mut W,
    root: &Path,
    children: &FnvHashMap<PathBuf, Vec<PathBuf>>,
    total_size: &FnvHashMap<PathBuf, u64>,
    depth_limit: usize,
    per_level_limit: usize,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Largest children tree view:")?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
    write_tree(out, root, children, total_size, depth_limit, per_level_limit)
}
