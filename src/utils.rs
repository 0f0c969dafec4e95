//! Utility functions for the `durank` tool.
//!
//! This module provides:
//! - Human-readable byte formatting
//! - Scan root validation
//! - Glob-based exclusion pattern parsing
//! - Leaf-name display for tree lines

use anyhow::{Context, Result, bail};
use globset::{Glob, GlobSet, GlobSetBuilder};
use humansize::{FormatSizeOptions, WINDOWS, format_size};
use std::path::{Path, PathBuf};

/// Formats a byte count with 1024-based units and two decimals, e.g. `350.00 B`,
/// `1.50 kB`. Labels run `B`, `kB`, `MB`, … up to `EB`.
pub fn human_size(bytes: u64) -> String {
    format_size(bytes, FormatSizeOptions::from(WINDOWS).decimal_zeroes(2))
}

/// Checks that `root` is an existing directory and returns its absolute form.
///
/// The path is made absolute lexically; links are not resolved, so every
/// reported path stays under the name the user typed.
///
/// # Errors
/// Returns an error if the path cannot be made absolute, does not exist, or
/// is not a directory.
pub fn validate_root(root: &Path) -> Result<PathBuf> {
    let abs = std::path::absolute(root)
        .with_context(|| format!("Cannot resolve root path: {}", root.display()))?;
    if !abs.is_dir() {
        bail!(
            "Root path does not exist or is not a directory: {}",
            abs.display()
        );
    }
    Ok(abs)
}

/// Returns the last component of `path`, or the whole path when it has none
/// (e.g. `/` or a drive root).
pub fn display_name(path: &Path) -> String {
    match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => path.display().to_string(),
    }
}

/// Expands exclude patterns into common glob forms:
/// For example, "node_modules" becomes:
///   - `**/node_modules`
///   - `**/node_modules/**`
///     unless the pattern already includes glob symbols or ends with a separator.
pub fn expand_exclude_patterns(patterns: &[String]) -> Vec<String> {
    let mut expanded = Vec::new();

    for pat in patterns {
        let pat = pat.trim();
        if pat.is_empty() {
            continue;
        }
        if pat.contains('*') || pat.contains('?') || pat.ends_with('/') {
            expanded.push(pat.to_string());
        } else {
            expanded.push(format!("**/{}", pat));
            expanded.push(format!("**/{}/**", pat));
        }
    }

    expanded
}

/// Compiles a list of glob patterns into a `GlobSet` matcher,
/// which can be used to test paths efficiently.
pub fn build_exclude_matcher(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob =
            Glob::new(pattern).with_context(|| format!("Invalid glob pattern: '{}'", pattern))?;
        builder.add(glob);
    }
    builder.build().context("Failed to build glob set")
}
