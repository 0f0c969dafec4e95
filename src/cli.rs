//! CLI interface definitions for the `durank` application.
//!
//! This module defines command-line arguments using [`clap`] and exposes:
//!
//! - [`Args`]: the main struct parsed from CLI inputs
//! - [`SizeMode`]: an enum selecting apparent or allocated file sizes
//!
//! Numeric options are accepted as given and coerced to their minimum by the
//! accessor methods on [`Args`], so `--top 0` still prints one row.
//!
//! # Example
//!
//! ```bash
//! durank --root /var --top 20 --tree --tree-depth 2 --exclude .git
//! ```

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Command-line arguments for the `durank` directory size ranker.
#[derive(Parser, Debug, Clone)]
#[command(name = "durank", version, about)]
pub struct Args {
    /// Root path to scan
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Number of largest directories to display
    #[arg(long, default_value_t = 10, allow_negative_numbers = true)]
    pub top: i64,

    /// Show a tree view of the largest children below the root
    #[arg(long, default_value_t = false)]
    pub tree: bool,

    /// Max depth for tree output
    #[arg(long, default_value_t = 3, allow_negative_numbers = true)]
    pub tree_depth: i64,

    /// Max children per node in tree view
    #[arg(long, default_value_t = 8, allow_negative_numbers = true)]
    pub tree_children: i64,

    /// Skip directories with matching names or globs (e.g., '.git', 'node_modules')
    #[arg(long, value_name = "PATTERN", num_args = 1.., action = clap::ArgAction::Append)]
    pub exclude: Vec<String>,

    /// How file sizes are measured
    #[arg(long, value_enum, default_value_t = SizeMode::Apparent)]
    pub size_mode: SizeMode,

    /// Also write the ranking to a CSV file
    #[arg(long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Disable the progress spinner
    #[arg(long, default_value_t = false)]
    pub no_progress: bool,

    /// Log skipped entries and timings to stderr
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl Args {
    /// Number of ranked rows, at least 1.
    pub fn top_n(&self) -> usize {
        clamp_min(self.top, 1)
    }

    /// Tree depth limit, at least 0.
    pub fn tree_depth_limit(&self) -> usize {
        clamp_min(self.tree_depth, 0)
    }

    /// Children shown per tree node, at least 1.
    pub fn tree_children_limit(&self) -> usize {
        clamp_min(self.tree_children, 1)
    }
}

fn clamp_min(value: i64, min: usize) -> usize {
    usize::try_from(value).unwrap_or(0).max(min)
}

/// How the size of a file is measured.
///
/// # Variants
/// * `Apparent` - Logical file length in bytes
/// * `Allocated` - Disk space actually allocated (block count × 512 on Unix)
#[derive(Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
pub enum SizeMode {
    #[default]
    Apparent,
    Allocated,
}
