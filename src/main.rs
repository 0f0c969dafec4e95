//! Main entry point for the `durank` CLI application.
//!
//! `durank` scans a directory subtree, computes the recursive size of every
//! directory, prints the largest ones as a ranked table and, optionally, a
//! tree of the largest children below the root.
//!
//! # Responsibilities
//! - Parses CLI arguments via [`clap`] using the [`Args`] struct
//! - Validates the scan root before any traversal starts
//! - Delegates traversal and aggregation to [`durank::scan::scan_with`]
//! - Ranks, prints and optionally exports the results
//!
//! # Flags of Interest
//! - `--top N`: Number of ranked directories
//! - `--tree`, `--tree-depth N`, `--tree-children N`: Tree view bounds
//! - `--exclude PATTERN`: Skip matching directories
//! - `--output FILE`: Also export the ranking as CSV

use anyhow::{Context, Result};
use clap::Parser;
use durank::cli::Args;
use durank::lister::FsLister;
use durank::output::{render_csv, terminal};
use durank::rank::top_n_from;
use durank::scan::{ScanOptions, scan_with};
use durank::utils::{build_exclude_matcher, expand_exclude_patterns, validate_root};
use std::io::{self, Write};
use std::time::Instant;

/// Installs the stderr log subscriber; stdout is reserved for the report.
fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    // Parse args → validate root → scan_with → top_n_from → render
    let root = validate_root(&args.root)?;

    let exclude_patterns = expand_exclude_patterns(&args.exclude);
    let options = ScanOptions {
        exclude: build_exclude_matcher(&exclude_patterns)?,
        progress: !args.no_progress,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    terminal::render_header(&mut out, &root)?;
    out.flush()?;

    let started = Instant::now();
    let result = scan_with(&root, &FsLister::new(args.size_mode), &options);
    tracing::debug!(
        "Scanned {} directories in {:?}",
        result.visited,
        started.elapsed()
    );

    // Visit order gives a deterministic tie-break between equal sizes
    let top = top_n_from(
        result
            .visit_order
            .iter()
            .map(|dir| (dir.as_path(), result.total_of(dir))),
        args.top_n(),
    );

    terminal::render_visited(&mut out, result.visited)?;
    terminal::render_ranking(&mut out, &top)?;

    if args.tree {
        terminal::render_tree_section(
            &mut out,
            &root,
            &result.children,
            &result.total_size,
            args.tree_depth_limit(),
            args.tree_children_limit(),
        )?;
    }
    out.flush().context("Failed to write report")?;

    if let Some(csv_path) = &args.output {
        render_csv(&top, csv_path)?;
    }

    Ok(())
}
