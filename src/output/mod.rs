//! Report output for the `durank` application.
//!
//! # Available Formatters
//!
//! - **Terminal**: the scan header, ranked table and optional tree section
//! - **CSV**: the ranked table as machine-readable rows
//!
//! Formatters take the already-ranked rows and any `io::Write`, so they can be
//! exercised against in-memory buffers.

pub mod csv;
pub mod terminal;

/// Width of the dashed separator rules.
pub const RULE_WIDTH: usize = 96;

/// CSV output renderer function.
///
/// See [`csv::render`] for full documentation.
pub use csv::render as render_csv;

