//! Library crate for durank
//!
//! This exposes the modules needed for testing and potential library usage.
//!
//! # Features
//!
//! - **Directory Scanning**: Single-pass, explicit-stack traversal that never follows links
//! - **Size Aggregation**: Post-order roll-up of direct file bytes into recursive totals
//! - **Ranking**: Bounded top-N selection of the largest directories
//! - **Tree View**: Depth- and breadth-limited tree of the largest children
//!
//! # Modules
//!
//! - [`data`]: Core data structures (`ListedEntry`, `EntryKind`, `ScanResult`)
//! - [`cli`]: Command-line interface definitions
//! - [`lister`]: Immediate-entry enumeration of a single directory
//! - [`scan`]: Traversal and aggregation engine
//! - [`rank`]: Top-N selection
//! - [`tree`]: Tree renderer
//! - [`output`]: Terminal and CSV formatters
//! - [`utils`]: Size formatting, root validation and exclusion patterns

pub mod cli;
pub mod data;
pub mod lister;
pub mod output;
pub mod rank;
pub mod scan;
pub mod tree;
pub mod utils;

pub use cli::{Args, SizeMode};
pub use data::{EntryKind, ListedEntry, ScanResult};
pub use scan::{ScanOptions, scan, scan_with};
