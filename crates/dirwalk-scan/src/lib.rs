//! Directory scanning engine for dirwalk.
//!
//! This crate walks a directory tree depth-first and collects the paths
//! that pass a type filter.
//!
//! # Overview
//!
//! - **Pre-order collection**: a directory is recorded before its children
//! - **Output filters**: type flags decide what is reported, never what is
//!   walked; every directory is descended
//! - **Recoverable errors**: unreadable directories and entries become
//!   warnings and the walk carries on
//! - **Locale collation**: optional sort with a locale-aware comparator
//!
//! # Example
//!
//! ```rust,no_run
//! use dirwalk_scan::{Collation, ScanConfig, TreeScanner};
//!
//! let config = ScanConfig::new("/path/to/scan");
//! let mut outcome = TreeScanner::new(config).run().unwrap();
//! outcome.sort_with(&Collation::from_env());
//!
//! for path in &outcome.paths {
//!     println!("{}", path.display());
//! }
//! for warning in &outcome.warnings {
//!     eprintln!("{warning}");
//! }
//! ```

mod collate;
mod outcome;
mod scanner;

pub use collate::{Collation, CollationError};
pub use outcome::{ScanOutcome, ScanStats};
pub use scanner::{TreeScanner, scan};

// Re-export core types for convenience
pub use dirwalk_core::{
    EntryKind, FilterOptions, PathCollector, ScanConfig, ScanError, ScanWarning, WarningKind,
};
