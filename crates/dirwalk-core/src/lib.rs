//! Core types for dirwalk.
//!
//! This crate holds the data model shared by the scanner and the CLI:
//! filter options and scan configuration, entry classification, the
//! ordered path collector, and the error/warning types.

mod collector;
mod config;
mod entry;
mod error;

pub use collector::PathCollector;
pub use config::{
    DEFAULT_MAX_PATH_LEN, FilterOptions, FilterOptionsBuilder, ScanConfig, ScanConfigBuilder,
};
pub use entry::EntryKind;
pub use error::{ScanError, ScanWarning, WarningKind};
