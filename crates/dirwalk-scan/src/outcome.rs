//! Result of a scan session.

use dirwalk_core::{PathCollector, ScanWarning};

use crate::collate::Collation;

/// Counters gathered while walking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStats {
    /// Entries whose metadata was read, including the starting path.
    pub entries_visited: u64,
    /// Directories successfully opened for listing.
    pub directories_opened: u64,
    /// Entries appended to the collector.
    pub matched: u64,
    /// Subtrees or entries skipped because of a warning.
    pub skipped: u64,
}

/// Everything a scan session produced.
#[derive(Debug, Default)]
pub struct ScanOutcome {
    /// Matching paths, in pre-order until sorted.
    pub paths: PathCollector,
    /// One warning per skipped subtree or entry, in the order they occurred.
    pub warnings: Vec<ScanWarning>,
    /// Walk counters.
    pub stats: ScanStats,
}

impl ScanOutcome {
    /// Sort the collected paths with `collation`.
    pub fn sort_with(&mut self, collation: &Collation) {
        collation.sort(&mut self.paths);
    }

    /// Check if the walk finished without warnings.
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}
