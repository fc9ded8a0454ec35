//! Recursive depth-first directory scanner.

use std::fs;
use std::path::Path;

use tracing::{debug, trace, warn};

use dirwalk_core::{EntryKind, PathCollector, ScanConfig, ScanError, ScanWarning};

use crate::outcome::{ScanOutcome, ScanStats};

/// Single-threaded scanner that walks a tree and collects matching paths.
///
/// Every directory reachable from the root is descended, whether or not it
/// matched the filter. Symbolic links are classified but never followed.
#[derive(Debug)]
pub struct TreeScanner {
    config: ScanConfig,
    warnings: Vec<ScanWarning>,
    stats: ScanStats,
}

impl TreeScanner {
    /// Create a new scanner.
    pub fn new(config: ScanConfig) -> Self {
        Self {
            config,
            warnings: Vec::new(),
            stats: ScanStats::default(),
        }
    }

    /// Warnings recorded so far.
    ///
    /// After a successful [`run`](Self::run) they have moved into the
    /// outcome. After a failed one they stay here so the caller can still
    /// report them.
    pub fn warnings(&self) -> &[ScanWarning] {
        &self.warnings
    }

    /// Scan from the configured root.
    ///
    /// The root is stat'ed without following links. If that fails there is
    /// nothing to scan and the error is returned. Otherwise the root is
    /// collected first when it matches, and walked when it is a directory.
    /// A non-directory root yields at most one path.
    pub fn run(&mut self) -> Result<ScanOutcome, ScanError> {
        let root = self.config.root.clone();
        let metadata = fs::symlink_metadata(&root).map_err(|e| ScanError::io(&root, e))?;
        let kind = EntryKind::from_metadata(&metadata);
        self.stats.entries_visited += 1;

        debug!(root = %root.display(), %kind, "starting scan");

        let mut paths = PathCollector::new();
        if self.config.options.matches(kind) {
            paths.push(root.as_path())?;
            self.stats.matched += 1;
        }

        if kind.is_dir() {
            self.scan_dir(&root, &mut paths)?;
        }

        debug!(
            matched = self.stats.matched,
            visited = self.stats.entries_visited,
            warnings = self.warnings.len(),
            "scan complete"
        );

        Ok(ScanOutcome {
            paths,
            warnings: std::mem::take(&mut self.warnings),
            stats: std::mem::take(&mut self.stats),
        })
    }

    /// Walk the directory at `path`, appending matching descendants.
    ///
    /// A directory that cannot be opened is recorded as a warning and its
    /// subtree skipped. An entry whose path is too long or whose metadata
    /// cannot be read is recorded and skipped. Only a failure to grow the
    /// collector is returned as an error.
    pub fn scan_dir(&mut self, path: &Path, collector: &mut PathCollector) -> Result<(), ScanError> {
        let entries = match fs::read_dir(path) {
            Ok(entries) => entries,
            Err(err) => {
                self.record(ScanWarning::open_directory(path, &err));
                return Ok(());
            }
        };
        self.stats.directories_opened += 1;
        trace!(dir = %path.display(), "reading directory");

        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    self.record(ScanWarning::read_entry(path, &err));
                    continue;
                }
            };

            let child = path.join(entry.file_name());
            let len = child.as_os_str().len();
            if !self.config.path_fits(len) {
                self.record(ScanWarning::path_too_long(&child, len, self.config.max_path_len));
                continue;
            }

            let metadata = match fs::symlink_metadata(&child) {
                Ok(metadata) => metadata,
                Err(err) => {
                    self.record(ScanWarning::metadata(&child, &err));
                    continue;
                }
            };
            let kind = EntryKind::from_metadata(&metadata);
            self.stats.entries_visited += 1;
            trace!(path = %child.display(), %kind, "visited");

            if self.config.options.matches(kind) {
                collector.push(child.as_path())?;
                self.stats.matched += 1;
            }

            if kind.is_dir() {
                self.scan_dir(&child, collector)?;
            }
        }

        Ok(())
    }

    fn record(&mut self, warning: ScanWarning) {
        warn!(path = %warning.path.display(), kind = ?warning.kind, "{}", warning.message);
        self.stats.skipped += 1;
        self.warnings.push(warning);
    }
}

/// Scan with `config`, returning the collected paths in pre-order.
pub fn scan(config: &ScanConfig) -> Result<ScanOutcome, ScanError> {
    TreeScanner::new(config.clone()).run()
}
