//! Ordered, append-only collection of discovered paths.

use std::cmp::Ordering;
use std::path::{Path, PathBuf};

use crate::error::ScanError;

/// Paths discovered by one scan session, in traversal pre-order.
///
/// Entries are never removed one at a time. The only way to shrink the
/// collector is [`clear`](Self::clear), which drops every path and the
/// backing allocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathCollector {
    paths: Vec<PathBuf>,
}

impl PathCollector {
    /// Create an empty collector.
    pub fn new() -> Self {
        Self { paths: Vec::new() }
    }

    /// Create an empty collector with room for `capacity` paths.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            paths: Vec::with_capacity(capacity),
        }
    }

    /// Append a path.
    ///
    /// Fails with [`ScanError::OutOfMemory`] instead of aborting when the
    /// collector cannot grow.
    pub fn push(&mut self, path: impl Into<PathBuf>) -> Result<(), ScanError> {
        self.paths
            .try_reserve(1)
            .map_err(|_| ScanError::OutOfMemory { requested: 1 })?;
        self.paths.push(path.into());
        Ok(())
    }

    /// Number of collected paths.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Check if nothing has been collected.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Iterate over the paths in their current order.
    pub fn iter(&self) -> std::slice::Iter<'_, PathBuf> {
        self.paths.iter()
    }

    /// The paths in their current order.
    pub fn as_slice(&self) -> &[PathBuf] {
        &self.paths
    }

    /// Reorder in place with a stable sort.
    pub fn sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&Path, &Path) -> Ordering,
    {
        self.paths.sort_by(|a, b| compare(a, b));
    }

    /// Drop every path and release the allocation.
    pub fn clear(&mut self) {
        self.paths = Vec::new();
    }

    /// Consume the collector, returning its paths.
    pub fn into_vec(self) -> Vec<PathBuf> {
        self.paths
    }
}

impl<'a> IntoIterator for &'a PathCollector {
    type Item = &'a PathBuf;
    type IntoIter = std::slice::Iter<'a, PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.iter()
    }
}

impl IntoIterator for PathCollector {
    type Item = PathBuf;
    type IntoIter = std::vec::IntoIter<PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.into_iter()
    }
}
