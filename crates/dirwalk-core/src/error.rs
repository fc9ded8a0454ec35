//! Error and warning types for scanning operations.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that end a scan session.
///
/// Problems confined to one subtree or one entry are not errors; they are
/// recorded as [`ScanWarning`]s and the walk continues.
#[derive(Debug, Error)]
pub enum ScanError {
    /// Permission denied for a path.
    #[error("cannot access '{}'", .path.display())]
    PermissionDenied {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Path not found.
    #[error("cannot access '{}'", .path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Generic I/O error.
    #[error("I/O error at '{}'", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The path collector could not grow.
    #[error("out of memory while collecting paths ({requested} more entries requested)")]
    OutOfMemory { requested: usize },

    /// Invalid configuration.
    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },
}

impl ScanError {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied { path, source },
            std::io::ErrorKind::NotFound => Self::NotFound { path, source },
            _ => Self::Io { path, source },
        }
    }

    /// The path this error is about, if any.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::PermissionDenied { path, .. }
            | Self::NotFound { path, .. }
            | Self::Io { path, .. } => Some(path),
            Self::OutOfMemory { .. } | Self::InvalidConfig { .. } => None,
        }
    }
}

/// Kind of scan warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WarningKind {
    /// A directory could not be opened for listing; its subtree was skipped.
    OpenDirectory,
    /// Reading the next entry of a directory listing failed.
    ReadEntry,
    /// Link-aware metadata could not be read; the entry was skipped.
    Metadata,
    /// The joined path would exceed the host path-length limit.
    PathTooLong,
}

/// Non-fatal problem encountered during a scan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanWarning {
    /// Path where the warning occurred.
    pub path: PathBuf,
    /// Human-readable message naming the path and the cause.
    pub message: String,
    /// Kind of warning.
    pub kind: WarningKind,
}

impl ScanWarning {
    /// A directory could not be opened.
    pub fn open_directory(path: impl Into<PathBuf>, error: &std::io::Error) -> Self {
        let path = path.into();
        Self {
            message: format!("cannot open directory '{}': {error}", path.display()),
            path,
            kind: WarningKind::OpenDirectory,
        }
    }

    /// A directory entry could not be read.
    pub fn read_entry(path: impl Into<PathBuf>, error: &std::io::Error) -> Self {
        let path = path.into();
        Self {
            message: format!("cannot read entry in '{}': {error}", path.display()),
            path,
            kind: WarningKind::ReadEntry,
        }
    }

    /// Link-aware metadata could not be read.
    pub fn metadata(path: impl Into<PathBuf>, error: &std::io::Error) -> Self {
        let path = path.into();
        Self {
            message: format!("cannot stat '{}': {error}", path.display()),
            path,
            kind: WarningKind::Metadata,
        }
    }

    /// A joined path is longer than the configured limit.
    pub fn path_too_long(path: impl Into<PathBuf>, len: usize, limit: usize) -> Self {
        let path = path.into();
        Self {
            message: format!(
                "path too long ({len} bytes, limit {limit}): '{}'",
                path.display()
            ),
            path,
            kind: WarningKind::PathTooLong,
        }
    }
}

impl std::fmt::Display for ScanWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}
