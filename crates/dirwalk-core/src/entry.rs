//! Filesystem entry classification.

use std::fs::{FileType, Metadata};

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Type of a filesystem entry, taken from link-aware metadata.
///
/// A symbolic link is always `Symlink`, whatever it points at (or fails to
/// point at).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
pub enum EntryKind {
    /// Symbolic link.
    Symlink,
    /// Directory.
    Directory,
    /// Regular file.
    #[strum(serialize = "file")]
    Regular,
    /// Sockets, FIFOs, device nodes and the like.
    Other,
}

impl EntryKind {
    /// Classify a file type obtained without following symlinks.
    pub fn from_file_type(file_type: FileType) -> Self {
        if file_type.is_symlink() {
            EntryKind::Symlink
        } else if file_type.is_dir() {
            EntryKind::Directory
        } else if file_type.is_file() {
            EntryKind::Regular
        } else {
            EntryKind::Other
        }
    }

    /// Classify link-aware metadata (`symlink_metadata`).
    pub fn from_metadata(metadata: &Metadata) -> Self {
        Self::from_file_type(metadata.file_type())
    }

    /// Check if this is a directory.
    pub fn is_dir(&self) -> bool {
        matches!(self, EntryKind::Directory)
    }
}
