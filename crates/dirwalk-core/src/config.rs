//! Filter options and scan configuration.

use std::path::PathBuf;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::entry::EntryKind;
use crate::error::ScanError;

/// Longest path, in bytes including the terminator, the host accepts.
#[cfg(unix)]
pub const DEFAULT_MAX_PATH_LEN: usize = 4096;

/// Longest path, in bytes including the terminator, the host accepts.
#[cfg(not(unix))]
pub const DEFAULT_MAX_PATH_LEN: usize = 260;

/// Which entry kinds to report, and whether to sort the report.
///
/// The type flags are OR-ed together. With no type flag set every entry
/// matches. The flags only decide what gets reported; the scanner still
/// descends into every directory it finds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(default, setter(into))]
pub struct FilterOptions {
    /// Report symbolic links.
    #[serde(default)]
    pub symlink_only: bool,

    /// Report directories.
    #[serde(default)]
    pub dir_only: bool,

    /// Report regular files.
    #[serde(default)]
    pub file_only: bool,

    /// Sort the report with locale collation.
    #[serde(default)]
    pub sorted: bool,
}

impl FilterOptions {
    /// Create a new filter options builder.
    pub fn builder() -> FilterOptionsBuilder {
        FilterOptionsBuilder::default()
    }

    /// Whether any type flag is set.
    pub fn has_type_filter(&self) -> bool {
        self.symlink_only || self.dir_only || self.file_only
    }

    /// Whether an entry of `kind` should be reported.
    pub fn matches(&self, kind: EntryKind) -> bool {
        if !self.has_type_filter() {
            return true;
        }
        match kind {
            EntryKind::Symlink => self.symlink_only,
            EntryKind::Directory => self.dir_only,
            EntryKind::Regular => self.file_only,
            EntryKind::Other => false,
        }
    }
}

/// Configuration for one scan session.
#[derive(Debug, Clone, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate", error = "ScanError"))]
pub struct ScanConfig {
    /// Starting path. Recorded exactly as given.
    pub root: PathBuf,

    /// Type filters and sort flag.
    #[builder(default)]
    #[serde(default)]
    pub options: FilterOptions,

    /// Joined paths of this many bytes or more are skipped with a warning.
    #[builder(default = "DEFAULT_MAX_PATH_LEN")]
    #[serde(default = "default_max_path_len")]
    pub max_path_len: usize,
}

fn default_max_path_len() -> usize {
    DEFAULT_MAX_PATH_LEN
}

impl From<derive_builder::UninitializedFieldError> for ScanError {
    fn from(err: derive_builder::UninitializedFieldError) -> Self {
        ScanError::InvalidConfig {
            message: err.to_string(),
        }
    }
}

impl From<String> for ScanError {
    fn from(message: String) -> Self {
        ScanError::InvalidConfig { message }
    }
}

impl ScanConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(ref root) = self.root {
            if root.as_os_str().is_empty() {
                return Err("Root path cannot be empty".to_string());
            }
        } else {
            return Err("Root path is required".to_string());
        }
        if self.max_path_len == Some(0) {
            return Err("Maximum path length must be positive".to_string());
        }
        Ok(())
    }
}

impl ScanConfig {
    /// Create a new scan config builder.
    pub fn builder() -> ScanConfigBuilder {
        ScanConfigBuilder::default()
    }

    /// Create a config for scanning a path with no filters.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            options: FilterOptions::default(),
            max_path_len: DEFAULT_MAX_PATH_LEN,
        }
    }

    /// Whether a joined path of `len` bytes fits within the host limit.
    pub fn path_fits(&self, len: usize) -> bool {
        len < self.max_path_len
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self::new(".")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_type_flags_matches_everything() {
        let opts = FilterOptions::default();
        assert!(!opts.has_type_filter());
        for kind in [
            EntryKind::Symlink,
            EntryKind::Directory,
            EntryKind::Regular,
            EntryKind::Other,
        ] {
            assert!(opts.matches(kind), "{kind} should match with no filters");
        }
    }

    #[test]
    fn test_single_flags() {
        let files = FilterOptions {
            file_only: true,
            ..Default::default()
        };
        assert!(files.matches(EntryKind::Regular));
        assert!(!files.matches(EntryKind::Directory));
        assert!(!files.matches(EntryKind::Symlink));
        assert!(!files.matches(EntryKind::Other));

        let dirs = FilterOptions {
            dir_only: true,
            ..Default::default()
        };
        assert!(dirs.matches(EntryKind::Directory));
        assert!(!dirs.matches(EntryKind::Regular));

        let links = FilterOptions {
            symlink_only: true,
            ..Default::default()
        };
        assert!(links.matches(EntryKind::Symlink));
        assert!(!links.matches(EntryKind::Regular));
    }

    #[test]
    fn test_flags_are_or_ed() {
        let opts = FilterOptions {
            symlink_only: true,
            file_only: true,
            ..Default::default()
        };
        assert!(opts.matches(EntryKind::Symlink));
        assert!(opts.matches(EntryKind::Regular));
        assert!(!opts.matches(EntryKind::Directory));
        assert!(!opts.matches(EntryKind::Other));
    }

    #[test]
    fn test_sorted_is_not_a_type_filter() {
        let opts = FilterOptions {
            sorted: true,
            ..Default::default()
        };
        assert!(!opts.has_type_filter());
        assert!(opts.matches(EntryKind::Other));
    }

    #[test]
    fn test_filter_options_builder() {
        let opts = FilterOptions::builder()
            .dir_only(true)
            .sorted(true)
            .build()
            .unwrap();
        assert!(opts.dir_only);
        assert!(opts.sorted);
        assert!(!opts.file_only);
        assert!(!opts.symlink_only);
    }

    #[test]
    fn test_config_builder() {
        let config = ScanConfig::builder()
            .root("/home/user")
            .options(FilterOptions {
                file_only: true,
                ..Default::default()
            })
            .max_path_len(128usize)
            .build()
            .unwrap();

        assert_eq!(config.root, PathBuf::from("/home/user"));
        assert!(config.options.file_only);
        assert_eq!(config.max_path_len, 128);
    }

    #[test]
    fn test_config_builder_rejects_bad_input() {
        let err = ScanConfig::builder().build().unwrap_err();
        assert!(matches!(err, ScanError::InvalidConfig { .. }));

        let err = ScanConfig::builder().root("").build().unwrap_err();
        assert!(err.to_string().contains("empty"));

        let err = ScanConfig::builder()
            .root("/tmp")
            .max_path_len(0usize)
            .build()
            .unwrap_err();
        assert!(matches!(err, ScanError::InvalidConfig { .. }));
    }

    #[test]
    fn test_config_simple() {
        let config = ScanConfig::new("/home/user");
        assert_eq!(config.root, PathBuf::from("/home/user"));
        assert_eq!(config.options, FilterOptions::default());
        assert_eq!(config.max_path_len, DEFAULT_MAX_PATH_LEN);
    }

    #[test]
    fn test_path_fits() {
        let config = ScanConfig::builder()
            .root(".")
            .max_path_len(10usize)
            .build()
            .unwrap();
        assert!(config.path_fits(9));
        assert!(!config.path_fits(10));
    }

    #[test]
    fn test_config_deserializes_with_defaults() {
        let config: ScanConfig = serde_json::from_str(r#"{"root": "/srv"}"#).unwrap();
        assert_eq!(config.root, PathBuf::from("/srv"));
        assert_eq!(config.options, FilterOptions::default());
        assert_eq!(config.max_path_len, DEFAULT_MAX_PATH_LEN);

        let opts: FilterOptions = serde_json::from_str(r#"{"dir_only": true}"#).unwrap();
        assert!(opts.dir_only);
        assert!(!opts.sorted);
    }
}
