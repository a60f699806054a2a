//! Entry type produced by directory traversal

use std::path::PathBuf;

/// One item (file or directory) returned by directory enumeration.
///
/// Derived from the filesystem at traversal time and owned by the caller;
/// nothing here stays valid if the underlying entry is removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    /// Final path component, lossily decoded.
    pub name: String,
    /// Full path: the enumerated directory joined with `name`.
    pub path: PathBuf,
    /// Classification at lookup time, following symlinks.
    pub is_dir: bool,
}
