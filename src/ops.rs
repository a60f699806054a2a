//! File operation primitives: create, delete, rename, copy, stat
//!
//! Each function is a thin wrapper over one OS call, with the failure
//! classified through [`ExplorerError::from_io`]. No retries anywhere.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;

use crate::error::{ExplorerError, Result};

/// Create a new empty file. Fails with `AlreadyExists` if `path` is taken.
pub fn create_file(path: &Path) -> Result<()> {
    OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map(drop)
        .map_err(|e| ExplorerError::from_io(path, e))
}

/// Delete (unlink) a file.
pub fn delete_file(path: &Path) -> Result<()> {
    fs::remove_file(path).map_err(|e| ExplorerError::from_io(path, e))
}

/// Rename or move an entry. Cross-device moves and invalid targets are
/// surfaced as the OS reports them, attributed to the destination.
pub fn rename_entry(from: &Path, to: &Path) -> Result<()> {
    fs::rename(from, to).map_err(|e| match e.kind() {
        io::ErrorKind::CrossesDevices | io::ErrorKind::InvalidInput => {
            ExplorerError::from_io(to, e)
        }
        _ => ExplorerError::from_io(from, e),
    })
}

/// Copy a file byte-for-byte. Returns the number of bytes copied.
///
/// A missing or unreadable source is reported against the source path;
/// everything after that is attributed to the destination.
pub fn copy_file(source: &Path, dest: &Path) -> Result<u64> {
    let metadata = fs::metadata(source).map_err(|e| ExplorerError::from_io(source, e))?;
    if metadata.is_dir() {
        let e = io::Error::new(io::ErrorKind::IsADirectory, "is a directory");
        return Err(ExplorerError::from_io(source, e));
    }
    fs::copy(source, dest).map_err(|e| ExplorerError::from_io(dest, e))
}

/// Stat a path, distinguishing "does not exist" from "exists but
/// unreadable" through the error taxonomy.
pub fn stat(path: &Path) -> Result<fs::Metadata> {
    fs::metadata(path).map_err(|e| ExplorerError::from_io(path, e))
}
