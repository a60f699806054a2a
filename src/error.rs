//! Error types for explorer operations
//!
//! Every operation failure is recoverable at the menu loop: the error is
//! printed once, with the OS diagnostic embedded, and control returns to
//! the user.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error type for all filesystem operations.
#[derive(Error, Debug)]
pub enum ExplorerError {
    /// The path does not exist.
    #[error("cannot access '{}': {source}", .path.display())]
    PathNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The path exists but is not readable or writable by this user.
    #[error("permission denied for '{}': {source}", .path.display())]
    PermissionDenied {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A directory was required but the path names something else.
    #[error("'{}' is not a directory", .0.display())]
    NotADirectory(PathBuf),

    /// Creation target already exists.
    #[error("'{}' already exists", .path.display())]
    AlreadyExists {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Rename/move rejected by the OS (cross-device link, bad target).
    #[error("cannot move to '{}': {source}", .path.display())]
    CrossDeviceOrInvalidTarget {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Permission input that is not 1-3 octal digits within 0..=777.
    #[error("invalid permission format '{0}': expected octal digits like 755")]
    InvalidPermissionFormat(String),

    /// Any other IO failure, surfaced with the OS diagnostic.
    #[error("'{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ExplorerError {
    /// Classify an [`io::Error`] raised while operating on `path`.
    pub fn from_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            io::ErrorKind::NotFound => Self::PathNotFound { path, source },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path, source },
            io::ErrorKind::NotADirectory => Self::NotADirectory(path),
            io::ErrorKind::AlreadyExists => Self::AlreadyExists { path, source },
            io::ErrorKind::CrossesDevices | io::ErrorKind::InvalidInput => {
                Self::CrossDeviceOrInvalidTarget { path, source }
            }
            _ => Self::Io { path, source },
        }
    }
}

/// Result type alias using ExplorerError.
pub type Result<T> = std::result::Result<T, ExplorerError>;
