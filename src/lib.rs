//! Rove - an interactive file explorer for the terminal

pub mod error;
pub mod explorer;
pub mod ops;
pub mod output;
pub mod perms;
pub mod shell;
pub mod walk;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{ExplorerError, Result};
pub use explorer::Explorer;
pub use perms::PermissionSet;
pub use shell::Shell;
pub use walk::{DirectoryEntry, DirectoryWalker, WalkerConfig};
