//! Directory enumeration and recursive traversal

mod entry;
mod walker;

pub use entry::DirectoryEntry;
pub use walker::{DirectoryWalker, WalkerConfig};
