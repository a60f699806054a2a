//! DirectoryWalker - flat enumeration and depth-first search

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ExplorerError, Result};

use super::entry::DirectoryEntry;

/// Configuration for recursive traversal behavior.
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Descend at most this many levels below the root during search.
    pub max_depth: Option<usize>,
    /// Follow directory symlinks while recursing. Off by default so that
    /// link cycles cannot make the traversal run forever.
    pub follow_links: bool,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            max_depth: None,
            follow_links: false,
        }
    }
}

/// Walks a directory tree, classifying each entry as file or directory.
///
/// `list_children` enumerates one level; `search_tree` and `for_each_entry`
/// visit the whole subtree depth-first in pre-order. Every call opens and
/// releases its own directory handles; no state is kept between calls.
#[derive(Debug)]
pub struct DirectoryWalker {
    config: WalkerConfig,
}

impl DirectoryWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    /// Enumerate the direct children of `path`, non-recursively.
    ///
    /// The sequence is lazy and comes back in filesystem enumeration order
    /// (unsorted). `.` and `..` are never yielded. Children whose metadata
    /// cannot be read - including entries removed by another process while
    /// we iterate - are skipped. Fails if `path` cannot be opened as a
    /// directory at all.
    pub fn list_children(&self, path: &Path) -> Result<impl Iterator<Item = DirectoryEntry>> {
        let entries = fs::read_dir(path).map_err(|e| ExplorerError::from_io(path, e))?;
        Ok(entries.filter_map(|entry| {
            let entry = entry.ok()?;
            let path = entry.path();
            // Classify via a full metadata lookup so symlinks resolve to
            // their target's kind; unreadable entries drop out here.
            let is_dir = fs::metadata(&path).ok()?.is_dir();
            Some(DirectoryEntry {
                name: entry.file_name().to_string_lossy().into_owned(),
                path,
                is_dir,
            })
        }))
    }

    /// Visit every reachable entry below `root` depth-first, pre-order,
    /// invoking `f` once per entry.
    ///
    /// Best effort: unreadable entries and unreadable subtrees are skipped
    /// silently, so one bad directory never aborts the traversal. Directory
    /// symlinks are not descended into unless `follow_links` is set.
    pub fn for_each_entry<F: FnMut(&DirectoryEntry)>(&self, root: &Path, f: &mut F) {
        self.visit(root, 0, f);
    }

    /// Recursively search the subtree rooted at `root` for files whose name
    /// equals `target` exactly (case-sensitive, no globbing).
    ///
    /// Returns the full path of every match, in traversal order. Pass an
    /// absolute root to get absolute matches. There is no early exit; the
    /// whole reachable subtree is visited.
    pub fn search_tree(&self, root: &Path, target: &str) -> Vec<PathBuf> {
        let mut matches = Vec::new();
        self.for_each_entry(root, &mut |entry| {
            if !entry.is_dir && entry.name == target {
                matches.push(entry.path.clone());
            }
        });
        matches
    }

    fn visit<F: FnMut(&DirectoryEntry)>(&self, dir: &Path, depth: usize, f: &mut F) {
        if self.config.max_depth.is_some_and(|max| depth >= max) {
            return;
        }
        let entries = match fs::read_dir(dir) {
            Ok(e) => e,
            Err(_) => return,
        };
        for dirent in entries.flatten() {
            let path = dirent.path();
            let is_dir = match fs::metadata(&path) {
                Ok(m) => m.is_dir(),
                Err(_) => continue,
            };
            let entry = DirectoryEntry {
                name: dirent.file_name().to_string_lossy().into_owned(),
                path,
                is_dir,
            };
            f(&entry);
            if entry.is_dir {
                if !self.config.follow_links && entry.path.is_symlink() {
                    continue;
                }
                self.visit(&entry.path, depth + 1, f);
            }
        }
    }
}

impl Default for DirectoryWalker {
    fn default() -> Self {
        Self::new(WalkerConfig::default())
    }
}
