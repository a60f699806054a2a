//! Explorer session state
//!
//! Holds the current directory as an explicit value instead of mutating the
//! process working directory, so operations stay testable in isolation and
//! nothing global leaks between sessions. All relative user input resolves
//! against it.

use std::path::{Path, PathBuf};

use crate::error::{ExplorerError, Result};
use crate::ops;
use crate::perms::PermissionSet;
use crate::walk::{DirectoryEntry, DirectoryWalker, WalkerConfig};

#[derive(Debug)]
pub struct Explorer {
    current_dir: PathBuf,
    walker: DirectoryWalker,
}

impl Explorer {
    /// Open an explorer rooted at `path` with default traversal settings.
    pub fn open(path: &Path) -> Result<Self> {
        Self::with_config(path, WalkerConfig::default())
    }

    /// Open an explorer rooted at `path`.
    pub fn with_config(path: &Path, config: WalkerConfig) -> Result<Self> {
        let current_dir = path
            .canonicalize()
            .map_err(|e| ExplorerError::from_io(path, e))?;
        if !ops::stat(&current_dir)?.is_dir() {
            return Err(ExplorerError::NotADirectory(current_dir));
        }
        Ok(Self {
            current_dir,
            walker: DirectoryWalker::new(config),
        })
    }

    /// The directory all relative input is resolved against.
    pub fn current_dir(&self) -> &Path {
        &self.current_dir
    }

    /// Resolve user input against the current directory. Absolute input is
    /// taken as-is.
    pub fn resolve(&self, input: &str) -> PathBuf {
        let path = Path::new(input.trim());
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.current_dir.join(path)
        }
    }

    /// Change the current directory. The process working directory is never
    /// touched.
    pub fn change_dir(&mut self, input: &str) -> Result<&Path> {
        let target = self.resolve(input);
        let resolved = target
            .canonicalize()
            .map_err(|e| ExplorerError::from_io(&target, e))?;
        if !ops::stat(&resolved)?.is_dir() {
            return Err(ExplorerError::NotADirectory(resolved));
        }
        self.current_dir = resolved;
        Ok(&self.current_dir)
    }

    /// List the children of the current directory, directories first, each
    /// group sorted by name. The raw walker order is left to the OS; sorting
    /// happens here, on the display path only.
    pub fn list(&self) -> Result<Vec<DirectoryEntry>> {
        let mut entries: Vec<_> = self.walker.list_children(&self.current_dir)?.collect();
        entries.sort_by(|a, b| b.is_dir.cmp(&a.is_dir).then_with(|| a.name.cmp(&b.name)));
        Ok(entries)
    }

    /// Search the current directory's subtree for files named exactly `name`.
    /// Matches come back as absolute paths.
    pub fn search(&self, name: &str) -> Vec<PathBuf> {
        self.walker.search_tree(&self.current_dir, name)
    }

    /// Create a new empty file.
    pub fn create(&self, input: &str) -> Result<PathBuf> {
        let path = self.resolve(input);
        ops::create_file(&path)?;
        Ok(path)
    }

    /// Delete a file.
    pub fn delete(&self, input: &str) -> Result<PathBuf> {
        let path = self.resolve(input);
        ops::delete_file(&path)?;
        Ok(path)
    }

    /// Rename or move an entry.
    pub fn rename(&self, from: &str, to: &str) -> Result<(PathBuf, PathBuf)> {
        let from = self.resolve(from);
        let to = self.resolve(to);
        ops::rename_entry(&from, &to)?;
        Ok((from, to))
    }

    /// Copy a file byte-for-byte. Returns the byte count.
    pub fn copy(&self, source: &str, dest: &str) -> Result<u64> {
        ops::copy_file(&self.resolve(source), &self.resolve(dest))
    }

    /// Read the permission bits of a file.
    pub fn permissions(&self, input: &str) -> Result<PermissionSet> {
        PermissionSet::read(&self.resolve(input))
    }

    /// Parse `octal` and apply it to a file. The string is validated before
    /// anything is touched, so malformed input leaves permissions unchanged.
    pub fn set_permissions(&self, input: &str, octal: &str) -> Result<PermissionSet> {
        let perms = PermissionSet::parse_octal(octal)?;
        perms.apply(&self.resolve(input))?;
        Ok(perms)
    }
}
