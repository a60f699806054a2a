//! POSIX permission bits: reading, parsing, rendering, applying

use std::fmt;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

use crate::error::{ExplorerError, Result};

/// The nine POSIX permission bits: (owner, group, other) x (read, write,
/// execute). Always masked to `0o777`; setuid/setgid/sticky are discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PermissionSet(u32);

impl PermissionSet {
    pub const MASK: u32 = 0o777;

    /// Build from a raw `st_mode`, keeping only the permission bits.
    pub fn from_mode(mode: u32) -> Self {
        Self(mode & Self::MASK)
    }

    /// The 9-bit mask, `0..=0o777`.
    pub fn bits(self) -> u32 {
        self.0
    }

    /// Parse an octal permission string such as `"755"`.
    ///
    /// Accepts 1-3 octal digits. Anything else - empty input, non-octal
    /// characters, values above `777` - fails without touching anything.
    pub fn parse_octal(input: &str) -> Result<Self> {
        let digits = input.trim();
        if digits.is_empty()
            || digits.len() > 3
            || !digits.chars().all(|c| c.is_digit(8))
        {
            return Err(ExplorerError::InvalidPermissionFormat(input.to_string()));
        }
        let value = u32::from_str_radix(digits, 8)
            .map_err(|_| ExplorerError::InvalidPermissionFormat(input.to_string()))?;
        Ok(Self(value))
    }

    /// Read the permission bits of `path` from its metadata.
    pub fn read(path: &Path) -> Result<Self> {
        let metadata = fs::metadata(path).map_err(|e| ExplorerError::from_io(path, e))?;
        Ok(Self::from_mode(metadata.permissions().mode()))
    }

    /// Apply these bits to `path` via chmod.
    pub fn apply(self, path: &Path) -> Result<()> {
        fs::set_permissions(path, fs::Permissions::from_mode(self.0))
            .map_err(|e| ExplorerError::from_io(path, e))
    }
}

impl fmt::Display for PermissionSet {
    /// Canonical `rwxrwxrwx` rendering, owner then group then other.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for shift in [6u32, 3, 0] {
            let triad = self.0 >> shift;
            f.write_str(if triad & 0o4 != 0 { "r" } else { "-" })?;
            f.write_str(if triad & 0o2 != 0 { "w" } else { "-" })?;
            f.write_str(if triad & 0o1 != 0 { "x" } else { "-" })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TempTree;

    #[test]
    fn test_parse_valid_octal() {
        assert_eq!(PermissionSet::parse_octal("755").unwrap().bits(), 0o755);
        assert_eq!(PermissionSet::parse_octal("644").unwrap().bits(), 0o644);
        assert_eq!(PermissionSet::parse_octal("0").unwrap().bits(), 0);
        assert_eq!(PermissionSet::parse_octal(" 777 ").unwrap().bits(), 0o777);
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        for bad in ["abc", "", "  ", "78", "888", "7777", "-1", "0x7", "75 5"] {
            assert!(
                PermissionSet::parse_octal(bad).is_err(),
                "should reject {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_display_renders_rwx_string() {
        assert_eq!(PermissionSet::from_mode(0o755).to_string(), "rwxr-xr-x");
        assert_eq!(PermissionSet::from_mode(0o644).to_string(), "rw-r--r--");
        assert_eq!(PermissionSet::from_mode(0o000).to_string(), "---------");
        assert_eq!(PermissionSet::from_mode(0o777).to_string(), "rwxrwxrwx");
        assert_eq!(PermissionSet::from_mode(0o421).to_string(), "r---w---x");
    }

    #[test]
    fn test_from_mode_masks_high_bits() {
        // File type and setuid bits in st_mode must not leak through.
        assert_eq!(PermissionSet::from_mode(0o100644).bits(), 0o644);
        assert_eq!(PermissionSet::from_mode(0o4755).bits(), 0o755);
    }

    #[test]
    fn test_apply_then_read_round_trips() {
        let tree = TempTree::new();
        let file = tree.add_file("f.txt", "data");

        for mask in [0o000, 0o400, 0o600, 0o644, 0o700, 0o755, 0o777] {
            PermissionSet::from_mode(mask).apply(&file).unwrap();
            assert_eq!(PermissionSet::read(&file).unwrap().bits(), mask);
        }
        // Restore so the tempdir can clean up.
        PermissionSet::from_mode(0o644).apply(&file).unwrap();
    }

    #[test]
    fn test_read_missing_path_is_not_found() {
        let err = PermissionSet::read(Path::new("/no/such/file")).unwrap_err();
        assert!(matches!(err, crate::error::ExplorerError::PathNotFound { .. }));
    }
}
