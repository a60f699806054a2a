//! Console rendering for listings, search results, and errors

use std::io::{self, Write};
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use chrono::{DateTime, Local};
use termcolor::{Color, ColorSpec, WriteColor};

use crate::error::ExplorerError;
use crate::perms::PermissionSet;
use crate::walk::DirectoryEntry;

/// Format a size in bytes to human-readable form.
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.1}G", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1}M", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1}K", bytes as f64 / KB as f64)
    } else {
        format!("{}B", bytes)
    }
}

/// Format a modification time as a local timestamp.
pub fn format_mtime(mtime: SystemTime) -> String {
    let local: DateTime<Local> = mtime.into();
    local.format("%Y-%m-%d %H:%M").to_string()
}

/// Write a full listing: header, one row per entry, and the summary line.
pub fn write_listing<W: WriteColor>(
    out: &mut W,
    dir: &Path,
    entries: &[DirectoryEntry],
) -> io::Result<()> {
    writeln!(out)?;
    out.set_color(ColorSpec::new().set_bold(true))?;
    writeln!(out, "Contents of {}", dir.display())?;
    out.reset()?;

    let mut dir_count = 0;
    let mut file_count = 0;
    for entry in entries {
        if entry.is_dir {
            dir_count += 1;
        } else {
            file_count += 1;
        }
        write_entry_row(out, entry)?;
    }

    writeln!(out)?;
    writeln!(out, "{} directories, {} files", dir_count, file_count)
}

/// Write one listing row: kind tag, permission string, size, mtime, name.
///
/// The per-row metadata lookup is best effort - an entry that disappeared
/// or turned unreadable renders with placeholders instead of failing the
/// listing.
pub fn write_entry_row<W: WriteColor>(out: &mut W, entry: &DirectoryEntry) -> io::Result<()> {
    let metadata = std::fs::metadata(&entry.path).ok();

    if entry.is_dir {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
        write!(out, "[DIR]  ")?;
    } else {
        out.set_color(ColorSpec::new().set_fg(Some(Color::White)))?;
        write!(out, "[FILE] ")?;
    }
    out.reset()?;

    let perms = metadata
        .as_ref()
        .map(|m| PermissionSet::from_mode(m.permissions().mode()).to_string())
        .unwrap_or_else(|| "---------".to_string());
    write!(out, "{}  ", perms)?;

    let size = match &metadata {
        Some(m) if !entry.is_dir => format_size(m.len()),
        _ => "-".to_string(),
    };
    out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
    write!(out, "{:>8}", size)?;
    out.reset()?;

    let mtime = metadata
        .as_ref()
        .and_then(|m| m.modified().ok())
        .map(format_mtime)
        .unwrap_or_else(|| "-".to_string());
    write!(out, "  {:16}  ", mtime)?;

    if entry.is_dir {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
    }
    writeln!(out, "{}", entry.name)?;
    out.reset()
}

/// Write search results, one absolute path per line, then the match count.
pub fn write_search_results<W: WriteColor>(
    out: &mut W,
    target: &str,
    matches: &[PathBuf],
) -> io::Result<()> {
    if matches.is_empty() {
        writeln!(out, "no matches for '{}'", target)?;
        return Ok(());
    }
    for path in matches {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        write!(out, "found: ")?;
        out.reset()?;
        writeln!(out, "{}", path.display())?;
    }
    writeln!(out, "{} match(es)", matches.len())
}

/// Report an operation failure in red. Failures are never fatal to the
/// session; the caller returns to the menu afterwards.
pub fn write_error<W: WriteColor>(out: &mut W, err: &ExplorerError) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(Color::Red)))?;
    writeln!(out, "error: {}", err)?;
    out.reset()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TempTree;
    use termcolor::NoColor;

    fn render<F: FnOnce(&mut NoColor<Vec<u8>>)>(f: F) -> String {
        let mut out = NoColor::new(Vec::new());
        f(&mut out);
        String::from_utf8(out.into_inner()).unwrap()
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0B");
        assert_eq!(format_size(512), "512B");
        assert_eq!(format_size(1024), "1.0K");
        assert_eq!(format_size(1536), "1.5K");
        assert_eq!(format_size(1024 * 1024), "1.0M");
        assert_eq!(format_size(3 * 1024 * 1024 * 1024), "3.0G");
    }

    #[test]
    fn test_entry_row_tags_and_name() {
        let tree = TempTree::new();
        let file = tree.add_file("hello.txt", "hi");
        let dir = tree.add_dir("sub");

        let file_row = render(|out| {
            write_entry_row(
                out,
                &DirectoryEntry {
                    name: "hello.txt".into(),
                    path: file.clone(),
                    is_dir: false,
                },
            )
            .unwrap()
        });
        assert!(file_row.starts_with("[FILE] "));
        assert!(file_row.contains("hello.txt"));
        assert!(file_row.contains("2B"));

        let dir_row = render(|out| {
            write_entry_row(
                out,
                &DirectoryEntry {
                    name: "sub".into(),
                    path: dir,
                    is_dir: true,
                },
            )
            .unwrap()
        });
        assert!(dir_row.starts_with("[DIR]  "));
        assert!(dir_row.contains("sub"));
    }

    #[test]
    fn test_entry_row_survives_vanished_entry() {
        let row = render(|out| {
            write_entry_row(
                out,
                &DirectoryEntry {
                    name: "gone".into(),
                    path: "/no/such/entry".into(),
                    is_dir: false,
                },
            )
            .unwrap()
        });
        assert!(row.contains("---------"));
        assert!(row.contains("gone"));
    }

    #[test]
    fn test_listing_summary_counts() {
        let tree = TempTree::new();
        tree.add_file("a", "");
        tree.add_file("b", "");
        tree.add_dir("d");

        let explorer = crate::Explorer::open(tree.path()).unwrap();
        let entries = explorer.list().unwrap();
        let text = render(|out| write_listing(out, tree.path(), &entries).unwrap());
        assert!(text.contains("1 directories, 2 files"));
    }

    #[test]
    fn test_search_results_rendering() {
        let empty = render(|out| write_search_results(out, "a.txt", &[]).unwrap());
        assert!(empty.contains("no matches for 'a.txt'"));

        let hits = vec![PathBuf::from("/t/a.txt"), PathBuf::from("/t/sub/a.txt")];
        let text = render(|out| write_search_results(out, "a.txt", &hits).unwrap());
        assert!(text.contains("found: /t/a.txt"));
        assert!(text.contains("found: /t/sub/a.txt"));
        assert!(text.contains("2 match(es)"));
    }
}
