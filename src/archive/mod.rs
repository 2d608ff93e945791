//! # ZIP Index Handling
//!
//! This module lists the central directory of a ZIP container and
//! reconstructs the complete entry set it describes. Archive indexes only
//! name the members that were explicitly added, so directories that exist
//! purely as path prefixes of deeper members have to be synthesized.

use std::collections::{BTreeSet, HashSet};
use std::fs::File;
use std::path::{Path, PathBuf};

use chrono::{NaiveDate, NaiveDateTime};
use zip::ZipArchive;

use crate::entry::{Entry, EntryKind};
use crate::error::{ReportError, Result};

/// One record from an archive's raw index.
#[derive(Debug, Clone)]
pub struct ArchiveMember {
    /// The member path exactly as stored in the container.
    pub name: String,
    /// True when the index marks this member as a directory.
    pub is_dir: bool,
    /// Uncompressed size in bytes. Meaningless for directories.
    pub size: u64,
    /// The MS-DOS modification timestamp, when it decodes to a valid date.
    pub modified: Option<NaiveDateTime>,
}

/// Reads the central directory of the archive at `path`.
///
/// Members are fetched through raw index access, so nothing is decompressed
/// and password-protected archives still yield their full listing.
pub fn list_members(path: &Path) -> Result<Vec<ArchiveMember>> {
    let file = File::open(path).map_err(|e| ReportError::Io {
        source: e,
        path: path.to_path_buf(),
    })?;
    let mut container = ZipArchive::new(file).map_err(|e| ReportError::Zip {
        source: e,
        path: path.to_path_buf(),
    })?;

    let mut members = Vec::with_capacity(container.len());
    for index in 0..container.len() {
        let member = container.by_index_raw(index).map_err(|e| ReportError::Zip {
            source: e,
            path: path.to_path_buf(),
        })?;
        members.push(ArchiveMember {
            name: member.name().to_string(),
            is_dir: member.is_dir(),
            size: member.size(),
            modified: decode_datetime(member.last_modified()),
        });
    }
    Ok(members)
}

/// Rebuilds the full entry list an archive index describes.
///
/// Two transformations happen here:
///
/// 1. Every strict path prefix of a member that the index never names as a
///    directory member becomes a synthesized directory entry, without size
///    or timestamp.
/// 2. An explicit member whose own path collides with a synthesized
///    directory is dropped in favour of the directory.
///
/// The result is sorted ascending by the plain `/`-joined path string and
/// contains each distinct path exactly once, so a renderer can treat it as
/// a gap-free depth-first tree. Paths are relative to the archive root.
pub fn reconstruct(members: &[ArchiveMember]) -> Vec<Entry> {
    let literal_dirs: HashSet<String> = members
        .iter()
        .filter(|m| m.is_dir)
        .map(|m| split_components(&m.name).join("/"))
        .collect();

    let mut implied: BTreeSet<String> = BTreeSet::new();
    for member in members {
        let parts = split_components(&member.name);
        for depth in 1..parts.len() {
            let prefix = parts[..depth].join("/");
            if !literal_dirs.contains(&prefix) {
                implied.insert(prefix);
            }
        }
    }

    let mut entries: Vec<Entry> = implied
        .iter()
        .map(|path| Entry {
            path: PathBuf::from(path),
            kind: EntryKind::Directory,
            size: None,
            modified: None,
        })
        .collect();

    for member in members {
        let path = split_components(&member.name).join("/");
        if path.is_empty() || implied.contains(&path) {
            continue;
        }
        entries.push(Entry {
            path: PathBuf::from(&path),
            kind: if member.is_dir {
                EntryKind::Directory
            } else {
                EntryKind::File
            },
            size: if member.is_dir { None } else { Some(member.size) },
            modified: member.modified,
        });
    }

    entries.sort_by(|a, b| a.path.as_os_str().cmp(b.path.as_os_str()));
    entries
}

/// Splits a raw member name into clean path components. Both separator
/// styles occur in the wild, and some tools store leading `./` segments.
fn split_components(name: &str) -> Vec<String> {
    name.replace('\\', "/")
        .split('/')
        .filter(|part| !part.is_empty() && *part != ".")
        .map(str::to_string)
        .collect()
}

/// MS-DOS timestamps can hold field values outside the calendar; those
/// decode to `None` instead of a bogus date.
fn decode_datetime(time: zip::DateTime) -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(
        i32::from(time.year()),
        u32::from(time.month()),
        u32::from(time.day()),
    )?
    .and_hms_opt(
        u32::from(time.hour()),
        u32::from(time.minute()),
        u32::from(time.second()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn member(name: &str, is_dir: bool) -> ArchiveMember {
        ArchiveMember {
            name: name.to_string(),
            is_dir,
            size: if is_dir { 0 } else { 42 },
            modified: NaiveDate::from_ymd_opt(2024, 1, 2).and_then(|d| d.and_hms_opt(3, 4, 5)),
        }
    }

    fn paths(entries: &[Entry]) -> Vec<String> {
        entries
            .iter()
            .map(|e| e.path.to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn test_reconstruct_synthesizes_missing_parents() {
        let members = vec![
            member("docs/readme.md", false),
            member("docs/img/logo.png", false),
            member("empty/", true),
        ];
        let entries = reconstruct(&members);

        assert_eq!(
            paths(&entries),
            ["docs", "docs/img", "docs/img/logo.png", "docs/readme.md", "empty"]
        );
        assert_eq!(entries[0].kind, EntryKind::Directory);
        assert_eq!(entries[0].modified, None);
        assert_eq!(entries[2].kind, EntryKind::File);
        assert_eq!(entries[2].size, Some(42));
    }

    #[test]
    fn test_reconstruct_keeps_literal_directory_metadata() {
        let members = vec![member("a/", true), member("a/b.txt", false)];
        let entries = reconstruct(&members);

        assert_eq!(paths(&entries), ["a", "a/b.txt"]);
        assert_eq!(entries[0].kind, EntryKind::Directory);
        assert!(entries[0].modified.is_some());
        assert_eq!(entries[0].size, None);
    }

    #[test]
    fn test_reconstruct_drops_member_shadowed_by_implied_directory() {
        // A rare but legal index: "a" stored as a file next to "a/b.txt".
        let members = vec![member("a", false), member("a/b.txt", false)];
        let entries = reconstruct(&members);

        assert_eq!(paths(&entries), ["a", "a/b.txt"]);
        assert_eq!(entries[0].kind, EntryKind::Directory);
        assert_eq!(entries[0].modified, None);
    }

    #[test]
    fn test_reconstruct_is_input_order_insensitive() {
        let mut members = vec![
            member("x/y/z.txt", false),
            member("x/a.txt", false),
            member("top.txt", false),
        ];
        let forward = reconstruct(&members);
        members.reverse();
        let backward = reconstruct(&members);

        assert_eq!(forward, backward);
        assert_eq!(
            paths(&forward),
            ["top.txt", "x", "x/a.txt", "x/y", "x/y/z.txt"]
        );
    }

    #[test]
    fn test_reconstruct_normalizes_separators() {
        let members = vec![member("dir\\sub\\f.txt", false), member("./cur.txt", false)];
        let entries = reconstruct(&members);

        assert_eq!(paths(&entries), ["cur.txt", "dir", "dir/sub", "dir/sub/f.txt"]);
    }

    #[test]
    fn test_list_members_reads_index_without_extraction() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let zip_path = dir.path().join("data.zip");

        let mut writer = zip::ZipWriter::new(File::create(&zip_path)?);
        let options = zip::write::FileOptions::default();
        writer.add_directory("logs", options)?;
        writer.start_file("logs/app.log", options)?;
        writer.write_all(b"2024-01-02 started")?;
        writer.start_file("readme.txt", options)?;
        writer.write_all(b"hello")?;
        writer.finish()?;

        let members = list_members(&zip_path)?;
        let names: Vec<&str> = members.iter().map(|m| m.name.as_str()).collect();

        assert_eq!(names, ["logs/", "logs/app.log", "readme.txt"]);
        assert!(members[0].is_dir);
        assert!(!members[1].is_dir);
        assert_eq!(members[1].size, 18);
        assert_eq!(members[2].size, 5);
        Ok(())
    }

    #[test]
    fn test_list_members_rejects_non_archive() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let fake = dir.path().join("fake.zip");
        std::fs::write(&fake, b"this is not a zip archive")?;

        match list_members(&fake) {
            Err(ReportError::Zip { .. }) => Ok(()),
            other => panic!("expected a zip error, got {other:?}"),
        }
    }
}
