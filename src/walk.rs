//! # Entry Enumeration
//!
//! This module walks a directory tree in a single ordered pass and splices
//! the reconstructed contents of every `.zip` file in as a contiguous block
//! right after the archive itself, as if the archive were a directory.

use std::collections::VecDeque;
use std::path::Path;

use chrono::{DateTime, Local};
use walkdir::{DirEntry, WalkDir};

use crate::archive;
use crate::entry::{Entry, EntryKind};
use crate::error::{ReportError, Result};

/// Lazy iterator over every entry under a root directory.
///
/// Filesystem objects come out ascending by name within each directory,
/// depth first, so a directory's descendants always form a contiguous
/// block directly after it. The root itself is not yielded. One forward
/// pass only; the iterator is not restartable.
pub struct Walk {
    walker: walkdir::IntoIter,
    queued: VecDeque<Entry>,
}

impl Walk {
    /// Starts a walk over `root`. Fails up front when the path does not
    /// exist, before any output could be produced.
    pub fn new(root: &Path) -> Result<Self> {
        if !root.exists() {
            return Err(ReportError::NotFound(root.to_path_buf()));
        }
        Ok(Self {
            walker: WalkDir::new(root)
                .min_depth(1)
                .sort_by_file_name()
                .into_iter(),
            queued: VecDeque::new(),
        })
    }

    fn fs_entry(&self, item: DirEntry) -> Result<Entry> {
        let metadata = item.metadata()?;
        let kind = if item.file_type().is_file() {
            EntryKind::File
        } else {
            EntryKind::Directory
        };
        let modified = metadata
            .modified()
            .ok()
            .map(|time| DateTime::<Local>::from(time).naive_local());
        Ok(Entry {
            size: match kind {
                EntryKind::File => Some(metadata.len()),
                EntryKind::Directory => None,
            },
            path: item.into_path(),
            kind,
            modified,
        })
    }

    /// Queues the reconstructed contents of the archive at `entry`, rooted
    /// under the archive's own path.
    fn queue_archive_contents(&mut self, entry: &Entry) -> Result<()> {
        let members = archive::list_members(&entry.path)?;
        self.queued
            .extend(archive::reconstruct(&members).into_iter().map(|inner| Entry {
                path: entry.path.join(&inner.path),
                ..inner
            }));
        Ok(())
    }
}

impl Iterator for Walk {
    type Item = Result<Entry>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(queued) = self.queued.pop_front() {
            return Some(Ok(queued));
        }

        let item = match self.walker.next()? {
            Ok(item) => item,
            Err(e) => return Some(Err(e.into())),
        };
        let entry = match self.fs_entry(item) {
            Ok(entry) => entry,
            Err(e) => return Some(Err(e)),
        };

        if entry.kind == EntryKind::File && has_zip_extension(&entry.path) {
            match self.queue_archive_contents(&entry) {
                Ok(()) => {}
                // A broken container costs its own listing, not the run.
                Err(e @ ReportError::Zip { .. }) => eprintln!("{e}"),
                Err(e) => return Some(Err(e)),
            }
        }
        Some(Ok(entry))
    }
}

fn has_zip_extension(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("zip"))
}
