//! Shared entry model produced by the walker and consumed by report writers.

use std::path::PathBuf;

use chrono::NaiveDateTime;

use crate::format;

/// Size column label used for directories in every report format.
pub const FOLDER_LABEL: &str = "ПАПКА";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
}

/// One filesystem object or archive member surfaced by enumeration.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    /// Full path of the object. Members of an archive carry the archive
    /// path itself as a prefix, as if the archive were a directory.
    pub path: PathBuf,
    pub kind: EntryKind,
    /// Byte size for files; directories have none.
    pub size: Option<u64>,
    /// Last modification time, when the source records one.
    pub modified: Option<NaiveDateTime>,
}

impl Entry {
    /// Size column text: a fixed marker for directories, a scaled byte
    /// count for files.
    pub fn size_label(&self) -> String {
        match self.kind {
            EntryKind::Directory => FOLDER_LABEL.to_string(),
            EntryKind::File => format::readable_size(self.size.unwrap_or(0)),
        }
    }

    /// Modification column text; empty when the timestamp is unknown.
    pub fn time_label(&self) -> String {
        self.modified.map(format::format_timestamp).unwrap_or_default()
    }
}
