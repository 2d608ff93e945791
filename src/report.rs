//! # Report Driver
//!
//! This module ties the pipeline together: it resolves the analyzed root,
//! picks the output format from the report file extension, then runs one
//! enumeration pass and feeds every entry to the selected writer.

use std::fs;
use std::path::Path;

use crate::error::{ReportError, Result};
use crate::walk::Walk;
use crate::writers;

/// Supported output encodings, selected by the report file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Docx,
    Xlsx,
    Pdf,
    Csv,
    Json,
}

impl ReportKind {
    /// Maps an extension (without its dot) to a report kind. Matching is
    /// ASCII case-insensitive; anything unknown is rejected.
    pub fn from_extension(extension: &str) -> Result<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "docx" => Ok(Self::Docx),
            "xlsx" => Ok(Self::Xlsx),
            "pdf" => Ok(Self::Pdf),
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            other => Err(ReportError::InvalidFormat(other.to_string())),
        }
    }
}

/// Builds the report for the tree under `path` into the file at `report`.
///
/// The root is made absolute first so every entry carries a full path.
/// Validation happens before any output: a missing root or an unknown
/// report extension fails without touching the filesystem. Missing parent
/// directories of the report file are created.
pub fn make_report(path: &Path, report: &Path) -> Result<()> {
    let root = std::path::absolute(path).map_err(|e| ReportError::Io {
        source: e,
        path: path.to_path_buf(),
    })?;
    if !root.exists() {
        return Err(ReportError::NotFound(path.to_path_buf()));
    }
    let kind = ReportKind::from_extension(
        report
            .extension()
            .map(|e| e.to_string_lossy())
            .unwrap_or_default()
            .as_ref(),
    )?;

    if let Some(parent) = report.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| ReportError::Io {
            source: e,
            path: parent.to_path_buf(),
        })?;
    }

    let mut writer = writers::for_kind(kind, report, &root);
    writer.create_file()?;
    for item in Walk::new(&root)? {
        let entry = item?;
        writer.write_entry(
            &entry.path.display().to_string(),
            &entry.size_label(),
            &entry.time_label(),
        )?;
    }
    writer.save_file()
}
