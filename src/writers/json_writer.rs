//! JSON report writer.

use std::fs::File;
use std::path::{Path, PathBuf};

use serde::Serialize;

use super::ReportWriter;
use crate::error::{ReportError, Result};

#[derive(Serialize)]
struct Row {
    name: String,
    size: String,
    last_changed: String,
}

/// Collects every entry and dumps one pretty-printed array on save,
/// indented with four spaces, non-ASCII text kept as is.
pub struct JsonWriter {
    report_path: PathBuf,
    out: Option<File>,
    rows: Vec<Row>,
}

impl JsonWriter {
    pub fn new(report_path: &Path) -> Self {
        Self {
            report_path: report_path.to_path_buf(),
            out: None,
            rows: Vec::new(),
        }
    }
}

impl ReportWriter for JsonWriter {
    fn create_file(&mut self) -> Result<()> {
        let file = File::create(&self.report_path).map_err(|e| ReportError::Io {
            source: e,
            path: self.report_path.clone(),
        })?;
        self.out = Some(file);
        Ok(())
    }

    fn write_entry(&mut self, name: &str, size: &str, modified: &str) -> Result<()> {
        self.rows.push(Row {
            name: name.to_string(),
            size: size.to_string(),
            last_changed: modified.to_string(),
        });
        Ok(())
    }

    fn save_file(&mut self) -> Result<()> {
        if let Some(file) = self.out.take() {
            let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
            let mut serializer = serde_json::Serializer::with_formatter(file, formatter);
            self.rows.serialize(&mut serializer)?;
        }
        Ok(())
    }
}
