//! CSV report writer.

use std::fs::File;
use std::path::{Path, PathBuf};

use csv::{Terminator, WriterBuilder};

use super::ReportWriter;
use crate::error::{ReportError, Result};

/// Semicolon-separated listing with a fixed header row, one record per
/// entry, CRLF terminated.
pub struct CsvWriter {
    report_path: PathBuf,
    out: Option<csv::Writer<File>>,
}

impl CsvWriter {
    pub fn new(report_path: &Path) -> Self {
        Self {
            report_path: report_path.to_path_buf(),
            out: None,
        }
    }
}

impl ReportWriter for CsvWriter {
    fn create_file(&mut self) -> Result<()> {
        let file = File::create(&self.report_path).map_err(|e| ReportError::Io {
            source: e,
            path: self.report_path.clone(),
        })?;
        let mut out = WriterBuilder::new()
            .delimiter(b';')
            .terminator(Terminator::CRLF)
            .from_writer(file);
        out.write_record(["Имя файла", "Размер", "Последнее изменение"])?;
        self.out = Some(out);
        Ok(())
    }

    fn write_entry(&mut self, name: &str, size: &str, modified: &str) -> Result<()> {
        if let Some(out) = self.out.as_mut() {
            out.write_record([name, size, modified])?;
        }
        Ok(())
    }

    fn save_file(&mut self) -> Result<()> {
        if let Some(mut out) = self.out.take() {
            out.flush().map_err(|e| ReportError::Io {
                source: e,
                path: self.report_path.clone(),
            })?;
        }
        Ok(())
    }
}
