//! # Report Writers
//!
//! One writer per supported output format, behind a common interface.
//! The driver calls `create_file` once, `write_entry` for every entry in
//! enumeration order and `save_file` once at the end, so a writer can
//! stream (CSV), buffer rows (JSON, DOCX) or build a whole document model
//! (XLSX, PDF) as its format demands.

mod csv_writer;
mod docx_writer;
mod json_writer;
mod pdf_writer;
mod xlsx_writer;

pub use csv_writer::CsvWriter;
pub use docx_writer::DocxWriter;
pub use json_writer::JsonWriter;
pub use pdf_writer::PdfWriter;
pub use xlsx_writer::XlsxWriter;

use std::path::Path;

use crate::error::Result;
use crate::report::ReportKind;

/// Capability interface every report encoder implements.
pub trait ReportWriter {
    /// Prepares the output document and writes any fixed front matter.
    fn create_file(&mut self) -> Result<()>;

    /// Appends one entry. `name` is the full path string, `size` and
    /// `modified` are the preformatted column labels.
    fn write_entry(&mut self, name: &str, size: &str, modified: &str) -> Result<()>;

    /// Finalizes and persists the document.
    fn save_file(&mut self) -> Result<()>;
}

/// Instantiates the writer for `kind`, wiring in the report path and the
/// analyzed root directory.
pub fn for_kind(kind: ReportKind, report: &Path, root: &Path) -> Box<dyn ReportWriter> {
    match kind {
        ReportKind::Csv => Box::new(CsvWriter::new(report)),
        ReportKind::Json => Box::new(JsonWriter::new(report)),
        ReportKind::Xlsx => Box::new(XlsxWriter::new(report, root)),
        ReportKind::Docx => Box::new(DocxWriter::new(report, root)),
        ReportKind::Pdf => Box::new(PdfWriter::new(report, root)),
    }
}
