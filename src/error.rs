use std::path::PathBuf;

use thiserror::Error;

/// The primary error type for all operations in the `katalog` crate.
#[derive(Debug, Error)]
pub enum ReportError {
    /// An I/O error occurred, typically while reading or writing a file.
    /// Includes the path where the error happened.
    #[error("I/O error on path '{}': {source}", .path.display())]
    Io {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },

    /// The directory selected for analysis does not exist.
    #[error("path '{}' does not exist", .0.display())]
    NotFound(PathBuf),

    /// The report file extension maps to no supported output format.
    #[error("unsupported report format: '{0}'")]
    InvalidFormat(String),

    /// A file with a `.zip` extension whose index could not be read.
    #[error("unreadable zip archive '{}': {source}", .path.display())]
    Zip {
        #[source]
        source: zip::result::ZipError,
        path: PathBuf,
    },

    /// An error occurred when trying to strip a prefix from a file path.
    #[error("could not strip prefix '{}' from path '{}'", .prefix.display(), .path.display())]
    StripPrefix { prefix: PathBuf, path: PathBuf },

    /// An error reported by the directory walker.
    #[error("directory walk error: {0}")]
    Walk(#[from] walkdir::Error),

    /// An error while writing the CSV report.
    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    /// An error while serializing the JSON report.
    #[error("JSON write error: {0}")]
    Json(#[from] serde_json::Error),

    /// An error while building the XLSX workbook.
    #[error("XLSX write error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    /// An error while packing the DOCX document.
    #[error("DOCX write error: {0}")]
    Docx(String),

    /// An error while rendering the PDF document.
    #[error("PDF write error: {0}")]
    Pdf(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ReportError>;
