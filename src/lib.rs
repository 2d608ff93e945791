//! # Katalog Core Library
//!
//! This crate provides the core functionality for the `katalog` report
//! generator.
//!
//! It is designed to be used by the `katalog` command-line application, but its
//! public API can also be used to programmatically enumerate a directory tree
//! and render the result as a PDF tree diagram or a tabular listing.
//!
//! ## Key Modules
//!
//! - [`walk`]: Ordered recursive enumeration, with ZIP contents spliced in.
//! - [`archive`]: ZIP central-directory listing and index reconstruction.
//! - [`render`]: The paginated tree layout engine behind the PDF report.
//! - [`writers`]: One report encoder per supported output format.
//! - [`report`]: Format selection and the single enumerate-and-encode pass.

pub mod archive;
pub mod cli;
pub mod entry;
pub mod error;
pub use error::ReportError;

pub mod format;
pub mod render;
pub mod report;
pub mod walk;
pub mod writers;
