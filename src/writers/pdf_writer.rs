//! PDF report writer.
//!
//! Entries run through the tree pager first; the resulting per-page
//! operation lists are then replayed onto `printpdf` pages. Labels are
//! mostly Cyrillic, which the fourteen built-in PDF fonts cannot encode,
//! so a Unicode-capable system font is embedded when one can be found and
//! Helvetica serves as the fallback.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use printpdf::{
    BuiltinFont, IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference, Point,
};

use super::ReportWriter;
use crate::error::{ReportError, Result};
use crate::render::{self, DrawOp, TreePager};

/// System fonts probed for Cyrillic text, in order.
const FONT_CANDIDATES: [&str; 5] = [
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/Library/Fonts/Arial Unicode.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;

/// Tree-diagram report on A4 pages.
pub struct PdfWriter {
    report_path: PathBuf,
    dir_path: PathBuf,
    pager: Option<TreePager>,
}

impl PdfWriter {
    pub fn new(report_path: &Path, dir_path: &Path) -> Self {
        Self {
            report_path: report_path.to_path_buf(),
            dir_path: dir_path.to_path_buf(),
            pager: None,
        }
    }
}

/// Converts a point coordinate from the layout engine to millimeters.
fn mm(points: f32) -> Mm {
    Mm((points * 25.4 / 72.0).into())
}

fn load_font(doc: &PdfDocumentReference) -> Result<IndirectFontRef> {
    for candidate in FONT_CANDIDATES {
        if let Ok(file) = File::open(candidate) {
            if let Ok(font) = doc.add_external_font(file) {
                return Ok(font);
            }
        }
    }
    doc.add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ReportError::Pdf(e.to_string()))
}

impl ReportWriter for PdfWriter {
    fn create_file(&mut self) -> Result<()> {
        self.pager = Some(TreePager::begin(&self.dir_path.display().to_string()));
        Ok(())
    }

    fn write_entry(&mut self, name: &str, size: &str, modified: &str) -> Result<()> {
        let path = Path::new(name);
        let relative = path
            .strip_prefix(&self.dir_path)
            .map_err(|_| ReportError::StripPrefix {
                prefix: self.dir_path.clone(),
                path: path.to_path_buf(),
            })?;
        let depth = relative.components().count().saturating_sub(1);
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        if let Some(pager) = self.pager.as_mut() {
            pager.consume(depth, &format!("{file_name} - {size} - {modified}"));
        }
        Ok(())
    }

    fn save_file(&mut self) -> Result<()> {
        let Some(pager) = self.pager.take() else {
            return Ok(());
        };
        let pages = pager.finish();

        let (doc, first_page, first_layer) = PdfDocument::new(
            render::PAGE_TITLE,
            Mm(PAGE_WIDTH_MM.into()),
            Mm(PAGE_HEIGHT_MM.into()),
            "Layer 1",
        );
        let font = load_font(&doc)?;

        let mut layer = doc.get_page(first_page).get_layer(first_layer);
        for (index, page) in pages.into_iter().enumerate() {
            if index > 0 {
                let (page_index, layer_index) = doc.add_page(
                    Mm(PAGE_WIDTH_MM.into()),
                    Mm(PAGE_HEIGHT_MM.into()),
                    "Layer 1",
                );
                layer = doc.get_page(page_index).get_layer(layer_index);
            }
            layer.set_outline_thickness(render::LINE_WIDTH.into());

            for op in page {
                match op {
                    DrawOp::Line { x1, y1, x2, y2 } => {
                        layer.add_line(Line {
                            points: vec![
                                (Point::new(mm(x1), mm(y1)), false),
                                (Point::new(mm(x2), mm(y2)), false),
                            ],
                            is_closed: false,
                        });
                    }
                    DrawOp::Text { x, y, size, text } => {
                        layer.use_text(text, size.into(), mm(x), mm(y), &font);
                    }
                }
            }
        }

        let file = File::create(&self.report_path).map_err(|e| ReportError::Io {
            source: e,
            path: self.report_path.clone(),
        })?;
        doc.save(&mut BufWriter::new(file))
            .map_err(|e| ReportError::Pdf(e.to_string()))?;
        Ok(())
    }
}
