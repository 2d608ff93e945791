//! DOCX report writer.

use std::fs::File;
use std::path::{Path, PathBuf};

use docx_rs::{Docx, PageMargin, Paragraph, Run, Table, TableCell, TableRow};

use super::ReportWriter;
use crate::error::{ReportError, Result};

/// Word document with a title paragraph and a three-column table, one row
/// per entry, on pages with narrow 10 mm margins.
pub struct DocxWriter {
    report_path: PathBuf,
    dir_path: PathBuf,
    rows: Vec<TableRow>,
}

impl DocxWriter {
    pub fn new(report_path: &Path, dir_path: &Path) -> Self {
        Self {
            report_path: report_path.to_path_buf(),
            dir_path: dir_path.to_path_buf(),
            rows: Vec::new(),
        }
    }
}

fn text_cell(text: &str) -> TableCell {
    TableCell::new().add_paragraph(Paragraph::new().add_run(Run::new().add_text(text)))
}

impl ReportWriter for DocxWriter {
    fn create_file(&mut self) -> Result<()> {
        self.rows.push(TableRow::new(vec![
            text_cell("Имя файла/папки"),
            text_cell("Размер файла"),
            text_cell("Последнее изменение"),
        ]));
        Ok(())
    }

    fn write_entry(&mut self, name: &str, size: &str, modified: &str) -> Result<()> {
        self.rows.push(TableRow::new(vec![
            text_cell(name),
            text_cell(size),
            text_cell(modified),
        ]));
        Ok(())
    }

    fn save_file(&mut self) -> Result<()> {
        let heading = format!(
            "Отчет о структуре файлов и папок каталога {}",
            self.dir_path.display()
        );
        let file = File::create(&self.report_path).map_err(|e| ReportError::Io {
            source: e,
            path: self.report_path.clone(),
        })?;

        // 10 mm margins, in twentieths of a point.
        Docx::new()
            .page_margin(
                PageMargin::new()
                    .top(567)
                    .bottom(567)
                    .left(567)
                    .right(567),
            )
            .add_paragraph(
                Paragraph::new().add_run(Run::new().add_text(heading).size(56).bold()),
            )
            .add_table(Table::new(std::mem::take(&mut self.rows)))
            .build()
            .pack(file)
            .map_err(|e| ReportError::Docx(e.to_string()))?;
        Ok(())
    }
}
