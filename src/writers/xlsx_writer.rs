//! XLSX report writer.

use std::path::{Path, PathBuf};

use rust_xlsxwriter::{Format, FormatBorder, Workbook};

use super::ReportWriter;
use crate::error::Result;

/// Styled worksheet: a title cell, a narrow spacer row, a bordered header
/// row and one data row per entry. Column A stays as a thin gutter, the
/// data lives in columns B through D.
pub struct XlsxWriter {
    report_path: PathBuf,
    dir_path: PathBuf,
    workbook: Workbook,
    header_format: Format,
    next_row: u32,
}

impl XlsxWriter {
    pub fn new(report_path: &Path, dir_path: &Path) -> Self {
        Self {
            report_path: report_path.to_path_buf(),
            dir_path: dir_path.to_path_buf(),
            workbook: Workbook::new(),
            header_format: Format::new()
                .set_font_name("Calibri")
                .set_font_size(12)
                .set_bold(),
            next_row: 3,
        }
    }
}

impl ReportWriter for XlsxWriter {
    fn create_file(&mut self) -> Result<()> {
        let title = format!(
            "Отчет о структуре файлов и папок каталога {}",
            self.dir_path.display()
        );
        let bordered = self.header_format.clone().set_border(FormatBorder::Medium);

        let worksheet = self.workbook.add_worksheet();
        worksheet.set_name("Иерархия каталога")?;

        worksheet.write_string_with_format(0, 1, &title, &self.header_format)?;
        worksheet.set_row_height(1, 7)?;
        worksheet.set_column_width(0, 1)?;

        for (index, text) in ["Имя файла/папки", "Размер файла", "Последнее изменение"]
            .iter()
            .enumerate()
        {
            worksheet.write_string_with_format(2, 1 + index as u16, *text, &bordered)?;
        }
        worksheet.set_column_width(1, 100)?;
        worksheet.set_column_width(2, 25)?;
        worksheet.set_column_width(3, 25)?;
        Ok(())
    }

    fn write_entry(&mut self, name: &str, size: &str, modified: &str) -> Result<()> {
        let row = self.next_row;
        let worksheet = self.workbook.worksheet_from_index(0)?;
        worksheet.write_string(row, 1, name)?;
        worksheet.write_string(row, 2, size)?;
        worksheet.write_string(row, 3, modified)?;
        self.next_row += 1;
        Ok(())
    }

    fn save_file(&mut self) -> Result<()> {
        self.workbook.save(&self.report_path)?;
        Ok(())
    }
}
