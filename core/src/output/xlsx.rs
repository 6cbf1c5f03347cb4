use std::path::{Path, PathBuf};

use log::debug;
use rust_xlsxwriter::{Format, Workbook as XlsxDocument};

use super::Workbook;
use crate::{
    error::Result,
    table::{EntryTable, COLUMNS},
};

/// Returns the name of the export file for the given date, formatted as
/// `YYYYMMDD`
pub fn export_file_name(date: &str) -> String {
    format!("lts_data_export_{date}.xlsx")
}

/// A [`Workbook`] written to an `.xlsx` file when finished
pub struct XlsxWorkbook {
    document: XlsxDocument,
    path: PathBuf,
    header_format: Format,
}

impl XlsxWorkbook {
    /// Create a new workbook that will be saved at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            document: XlsxDocument::new(),
            path: path.into(),
            header_format: Format::new().set_bold(),
        }
    }

    /// The path the workbook will be saved at
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Workbook for XlsxWorkbook {
    fn add_sheet(&mut self, name: &str, table: &EntryTable) -> Result<()> {
        let sheet = self.document.add_worksheet();
        sheet.set_name(name)?;

        for (col, c) in (0u16..).zip(COLUMNS) {
            sheet.write_string_with_format(0, col, c, &self.header_format)?;
        }
        for (row, e) in (1u32..).zip(table.entries()) {
            for (col, v) in (0u16..).zip(e.fields()) {
                // blank cells are left unwritten
                if !v.is_empty() {
                    sheet.write_string(row, col, v)?;
                }
            }
        }

        debug!("Added sheet `{name}' with {} rows", table.len());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.document.save(&self.path)?;
        Ok(())
    }
}
