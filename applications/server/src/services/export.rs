/// Spreadsheet export service - turns user records into an XLSX document
use crate::error::Result;
use kiosk_core::UserRecord;
use rust_xlsxwriter::{Format, Workbook};

/// MIME type of the generated document
pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// File name offered to the browser
pub const EXPORT_FILENAME: &str = "ai_bot_users.xlsx";

/// Name of the only sheet
pub const SHEET_NAME: &str = "Users";

/// Header labels and column widths, in column order
pub const COLUMNS: [(&str, f64); 4] = [
    ("ID", 10.0),
    ("Name", 30.0),
    ("Email", 30.0),
    ("Timestamp", 30.0),
];

/// Longest text a single cell can hold, in characters
pub const MAX_CELL_CHARS: usize = 32_767;

#[derive(Debug, Clone, Default)]
pub struct SpreadsheetExporter;

impl SpreadsheetExporter {
    pub fn new() -> Self {
        Self
    }

    /// Build a single-sheet workbook: header row, then one row per record
    ///
    /// Rows keep the input order. `ID` is a number cell, everything else is
    /// text; absent values leave their cell empty. Text longer than a cell
    /// allows is cut at `MAX_CELL_CHARS`.
    pub fn build_document(&self, users: &[UserRecord]) -> Result<Vec<u8>> {
        let mut workbook = Workbook::new();
        let header_format = Format::new().set_bold();

        let worksheet = workbook.add_worksheet();
        worksheet.set_name(SHEET_NAME)?;

        for (col, (label, width)) in (0u16..).zip(COLUMNS) {
            worksheet.set_column_width(col, width)?;
            worksheet.write_string_with_format(0, col, label, &header_format)?;
        }

        for (row, user) in (1u32..).zip(users) {
            worksheet.write_number(row, 0, user.id as f64)?;
            if let Some(name) = &user.name {
                worksheet.write_string(row, 1, cell_text(name))?;
            }
            if let Some(email) = &user.email {
                worksheet.write_string(row, 2, cell_text(email))?;
            }
            worksheet.write_string(row, 3, cell_text(&user.timestamp))?;
        }

        let bytes = workbook.save_to_buffer()?;
        tracing::debug!(rows = users.len(), bytes = bytes.len(), "Spreadsheet built");

        Ok(bytes)
    }
}

fn cell_text(value: &str) -> &str {
    match value.char_indices().nth(MAX_CELL_CHARS) {
        Some((end, _)) => &value[..end],
        None => value,
    }
}
