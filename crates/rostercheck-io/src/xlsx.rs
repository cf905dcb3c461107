use crate::error::Result;
use rust_xlsxwriter::{Format, Workbook};
use rostercheck_core::DiscrepancyVerdict;

pub const SHEET_NAME: &str = "Report";

/// Builds a single-sheet workbook: bold header row, one row per verdict.
pub fn render_report(verdicts: &[DiscrepancyVerdict]) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();

    let worksheet = workbook.add_worksheet().set_name(SHEET_NAME)?;
    for (col, column) in DiscrepancyVerdict::COLUMNS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *column, &header)?;
    }

    for (row, verdict) in verdicts.iter().enumerate() {
        let row = row as u32 + 1;
        for (col, value) in verdict.fields().iter().enumerate() {
            worksheet.write_string(row, col as u16, *value)?;
        }
    }

    Ok(workbook.save_to_buffer()?)
}
