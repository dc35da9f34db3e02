//! Writing cleaned records to a workbook.

use std::path::Path;

use hospital_model::{HEADERS, HospitalRecord, SHEET_NAME};
use rust_xlsxwriter::{Format, Workbook, XlsxError};
use tracing::info;

use crate::error::{OutputError, Result};

/// Writes records to a single-sheet workbook, replacing any existing file.
///
/// Row 1 holds the bold [`HEADERS`]; each record follows in field order.
/// Every cell is written as text so digit strings keep leading zeros.
pub fn write_directory(path: &Path, records: &[HospitalRecord]) -> Result<()> {
    if u32::try_from(records.len()).is_err() {
        return Err(OutputError::TooManyRows {
            count: records.len(),
        });
    }
    let mut workbook = build_workbook(records).map_err(|source| match source {
        XlsxError::RowColumnLimitError => OutputError::TooManyRows {
            count: records.len(),
        },
        source => OutputError::WorkbookWrite {
            path: path.to_path_buf(),
            source,
        },
    })?;
    workbook
        .save(path)
        .map_err(|source| OutputError::WorkbookWrite {
            path: path.to_path_buf(),
            source,
        })?;
    info!(path = %path.display(), rows = records.len(), "wrote workbook");
    Ok(())
}

fn build_workbook(records: &[HospitalRecord]) -> std::result::Result<Workbook, XlsxError> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (col, header) in (0u16..).zip(HEADERS) {
        worksheet.write_string_with_format(0, col, header, &header_format)?;
    }
    for (row, record) in (1u32..).zip(records) {
        for (col, value) in (0u16..).zip(record.values()) {
            worksheet.write_string(row, col, value)?;
        }
    }
    worksheet.autofit();
    Ok(workbook)
}
