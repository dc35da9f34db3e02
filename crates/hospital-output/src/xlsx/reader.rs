//! Reading workbooks back into rows.

use std::path::Path;

use calamine::{Data, Reader, Xlsx, open_workbook};
use hospital_model::{HEADERS, HospitalRecord, NOT_AVAILABLE, SHEET_NAME};
use tracing::debug;

use crate::error::{OutputError, Result};

/// Contents of one worksheet: the header row and the data rows below it.
///
/// Empty cells are `None`. Every row is padded to the header width.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SheetData {
    pub name: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Option<String>>>,
}

/// One row of a cleaned directory workbook, with empty cells as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryRow {
    pub hospital_name: Option<String>,
    pub city: Option<String>,
    pub district: Option<String>,
    pub state: Option<String>,
    pub contact: Option<String>,
    pub email: Option<String>,
    pub specialties: Option<String>,
}

impl DirectoryRow {
    fn from_cells(mut cells: Vec<Option<String>>) -> Self {
        cells.resize(HEADERS.len(), None);
        let mut cells = cells.into_iter();
        let mut next = || cells.next().flatten();
        Self {
            hospital_name: next(),
            city: next(),
            district: next(),
            state: next(),
            contact: next(),
            email: next(),
            specialties: next(),
        }
    }

    /// Converts to a record, filling empty cells with [`NOT_AVAILABLE`].
    pub fn to_record(&self) -> HospitalRecord {
        let field = |value: &Option<String>| {
            value
                .clone()
                .unwrap_or_else(|| NOT_AVAILABLE.to_string())
        };
        HospitalRecord {
            hospital_name: field(&self.hospital_name),
            city: field(&self.city),
            district: field(&self.district),
            state: field(&self.state),
            contact: field(&self.contact),
            email: field(&self.email),
            specialties: field(&self.specialties),
        }
    }
}

/// Reads the `Hospitals` sheet, or the first sheet when there is none.
pub fn read_sheet(path: &Path) -> Result<SheetData> {
    let read_error = |source| OutputError::WorkbookRead {
        path: path.to_path_buf(),
        source,
    };
    let mut workbook: Xlsx<_> = open_workbook(path).map_err(read_error)?;
    let sheet_names = workbook.sheet_names();
    let name = sheet_names
        .iter()
        .find(|name| name.as_str() == SHEET_NAME)
        .or_else(|| sheet_names.first())
        .cloned()
        .ok_or_else(|| OutputError::NoWorksheet {
            path: path.to_path_buf(),
        })?;
    let range = workbook.worksheet_range(&name).map_err(read_error)?;

    let mut rows = range.rows().map(|row| row.iter().map(cell_text).collect::<Vec<_>>());
    let columns: Vec<String> = rows
        .next()
        .map(|header| header.into_iter().map(Option::unwrap_or_default).collect())
        .unwrap_or_default();
    let rows: Vec<Vec<Option<String>>> = rows
        .map(|mut row| {
            row.resize(columns.len().max(row.len()), None);
            row
        })
        .collect();

    debug!(path = %path.display(), sheet = %name, rows = rows.len(), "read worksheet");
    Ok(SheetData {
        name,
        columns,
        rows,
    })
}

/// Reads a cleaned directory workbook.
///
/// The header row must match [`HEADERS`]; rows that are entirely empty are
/// skipped.
pub fn read_directory(path: &Path) -> Result<Vec<DirectoryRow>> {
    let sheet = read_sheet(path)?;
    let header_matches = sheet.columns.len() == HEADERS.len()
        && sheet
            .columns
            .iter()
            .zip(HEADERS)
            .all(|(found, expected)| found.trim() == expected);
    if !header_matches {
        return Err(OutputError::UnexpectedHeader {
            path: path.to_path_buf(),
            found: sheet.columns,
        });
    }
    Ok(sheet
        .rows
        .into_iter()
        .filter(|row| row.iter().any(Option::is_some))
        .map(DirectoryRow::from_cells)
        .collect())
}

fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty => None,
        Data::String(value) if value.is_empty() => None,
        Data::String(value) => Some(value.clone()),
        other => Some(other.to_string()),
    }
}
