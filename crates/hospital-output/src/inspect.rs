//! Quick look at a workbook's columns and first row.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::xlsx::read_sheet;

/// Columns of a workbook's main sheet and its first data row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inspection {
    pub path: PathBuf,
    pub sheet: String,
    pub columns: Vec<String>,
    /// `(column, value)` pairs; empty cells are `None`.
    pub first_row: Option<Vec<(String, Option<String>)>>,
    pub row_count: usize,
}

pub fn inspect_workbook(path: &Path) -> Result<Inspection> {
    let sheet = read_sheet(path)?;
    let first_row = sheet.rows.first().map(|row| {
        row.iter()
            .enumerate()
            .map(|(idx, value)| {
                let column = sheet
                    .columns
                    .get(idx)
                    .cloned()
                    .unwrap_or_else(|| format!("Column {}", idx + 1));
                (column, value.clone())
            })
            .collect()
    });
    Ok(Inspection {
        path: path.to_path_buf(),
        row_count: sheet.rows.len(),
        sheet: sheet.name,
        columns: sheet.columns,
        first_row,
    })
}
