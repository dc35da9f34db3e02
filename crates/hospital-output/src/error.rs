//! Error types for workbook and report output.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while writing or reading output files.
#[derive(Debug, Error)]
pub enum OutputError {
    // === Workbook Errors ===
    /// Building or saving the workbook failed.
    #[error("failed to write workbook {path}: {source}")]
    WorkbookWrite {
        path: PathBuf,
        #[source]
        source: rust_xlsxwriter::XlsxError,
    },

    /// Opening or parsing an existing workbook failed.
    #[error("failed to read workbook {path}: {source}")]
    WorkbookRead {
        path: PathBuf,
        #[source]
        source: calamine::XlsxError,
    },

    /// Workbook has no worksheets.
    #[error("workbook {path} has no worksheets")]
    NoWorksheet { path: PathBuf },

    /// Sheet header does not match the cleaned directory columns.
    #[error("unexpected header in {path}: [{}]", .found.join(", "))]
    UnexpectedHeader { path: PathBuf, found: Vec<String> },

    /// More records than a worksheet can hold.
    #[error("{count} records exceed the worksheet row limit")]
    TooManyRows { count: usize },

    // === Report Errors ===
    /// Writing the text digest failed.
    #[error("failed to write report {path}: {source}")]
    ReportWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for output operations.
pub type Result<T> = std::result::Result<T, OutputError>;
