//! Output side of the hospital directory cleaner.
//!
//! - **Workbook**: write cleaned records to an `.xlsx` sheet and read them back
//! - **Digest**: plain-text summary of a cleaned workbook
//! - **Inspection**: column names and first row of any workbook

mod digest;
mod error;
mod inspect;
mod xlsx;

pub use digest::{DigestSummary, render_digest, write_digest};
pub use error::{OutputError, Result};
pub use inspect::{Inspection, inspect_workbook};
pub use xlsx::{DirectoryRow, SheetData, read_directory, read_sheet, write_directory};
