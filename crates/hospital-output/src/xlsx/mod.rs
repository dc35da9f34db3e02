//! `.xlsx` workbook support.

mod reader;
mod writer;

pub use reader::{DirectoryRow, SheetData, read_directory, read_sheet};
pub use writer::write_directory;
