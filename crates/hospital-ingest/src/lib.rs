//! Raw directory export ingestion.
//!
//! The export is a comma-separated text file made of two concatenated
//! batches with different column orders. This crate loads the file and
//! splits it into raw field tuples according to configured
//! [`RowLayout`](hospital_model::RowLayout)s.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use hospital_ingest::{read_source_lines, split_rows};
//! use hospital_model::default_layouts;
//!
//! let lines = read_source_lines(Path::new("CMCHIS.txt"))?;
//! let outcome = split_rows(&lines, &default_layouts())?;
//! println!("{} rows accepted", outcome.accepted());
//! ```

mod error;
mod reader;
mod split;

// === Error Types ===
pub use error::{IngestError, Result};

// === Source Reading ===
pub use reader::read_source_lines;

// === Row Splitting ===
pub use split::{LayoutStats, SplitOutcome, extract_fields, split_rows};
