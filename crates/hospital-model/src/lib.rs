//! Core types for the hospital directory cleaner.
//!
//! - [`HospitalRecord`]: one cleaned directory entry, every field populated
//! - [`RowLayout`]: where each field lives in one region of the raw export
//! - [`PipelineConfig`]: layouts plus report settings, loadable from TOML

pub mod config;
pub mod error;
pub mod layout;
pub mod record;

pub use config::{PipelineConfig, ReportOptions};
pub use error::{ConfigError, Result};
pub use layout::{LineRange, RowLayout, default_layouts, validate_layouts};
pub use record::{HEADERS, HospitalRecord, NOT_AVAILABLE, RawHospitalFields, SHEET_NAME};
