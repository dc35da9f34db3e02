//! Cleaning stage for hospital directory rows.
//!
//! Raw field tuples become [`HospitalRecord`](hospital_model::HospitalRecord)s
//! through total normalization functions that fall back to the
//! `"Not Available"` placeholder instead of failing. Cleaned records are then
//! deduplicated and ordered for output.

pub mod dedupe;
pub mod normalization;
pub mod record;
pub mod sort;

pub use dedupe::{DedupeOutcome, dedupe_records};
pub use normalization::{clean_contact, clean_email, clean_text};
pub use record::{clean_record, clean_records};
pub use sort::sort_records;
