//! Plain-text digest of a cleaned directory workbook.

use std::fs;
use std::path::Path;

use hospital_model::{NOT_AVAILABLE, ReportOptions};
use tracing::info;

use crate::error::{OutputError, Result};
use crate::xlsx::{DirectoryRow, read_directory};

const RULE_WIDTH: usize = 30;
const DEFAULT_SPECIALTY: &str = "General";

/// Counts behind a written digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigestSummary {
    pub total: usize,
    pub listed: usize,
}

/// Renders the digest text.
///
/// Cells holding `"Not Available"` are ordinary text and printed as-is;
/// only empty cells fall back to defaults.
pub fn render_digest(rows: &[DirectoryRow], options: &ReportOptions) -> String {
    if rows.is_empty() {
        return format!("No hospitals found under {} insurance.", options.scheme);
    }
    let count = rows.len();
    let mut out = format!(
        "Found {count} hospitals supporting {}.\nDisplaying the first {} results:\n\n",
        options.scheme, options.limit
    );
    for row in rows.iter().take(options.limit) {
        out.push_str(&render_entry(row));
    }
    if count > options.limit {
        out.push_str(&format!(
            "\n... and {} more hospitals.\n",
            count - options.limit
        ));
    }
    out
}

/// One hospital block, closed by a dashed rule.
fn render_entry(row: &DirectoryRow) -> String {
    let cell = |value: &Option<String>, default: &str| {
        value.clone().unwrap_or_else(|| default.to_string())
    };
    format!(
        "Hospital Name: {}\n\
         District, State: {}, {}\n\
         Specialist: {}\n\
         Contact Number: {}\n\
         Email: {}\n\
         {}\n",
        cell(&row.hospital_name, NOT_AVAILABLE),
        cell(&row.district, ""),
        cell(&row.state, ""),
        cell(&row.specialties, DEFAULT_SPECIALTY),
        cell(&row.contact, NOT_AVAILABLE),
        cell(&row.email, NOT_AVAILABLE),
        "-".repeat(RULE_WIDTH)
    )
}

/// Reads a cleaned workbook and writes its digest to `output`.
pub fn write_digest(
    workbook: &Path,
    output: &Path,
    options: &ReportOptions,
) -> Result<DigestSummary> {
    let rows = read_directory(workbook)?;
    let text = render_digest(&rows, options);
    fs::write(output, text).map_err(|source| OutputError::ReportWrite {
        path: output.to_path_buf(),
        source,
    })?;
    let summary = DigestSummary {
        total: rows.len(),
        listed: rows.len().min(options.limit),
    };
    info!(
        path = %output.display(),
        total = summary.total,
        listed = summary.listed,
        "wrote digest"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str) -> DirectoryRow {
        DirectoryRow {
            hospital_name: Some(name.to_string()),
            city: Some(NOT_AVAILABLE.to_string()),
            district: Some("Madurai".to_string()),
            state: Some("Tamil Nadu".to_string()),
            contact: Some("04522580000".to_string()),
            email: Some(NOT_AVAILABLE.to_string()),
            specialties: Some("Cardiology".to_string()),
        }
    }

    #[test]
    fn test_empty_digest() {
        let text = render_digest(&[], &ReportOptions::default());
        assert_eq!(text, "No hospitals found under CMCHIS insurance.");
    }

    #[test]
    fn test_single_entry_text() {
        let text = render_digest(&[row("Meenakshi Mission")], &ReportOptions::default());
        assert_eq!(
            text,
            "Found 1 hospitals supporting CMCHIS.\n\
             Displaying the first 5 results:\n\
             \n\
             Hospital Name: Meenakshi Mission\n\
             District, State: Madurai, Tamil Nadu\n\
             Specialist: Cardiology\n\
             Contact Number: 04522580000\n\
             Email: Not Available\n\
             ------------------------------\n"
        );
    }

    #[test]
    fn test_placeholder_printed_verbatim() {
        let text = render_digest(&[row("Meenakshi Mission")], &ReportOptions::default());
        assert!(text.contains("Email: Not Available\n"));
        assert!(text.starts_with("Found 1 hospitals supporting CMCHIS.\n"));
        assert!(!text.contains("more hospitals"));
    }

    #[test]
    fn test_empty_cells_use_defaults() {
        let blank = DirectoryRow {
            hospital_name: Some("Blank Clinic".to_string()),
            ..DirectoryRow::default()
        };
        let text = render_digest(&[blank], &ReportOptions::default());
        assert!(text.contains("District, State: , \n"));
        assert!(text.contains("Specialist: General\n"));
        assert!(text.contains("Contact Number: Not Available\n"));
    }

    #[test]
    fn test_limit_and_remaining_count() {
        let rows: Vec<_> = (1..=7).map(|idx| row(&format!("Hospital {idx}"))).collect();
        let options = ReportOptions {
            limit: 5,
            ..ReportOptions::default()
        };
        let text = render_digest(&rows, &options);
        assert_eq!(text.matches("Hospital Name:").count(), 5);
        assert!(text.contains("Hospital 5"));
        assert!(!text.contains("Hospital 6"));
        assert!(text.ends_with("\n... and 2 more hospitals.\n"));
    }
}
