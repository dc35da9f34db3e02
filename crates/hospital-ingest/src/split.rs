//! Layout-driven splitting of export lines into raw field tuples.

use csv::{ReaderBuilder, StringRecord};
use hospital_model::{LineRange, NOT_AVAILABLE, RawHospitalFields, RowLayout};
use tracing::{debug, info};

use crate::error::{IngestError, Result};

/// Separator placed between specialty columns when they are joined.
const SPECIALTY_SEPARATOR: &str = ", ";

/// Row counts for one layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutStats {
    pub layout: String,
    pub lines: LineRange,
    /// Rows with enough columns.
    pub accepted: usize,
    /// Non-blank rows dropped for having too few columns.
    pub skipped: usize,
}

/// Raw rows from every layout, in layout order, plus per-layout counts.
#[derive(Debug, Clone, Default)]
pub struct SplitOutcome {
    pub rows: Vec<RawHospitalFields>,
    pub stats: Vec<LayoutStats>,
}

impl SplitOutcome {
    pub fn accepted(&self) -> usize {
        self.stats.iter().map(|s| s.accepted).sum()
    }

    pub fn skipped(&self) -> usize {
        self.stats.iter().map(|s| s.skipped).sum()
    }
}

/// Splits export lines into raw field tuples.
///
/// Each layout parses its own slice of `lines` as comma-separated text with
/// standard double-quote quoting, so a quoted field may contain commas or
/// span lines. Ranges past the end of the file are clamped. Rows shorter
/// than the layout's `min_columns` are dropped and counted, blank lines are
/// ignored.
pub fn split_rows(lines: &[String], layouts: &[RowLayout]) -> Result<SplitOutcome> {
    let mut outcome = SplitOutcome::default();
    for layout in layouts {
        let (start, end) = layout.lines.slice_bounds(lines.len());
        let region = lines[start..end].join("\n");

        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(region.as_bytes());

        let mut stats = LayoutStats {
            layout: layout.name.clone(),
            lines: layout.lines,
            accepted: 0,
            skipped: 0,
        };
        for record in reader.records() {
            let record = record.map_err(|source| IngestError::Delimited {
                layout: layout.name.clone(),
                source,
            })?;
            match extract_fields(layout, &record) {
                Some(fields) => {
                    stats.accepted += 1;
                    outcome.rows.push(fields);
                }
                None => {
                    stats.skipped += 1;
                    let line = record
                        .position()
                        .map(|pos| start as u64 + pos.line());
                    debug!(
                        layout = %layout.name,
                        line,
                        columns = record.len(),
                        min_columns = layout.min_columns,
                        "dropping short row"
                    );
                }
            }
        }
        info!(
            layout = %stats.layout,
            lines = %stats.lines,
            accepted = stats.accepted,
            skipped = stats.skipped,
            "split layout"
        );
        outcome.stats.push(stats);
    }
    Ok(outcome)
}

/// Pulls the raw fields out of one parsed row.
///
/// Returns `None` when the row has fewer than `layout.min_columns` cells.
pub fn extract_fields(layout: &RowLayout, record: &StringRecord) -> Option<RawHospitalFields> {
    if record.len() < layout.min_columns {
        return None;
    }
    let cell = |index: usize| record.get(index).unwrap_or_default().to_string();
    let specialties = record
        .iter()
        .skip(layout.specialties_from)
        .collect::<Vec<_>>()
        .join(SPECIALTY_SEPARATOR);

    Some(RawHospitalFields {
        hospital_name: cell(layout.name_column),
        city: layout
            .city_column
            .map_or_else(|| NOT_AVAILABLE.to_string(), cell),
        district: cell(layout.district_column),
        state: cell(layout.state_column),
        contact: cell(layout.contact_column),
        email: cell(layout.email_column),
        specialties,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(text: &str) -> Vec<String> {
        text.lines().map(str::to_string).collect()
    }

    fn layouts(a_last: usize) -> Vec<RowLayout> {
        vec![
            RowLayout::range_a().with_lines(LineRange::new(2, Some(a_last))),
            RowLayout::range_b().with_lines(LineRange::new(a_last + 2, None)),
        ]
    }

    #[test]
    fn test_extract_range_a_defaults_city() {
        let record = StringRecord::from(vec![
            "1", "Apollo", "Chennai", "Tamil Nadu", "044 1234567", "a@b.com", "Cardio",
        ]);
        let fields = extract_fields(&RowLayout::range_a(), &record).unwrap();
        assert_eq!(fields.hospital_name, "Apollo");
        assert_eq!(fields.city, NOT_AVAILABLE);
        assert_eq!(fields.district, "Chennai");
        assert_eq!(fields.contact, "044 1234567");
        assert_eq!(fields.specialties, "Cardio");
    }

    #[test]
    fn test_extract_joins_trailing_specialties() {
        let record = StringRecord::from(vec![
            "7", "KMC", "Trichy", "Trichy", "Tamil Nadu", "98765", "k@m.com", "Ortho", "ENT",
            "Neuro",
        ]);
        let fields = extract_fields(&RowLayout::range_b(), &record).unwrap();
        assert_eq!(fields.city, "Trichy");
        assert_eq!(fields.email, "k@m.com");
        assert_eq!(fields.specialties, "Ortho, ENT, Neuro");
    }

    #[test]
    fn test_extract_rejects_short_rows() {
        let record = StringRecord::from(vec!["1", "Apollo", "Chennai", "TN", "1", "x"]);
        assert!(extract_fields(&RowLayout::range_a(), &record).is_none());
    }

    #[test]
    fn test_split_two_layouts() {
        let input = lines(
            "S.No,Hospital Name,District,State,Contact,Email,Specialties\n\
             1,Alpha,Salem,Tamil Nadu,9876543210,a@alpha.com,General\n\
             2,Beta,Erode,Tamil Nadu,9123456780,b@beta.com,Ortho\n\
             S.No,Hospital Name,City,District,State,Contact,Email,Specialties\n\
             1,Gamma,Hosur,Krishnagiri,Tamil Nadu,9988776655,g@gamma.com,ENT",
        );
        let outcome = split_rows(&input, &layouts(3)).unwrap();

        assert_eq!(outcome.rows.len(), 3);
        assert_eq!(outcome.rows[0].hospital_name, "Alpha");
        assert_eq!(outcome.rows[2].city, "Hosur");
        assert_eq!(outcome.accepted(), 3);
        assert_eq!(outcome.skipped(), 0);
        assert_eq!(outcome.stats[0].accepted, 2);
        assert_eq!(outcome.stats[1].accepted, 1);
    }

    #[test]
    fn test_split_honors_quoted_commas() {
        let input = lines(
            "header\n\
             1,\"Alpha, Unit 2\",Salem,Tamil Nadu,9876543210,a@alpha.com,\"Cardio, Neuro\"",
        );
        let outcome = split_rows(&input, &layouts(2)).unwrap();
        assert_eq!(outcome.rows.len(), 1);
        assert_eq!(outcome.rows[0].hospital_name, "Alpha, Unit 2");
        assert_eq!(outcome.rows[0].specialties, "Cardio, Neuro");
    }

    #[test]
    fn test_split_counts_short_rows_and_ignores_blank_lines() {
        let input = lines(
            "header\n\
             1,Alpha,Salem,Tamil Nadu,9876543210,a@alpha.com\n\
             \n\
             2,Beta,Erode,Tamil Nadu,9123456780,b@beta.com,Ortho",
        );
        let outcome = split_rows(&input, &layouts(4)).unwrap();
        assert_eq!(outcome.rows.len(), 1);
        assert_eq!(outcome.rows[0].hospital_name, "Beta");
        assert_eq!(outcome.stats[0].skipped, 1);
    }

    #[test]
    fn test_split_clamps_ranges_past_end() {
        let input = lines("header\n1,Alpha,Salem,Tamil Nadu,9876543210,a@alpha.com,General");
        let outcome = split_rows(&input, &layouts(362)).unwrap();
        assert_eq!(outcome.rows.len(), 1);
        assert_eq!(outcome.stats[1].accepted, 0);
        assert_eq!(outcome.stats[1].skipped, 0);
    }
}
