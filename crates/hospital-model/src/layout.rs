//! Row layout descriptors for the raw directory export.
//!
//! The export is two batches concatenated into one file, and each batch has
//! its own column order. A [`RowLayout`] names one batch: the lines it covers
//! and which column holds each field. Line numbers are 1-indexed and
//! inclusive, matching what an editor shows for the source file; line 1 is
//! the file header and never belongs to a layout.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Inclusive, 1-indexed span of input lines. `last = None` runs to the end
/// of the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineRange {
    pub first: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last: Option<usize>,
}

impl LineRange {
    pub const fn new(first: usize, last: Option<usize>) -> Self {
        Self { first, last }
    }

    /// True when both ranges share at least one line.
    pub fn overlaps(&self, other: &LineRange) -> bool {
        let self_reaches = other.last.is_none_or(|last| self.first <= last);
        let other_reaches = self.last.is_none_or(|last| other.first <= last);
        self_reaches && other_reaches
    }

    /// Zero-based slice bounds for a file of `line_count` lines, clamped to
    /// the file. Returns an empty span when the range starts past the end.
    pub fn slice_bounds(&self, line_count: usize) -> (usize, usize) {
        let start = self.first.saturating_sub(1).min(line_count);
        let end = self.last.map_or(line_count, |last| last.min(line_count));
        (start, end.max(start))
    }
}

impl fmt::Display for LineRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.last {
            Some(last) => write!(f, "{}-{}", self.first, last),
            None => write!(f, "{}-", self.first),
        }
    }
}

impl FromStr for LineRange {
    type Err = ConfigError;

    /// Parses `START-END`, `START-` (to end of file), or a single `LINE`.
    fn from_str(value: &str) -> Result<Self> {
        let invalid = |reason: &str| ConfigError::InvalidRange {
            value: value.to_string(),
            reason: reason.to_string(),
        };
        let parse_line = |text: &str| -> Result<usize> {
            let line: usize = text
                .trim()
                .parse()
                .map_err(|_| invalid("line numbers must be positive integers"))?;
            if line == 0 {
                return Err(invalid("line numbers start at 1"));
            }
            Ok(line)
        };

        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(invalid("empty range"));
        }
        let range = match trimmed.split_once('-') {
            Some((first, last)) if last.trim().is_empty() => Self::new(parse_line(first)?, None),
            Some((first, last)) => Self::new(parse_line(first)?, Some(parse_line(last)?)),
            None => {
                let line = parse_line(trimmed)?;
                Self::new(line, Some(line))
            }
        };
        if range.last.is_some_and(|last| last < range.first) {
            return Err(invalid("end precedes start"));
        }
        Ok(range)
    }
}

/// Column positions for one region of the export.
///
/// Column indices are zero-based; column 0 is the export's serial number and
/// is not read. Rows with fewer than `min_columns` cells are dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowLayout {
    pub name: String,
    pub lines: LineRange,
    pub min_columns: usize,
    pub name_column: usize,
    /// `None` when the batch has no city column.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city_column: Option<usize>,
    pub district_column: usize,
    pub state_column: usize,
    pub contact_column: usize,
    pub email_column: usize,
    /// Every column from here to the end of the row is a specialty.
    pub specialties_from: usize,
}

impl RowLayout {
    /// First batch: `S.No,Hospital Name,District,State,Contact,Email,Specialties`.
    pub fn range_a() -> Self {
        Self {
            name: "range-a".to_string(),
            lines: LineRange::new(2, Some(362)),
            min_columns: 7,
            name_column: 1,
            city_column: None,
            district_column: 2,
            state_column: 3,
            contact_column: 4,
            email_column: 5,
            specialties_from: 6,
        }
    }

    /// Second batch: `S.No,Hospital Name,City,District,State,Contact,Email,Specialties`.
    ///
    /// Line 363 holds this batch's own header and is skipped.
    pub fn range_b() -> Self {
        Self {
            name: "range-b".to_string(),
            lines: LineRange::new(364, None),
            min_columns: 8,
            name_column: 1,
            city_column: Some(2),
            district_column: 3,
            state_column: 4,
            contact_column: 5,
            email_column: 6,
            specialties_from: 7,
        }
    }

    /// Replaces the covered line range.
    #[must_use]
    pub fn with_lines(mut self, lines: LineRange) -> Self {
        self.lines = lines;
        self
    }

    fn columns(&self) -> impl Iterator<Item = (&'static str, usize)> + '_ {
        [
            ("name_column", Some(self.name_column)),
            ("city_column", self.city_column),
            ("district_column", Some(self.district_column)),
            ("state_column", Some(self.state_column)),
            ("contact_column", Some(self.contact_column)),
            ("email_column", Some(self.email_column)),
            ("specialties_from", Some(self.specialties_from)),
        ]
        .into_iter()
        .filter_map(|(label, column)| column.map(|index| (label, index)))
    }

    /// Checks that the layout can be applied to any row it accepts.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::layout(&self.name, "name must not be empty"));
        }
        if self.lines.first < 2 {
            return Err(ConfigError::layout(
                &self.name,
                "line 1 is the file header; ranges start at line 2 or later",
            ));
        }
        if self.lines.last.is_some_and(|last| last < self.lines.first) {
            return Err(ConfigError::layout(&self.name, "end line precedes start line"));
        }
        if self.min_columns == 0 {
            return Err(ConfigError::layout(&self.name, "min_columns must be positive"));
        }
        for (label, index) in self.columns() {
            if index >= self.min_columns {
                return Err(ConfigError::layout(
                    &self.name,
                    format!(
                        "{label} = {index} is outside the guaranteed {} columns",
                        self.min_columns
                    ),
                ));
            }
        }
        Ok(())
    }
}

/// Layouts for the known two-batch export.
pub fn default_layouts() -> Vec<RowLayout> {
    vec![RowLayout::range_a(), RowLayout::range_b()]
}

/// Validates each layout and rejects overlapping line ranges.
pub fn validate_layouts(layouts: &[RowLayout]) -> Result<()> {
    if layouts.is_empty() {
        return Err(ConfigError::NoLayouts);
    }
    for layout in layouts {
        layout.validate()?;
    }
    for (idx, first) in layouts.iter().enumerate() {
        for second in &layouts[idx + 1..] {
            if first.lines.overlaps(&second.lines) {
                return Err(ConfigError::OverlappingLayouts {
                    first: first.name.clone(),
                    second: second.name.clone(),
                });
            }
        }
    }
    Ok(())
}
