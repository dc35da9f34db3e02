//! Pipeline configuration.
//!
//! Loaded from an optional TOML file; any key left out falls back to the
//! settings for the known two-batch export:
//!
//! ```toml
//! [[layouts]]
//! name = "range-a"
//! lines = { first = 2, last = 362 }
//! min_columns = 7
//! name_column = 1
//! district_column = 2
//! state_column = 3
//! contact_column = 4
//! email_column = 5
//! specialties_from = 6
//!
//! [report]
//! scheme = "CMCHIS"
//! limit = 5
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::layout::{LineRange, RowLayout, default_layouts, validate_layouts};

/// Settings for the text digest written from a cleaned workbook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportOptions {
    /// Insurance scheme named in the digest heading.
    pub scheme: String,
    /// Number of records printed in full.
    pub limit: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            scheme: "CMCHIS".to_string(),
            limit: 5,
        }
    }
}

/// Everything the pipeline needs besides file paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub layouts: Vec<RowLayout>,
    pub report: ReportOptions,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            layouts: default_layouts(),
            report: ReportOptions::default(),
        }
    }
}

impl PipelineConfig {
    /// Reads and validates a TOML config file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Overrides the line ranges of the first and second layouts.
    ///
    /// Overrides naming a layout that is not configured are rejected.
    pub fn with_range_overrides(
        mut self,
        range_a: Option<LineRange>,
        range_b: Option<LineRange>,
    ) -> Result<Self> {
        for (idx, range) in [range_a, range_b].into_iter().enumerate() {
            let Some(range) = range else {
                continue;
            };
            let layout = self.layouts.get_mut(idx).ok_or_else(|| ConfigError::InvalidRange {
                value: range.to_string(),
                reason: format!("no layout #{} is configured", idx + 1),
            })?;
            layout.lines = range;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<()> {
        validate_layouts(&self.layouts)
    }
}
