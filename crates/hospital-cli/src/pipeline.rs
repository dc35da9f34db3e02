//! Directory cleaning pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Ingest**: Read the export and split it by row layout
//! 2. **Clean**: Normalize every field into a record
//! 3. **Dedupe**: Drop later records sharing a (name, contact) key
//! 4. **Order**: Stable sort by state, district, city
//! 5. **Output**: Write the `Hospitals` workbook
//!
//! Each stage takes the output of the previous stage and returns typed results.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use tracing::{info, info_span, trace};

use hospital_clean::{DedupeOutcome, clean_records, dedupe_records, sort_records};
use hospital_ingest::{LayoutStats, read_source_lines, split_rows};
use hospital_model::{HospitalRecord, PipelineConfig, RawHospitalFields, RowLayout};
use hospital_output::write_directory;

use crate::logging::redact_value;

// ============================================================================
// Stage 1: Ingest
// ============================================================================

/// Result of the ingest stage.
#[derive(Debug)]
pub struct IngestResult {
    /// Number of lines in the export, header included.
    pub source_lines: usize,
    /// Raw rows from every layout, in layout order.
    pub rows: Vec<RawHospitalFields>,
    /// Accepted and skipped counts per layout.
    pub layouts: Vec<LayoutStats>,
}

/// Read the export and split it into raw rows.
///
/// An unreadable input aborts here, before anything is written.
pub fn ingest(input: &Path, layouts: &[RowLayout]) -> Result<IngestResult> {
    let span = info_span!("ingest", input = %input.display());
    let _guard = span.enter();

    let lines = read_source_lines(input)
        .with_context(|| format!("read export {}", input.display()))?;
    let outcome = split_rows(&lines, layouts)
        .with_context(|| format!("split export {}", input.display()))?;
    info!(
        lines = lines.len(),
        accepted = outcome.accepted(),
        skipped = outcome.skipped(),
        "ingest complete"
    );
    Ok(IngestResult {
        source_lines: lines.len(),
        rows: outcome.rows,
        layouts: outcome.stats,
    })
}

// ============================================================================
// Stage 2: Clean
// ============================================================================

/// Normalize raw rows into records.
pub fn clean(rows: &[RawHospitalFields]) -> Vec<HospitalRecord> {
    let span = info_span!("clean", rows = rows.len());
    let _guard = span.enter();

    let records = clean_records(rows);
    for record in &records {
        trace!(
            hospital = redact_value(&record.hospital_name),
            contact = redact_value(&record.contact),
            "cleaned record"
        );
    }
    info!(records = records.len(), "clean complete");
    records
}

// ============================================================================
// Stage 3-4: Dedupe and Order
// ============================================================================

/// Drop duplicate records, then sort the survivors for output.
pub fn dedupe_and_order(records: Vec<HospitalRecord>) -> DedupeOutcome {
    let span = info_span!("dedupe", records = records.len());
    let _guard = span.enter();

    let mut outcome = dedupe_records(records);
    sort_records(&mut outcome.records);
    info!(
        kept = outcome.records.len(),
        dropped = outcome.dropped,
        "dedupe complete"
    );
    outcome
}

// ============================================================================
// Stage 5: Output
// ============================================================================

/// Write records to the workbook at `path`, replacing any existing file.
pub fn output(path: &Path, records: &[HospitalRecord]) -> Result<()> {
    let span = info_span!("output", path = %path.display());
    let _guard = span.enter();

    write_directory(path, records).with_context(|| format!("write {}", path.display()))
}

// ============================================================================
// Full run
// ============================================================================

/// Inputs for one pipeline run. Paths and layouts are passed in; nothing is
/// read from globals.
#[derive(Debug)]
pub struct PipelineInput<'a> {
    pub input: &'a Path,
    pub output: &'a Path,
    pub config: &'a PipelineConfig,
    /// Run every stage except writing the workbook.
    pub dry_run: bool,
}

/// Outcome of a full run.
#[derive(Debug)]
pub struct ProcessResult {
    pub input: PathBuf,
    /// `None` for dry runs.
    pub output: Option<PathBuf>,
    pub source_lines: usize,
    pub layouts: Vec<LayoutStats>,
    /// Rows accepted by a layout and cleaned.
    pub cleaned: usize,
    /// Records dropped as duplicates.
    pub duplicates: usize,
    /// Records written (or that would be written on a dry run).
    pub records: Vec<HospitalRecord>,
    pub elapsed: Duration,
}

impl ProcessResult {
    pub fn skipped(&self) -> usize {
        self.layouts.iter().map(|stats| stats.skipped).sum()
    }
}

/// Run every stage in order.
pub fn run_pipeline(input: &PipelineInput<'_>) -> Result<ProcessResult> {
    let started = Instant::now();
    input.config.validate().context("validate layouts")?;

    let ingested = ingest(input.input, &input.config.layouts)?;
    let records = clean(&ingested.rows);
    let cleaned = records.len();
    let deduped = dedupe_and_order(records);

    let written = if input.dry_run {
        info!("dry run; skipping workbook output");
        None
    } else {
        output(input.output, &deduped.records)?;
        Some(input.output.to_path_buf())
    };

    Ok(ProcessResult {
        input: input.input.to_path_buf(),
        output: written,
        source_lines: ingested.source_lines,
        layouts: ingested.layouts,
        cleaned,
        duplicates: deduped.dropped,
        records: deduped.records,
        elapsed: started.elapsed(),
    })
}
