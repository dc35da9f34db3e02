use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info_span, warn};

use hospital_model::PipelineConfig;
use hospital_output::{DigestSummary, Inspection, inspect_workbook, write_digest};

use crate::cli::{InspectArgs, ProcessArgs, ReportArgs};
use hospital_cli::pipeline::{PipelineInput, ProcessResult, run_pipeline};

/// Suffix appended to the input stem for the default workbook name.
const CLEANED_SUFFIX: &str = "_Cleaned.xlsx";
const DEFAULT_REPORT_NAME: &str = "results.txt";

pub fn run_process(args: &ProcessArgs) -> Result<ProcessResult> {
    let span = info_span!("process", input = %args.input.display());
    let _guard = span.enter();

    let config = load_config(args.config.as_deref())?
        .with_range_overrides(args.range_a, args.range_b)
        .context("apply line range overrides")?;
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&args.input));

    run_pipeline(&PipelineInput {
        input: &args.input,
        output: &output,
        config: &config,
        dry_run: args.dry_run,
    })
}

/// Result of the `report` command.
#[derive(Debug)]
pub struct ReportResult {
    pub output: PathBuf,
    pub summary: DigestSummary,
}

pub fn run_report(args: &ReportArgs) -> Result<ReportResult> {
    let span = info_span!("report", workbook = %args.workbook.display());
    let _guard = span.enter();

    let mut options = load_config(args.config.as_deref())?.report;
    if let Some(limit) = args.limit {
        options.limit = limit;
    }
    if let Some(scheme) = &args.scheme {
        options.scheme.clone_from(scheme);
    }
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| sibling_path(&args.workbook, DEFAULT_REPORT_NAME));

    let summary = write_digest(&args.workbook, &output, &options)
        .with_context(|| format!("write digest for {}", args.workbook.display()))?;
    Ok(ReportResult { output, summary })
}

/// Inspects each workbook in turn; one failure does not stop the others.
pub fn run_inspect(args: &InspectArgs) -> Vec<(PathBuf, Result<Inspection>)> {
    args.workbooks
        .iter()
        .map(|path| {
            let result = inspect_workbook(path)
                .with_context(|| format!("inspect {}", path.display()));
            if let Err(error) = &result {
                warn!(path = %path.display(), "inspection failed: {error:#}");
            }
            (path.clone(), result)
        })
        .collect()
}

fn load_config(path: Option<&Path>) -> Result<PipelineConfig> {
    match path {
        Some(path) => {
            PipelineConfig::load(path).with_context(|| format!("load config {}", path.display()))
        }
        None => Ok(PipelineConfig::default()),
    }
}

/// `<dir>/<stem>_Cleaned.xlsx` for an input at `<dir>/<stem>.<ext>`.
fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "hospitals".to_string());
    sibling_path(input, &format!("{stem}{CLEANED_SUFFIX}"))
}

fn sibling_path(path: &Path, file_name: &str) -> PathBuf {
    path.parent()
        .map_or_else(|| PathBuf::from(file_name), |dir| dir.join(file_name))
}
