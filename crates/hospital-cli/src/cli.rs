//! CLI argument definitions for the hospital directory cleaner.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use hospital_model::LineRange;

#[derive(Parser)]
#[command(
    name = "hospital-cleaner",
    version,
    about = "Clean a raw hospital directory export into a spreadsheet",
    long_about = "Clean a raw hospital directory export into a spreadsheet.\n\n\
                  Splits the two-batch text export by row layout, normalizes every field,\n\
                  drops duplicate hospitals, and writes a sorted Hospitals workbook."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Include hospital names and contacts in trace-level logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Clean a raw export and write the Hospitals workbook.
    Process(ProcessArgs),

    /// Write a text digest of a cleaned workbook.
    Report(ReportArgs),

    /// Show the columns and first row of one or more workbooks.
    Inspect(InspectArgs),
}

#[derive(Parser)]
pub struct ProcessArgs {
    /// Raw comma-separated export.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Workbook to write (default: <INPUT stem>_Cleaned.xlsx next to INPUT).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// TOML file with row layouts and report settings.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Lines covered by the first layout, as START-END or START-.
    #[arg(long = "range-a", value_name = "LINES")]
    pub range_a: Option<LineRange>,

    /// Lines covered by the second layout, as START-END or START-.
    #[arg(long = "range-b", value_name = "LINES")]
    pub range_b: Option<LineRange>,

    /// Run every stage and print the summary without writing the workbook.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct ReportArgs {
    /// Cleaned workbook produced by `process`.
    #[arg(value_name = "WORKBOOK")]
    pub workbook: PathBuf,

    /// Text file to write (default: results.txt next to WORKBOOK).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// TOML file with report settings.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Number of hospitals listed in full.
    #[arg(long = "limit", value_name = "N")]
    pub limit: Option<usize>,

    /// Insurance scheme named in the digest.
    #[arg(long = "scheme", value_name = "NAME")]
    pub scheme: Option<String>,
}

#[derive(Parser)]
pub struct InspectArgs {
    /// Workbooks to inspect.
    #[arg(value_name = "WORKBOOK", required = true)]
    pub workbooks: Vec<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_process_with_ranges() {
        let cli = Cli::parse_from([
            "hospital-cleaner",
            "process",
            "CMCHIS.txt",
            "--range-a",
            "2-362",
            "--range-b",
            "364-",
            "--dry-run",
        ]);
        let Command::Process(args) = cli.command else {
            panic!("expected process command");
        };
        assert_eq!(args.range_a, Some(LineRange::new(2, Some(362))));
        assert_eq!(args.range_b, Some(LineRange::new(364, None)));
        assert!(args.dry_run);
    }

    #[test]
    fn test_parse_rejects_bad_range() {
        let result = Cli::try_parse_from(["hospital-cleaner", "process", "in.txt", "--range-a", "x"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_inspect_requires_workbook() {
        assert!(Cli::try_parse_from(["hospital-cleaner", "inspect"]).is_err());
    }
}
