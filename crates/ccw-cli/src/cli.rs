//! CLI argument definitions for `ccw-export`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "ccw-export",
    version,
    about = "Export CCW claims as FHIR ExplanationOfBenefit resources",
    long_about = "Transform Chronic Conditions Warehouse claim records into FHIR\n\
                  ExplanationOfBenefit resources.\n\n\
                  Reads claim aggregates as a JSON array or JSON lines and writes\n\
                  one resource per line."
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Transform a claim file and write the resources.
    Export(ExportArgs),

    /// List claim types and whether they can be exported.
    ClaimTypes,
}

#[derive(Parser)]
pub struct ExportArgs {
    /// Claim file (.json array or .jsonl lines).
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Resource output file (default: <INPUT> with a .eob.jsonl extension).
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Worker threads (default: one per core).
    #[arg(
        short = 'j',
        long = "jobs",
        value_name = "N",
        value_parser = clap::value_parser!(u16).range(1..)
    )]
    pub jobs: Option<u16>,

    /// Treat every unmapped code as a claim failure.
    ///
    /// By default an unmapped descriptive code (facility type, discharge
    /// status and the like) is dropped with a warning. Identifier codes are
    /// always fatal.
    #[arg(long = "strict")]
    pub strict: bool,

    /// Stop at the first failed claim and write no resources.
    #[arg(long = "fail-fast")]
    pub fail_fast: bool,

    /// Only export claims of these types.
    #[arg(long = "claim-type", value_enum, value_delimiter = ',')]
    pub claim_types: Vec<ClaimTypeArg>,

    /// Only export claims of this beneficiary.
    #[arg(long = "beneficiary", value_name = "ID")]
    pub beneficiary: Option<String>,

    /// Write a CSV of failed claims and dropped codes.
    #[arg(long = "report", value_name = "FILE")]
    pub report: Option<PathBuf>,

    /// Hide the progress bar.
    #[arg(long = "no-progress")]
    pub no_progress: bool,
}

/// Claim types selectable on the command line.
#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ClaimTypeArg {
    Hospice,
    Outpatient,
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
