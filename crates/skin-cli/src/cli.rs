//! CLI argument definitions for the skin ontology tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "skin-ontology-tool",
    version,
    about = "Translate skin datasets to ICD-10 with granularity",
    long_about = "Standardize free-text dermatological labels to ICD-10 codes.\n\n\
                  Labels are matched exactly against the descriptions of a\n\
                  hierarchical ontology (JSON documents), and the matched code\n\
                  path is emitted at the requested granularity."
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

    /// Allow raw labels in trace-level logs (redacted by default).
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Translate an input CSV file to ICD-10 codes.
    Translate(TranslateArgs),

    /// Print the flattened ontology loaded from a data folder.
    Ontology(OntologyArgs),
}

#[derive(Parser)]
pub struct TranslateArgs {
    /// Path to the input CSV file (needs a `label_to_icd` column).
    #[arg(long = "input", value_name = "CSV")]
    pub input: PathBuf,

    /// Folder containing the ICD ontology JSON documents.
    ///
    /// Defaults to the SKIN_ONTOLOGY_DATA_DIR environment variable.
    #[arg(long = "data", value_name = "DIR")]
    pub data: Option<PathBuf>,

    /// Output folder (created when missing).
    #[arg(long = "output", value_name = "DIR")]
    pub output: PathBuf,

    /// Level of granularity for ICD codes (1: range, 2: category, 3: subcategory).
    ///
    /// Levels deeper than a code's hierarchy, zero and negative levels emit
    /// the full hierarchy.
    #[arg(long = "granularity", value_name = "LEVEL", allow_negative_numbers = true)]
    pub granularity: Option<i64>,

    /// Only process rows with missing or 'tbd' ICD values.
    #[arg(long = "only-unmatched")]
    pub only_unmatched: bool,

    /// Translate and report without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct OntologyArgs {
    /// Folder containing the ICD ontology JSON documents.
    ///
    /// Defaults to the SKIN_ONTOLOGY_DATA_DIR environment variable.
    #[arg(long = "data", value_name = "DIR")]
    pub data: Option<PathBuf>,

    /// Granularity used for the resolved code column.
    #[arg(long = "granularity", value_name = "LEVEL", allow_negative_numbers = true)]
    pub granularity: Option<i64>,
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
