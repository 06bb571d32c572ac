//! CLI argument definitions for colseq.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use colseq_cli::ListOperation;
use colseq_core::{DEFAULT_WAVES_PER_YEAR, WaveOrder};
use colseq_table::CaseMode;

#[derive(Parser)]
#[command(
    name = "colseq",
    version,
    about = "Numbered identifier ranges, spreadsheet columns, and wave arithmetic",
    long_about = "Work with families of numbered identifiers and column references.\n\n\
                  Compresses identifier ranges into patterns such as a_{1,5} and expands\n\
                  them again, converts spreadsheet column names, remaps column layouts,\n\
                  shifts wave identifiers, and compares lists."
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

    /// Include timestamps in log lines.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compress two identifiers into one range pattern.
    Compress {
        /// First identifier of the range.
        from: String,
        /// Last identifier of the range.
        to: String,
    },

    /// Expand a range pattern into every identifier.
    Expand {
        /// Pattern such as `q{1,3}_{1,2}`.
        pattern: String,
        /// Print a JSON array instead of one identifier per line.
        #[arg(long)]
        json: bool,
    },

    /// Convert zero-based positions to column names.
    ColumnName {
        /// Positions to convert.
        #[arg(required = true, allow_negative_numbers = true)]
        indices: Vec<i64>,
    },

    /// Convert column names to zero-based positions.
    ColumnIndex {
        /// Column names to convert (case-insensitive).
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Prepend columns to a name-to-column mapping.
    Remap(RemapArgs),

    /// Shift a wave identifier by a number of periods.
    Wave(WaveArgs),

    /// Compare newline-separated lists.
    List(ListArgs),
}

#[derive(Args)]
pub struct RemapArgs {
    /// JSON file holding an object of column name to column letter.
    #[arg(long, value_name = "FILE")]
    pub mapping: PathBuf,

    /// Column names to insert before all existing ones, in order.
    #[arg(long = "add", value_name = "NAME", required = true)]
    pub add: Vec<String>,

    /// Print JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct WaveArgs {
    /// Wave identifier, e.g. `09-2023`.
    pub wave: String,

    /// Number of periods to move (negative moves backward).
    #[arg(long, allow_negative_numbers = true)]
    pub step: i64,

    /// Two width markers around a separator, e.g. `{2}-{4}`.
    #[arg(long, default_value = "{2}-{4}")]
    pub pattern: String,

    /// Which field holds the wave counter.
    #[arg(long, value_enum, default_value = "wave-first")]
    pub order: WaveOrderArg,

    /// Number of waves in one year.
    #[arg(long = "waves-per-year", default_value_t = DEFAULT_WAVES_PER_YEAR)]
    pub waves_per_year: u32,
}

#[derive(Args)]
pub struct ListArgs {
    /// Operation to perform.
    #[arg(value_enum)]
    pub operation: ListOperationArg,

    /// File with one entry per line.
    #[arg(value_name = "LEFT")]
    pub left: PathBuf,

    /// Second file, for without, intersect, and union.
    #[arg(value_name = "RIGHT")]
    pub right: Option<PathBuf>,

    /// Case folding applied to both lists before comparing.
    #[arg(long = "case", value_enum, default_value = "as-is")]
    pub case: CaseArg,
}

/// CLI wave order choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum WaveOrderArg {
    WaveFirst,
    WaveLast,
}

impl From<WaveOrderArg> for WaveOrder {
    fn from(value: WaveOrderArg) -> Self {
        match value {
            WaveOrderArg::WaveFirst => WaveOrder::WaveFirst,
            WaveOrderArg::WaveLast => WaveOrder::WaveLast,
        }
    }
}

/// CLI list operation choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum ListOperationArg {
    Without,
    Intersect,
    Union,
    Unique,
    Duplicates,
}

impl From<ListOperationArg> for ListOperation {
    fn from(value: ListOperationArg) -> Self {
        match value {
            ListOperationArg::Without => ListOperation::Without,
            ListOperationArg::Intersect => ListOperation::Intersect,
            ListOperationArg::Union => ListOperation::Union,
            ListOperationArg::Unique => ListOperation::Unique,
            ListOperationArg::Duplicates => ListOperation::Duplicates,
        }
    }
}

/// CLI case folding choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum CaseArg {
    AsIs,
    Lower,
    Upper,
}

impl From<CaseArg> for CaseMode {
    fn from(value: CaseArg) -> Self {
        match value {
            CaseArg::AsIs => CaseMode::AsIs,
            CaseArg::Lower => CaseMode::Lower,
            CaseArg::Upper => CaseMode::Upper,
        }
    }
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
