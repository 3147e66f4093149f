//! CLI argument definitions for the contact normalizer.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "contact-normalizer",
    version,
    about = "Convert a contact CSV export into normalized JSON",
    long_about = "Convert a contact CSV export into normalized JSON.\n\n\
                  Rows sharing an external identifier are merged, email and phone\n\
                  columns are validated, and group tags are split, deduplicated and sorted."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
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

    /// Allow names, emails and phone numbers to appear in trace logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert a contact export to normalized JSON.
    Convert(ConvertArgs),

    /// Show how each column of an export is interpreted.
    Columns(ColumnsArgs),
}

#[derive(Parser)]
pub struct ConvertArgs {
    /// Path to the contact CSV export.
    #[arg(value_name = "INPUT", default_value = "input.csv")]
    pub input: PathBuf,

    /// Path of the JSON file to write.
    #[arg(short = 'o', long = "output", value_name = "PATH", default_value = "output.json")]
    pub output: PathBuf,

    /// Field delimiter of the export (single ASCII character).
    #[arg(long = "delimiter", default_value_t = ',')]
    pub delimiter: char,

    /// Also validate the unsplit value of address cells containing '/'.
    ///
    /// Older exports emitted the whole cell as an extra address whenever it
    /// validated on its own. By default only the '/'-separated parts are used.
    #[arg(long = "legacy-slash-split")]
    pub legacy_slash_split: bool,

    /// Process and summarize without writing the output file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct ColumnsArgs {
    /// Path to the contact CSV export.
    #[arg(value_name = "INPUT", default_value = "input.csv")]
    pub input: PathBuf,

    /// Field delimiter of the export (single ASCII character).
    #[arg(long = "delimiter", default_value_t = ',')]
    pub delimiter: char,
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
