//! CLI argument definitions for the Triple-S transpiler.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "sss2sps",
    version,
    about = "Triple-S to SPSS Transpiler - Convert survey metadata to SPSS syntax",
    long_about = "Convert a Triple-S XML variable dictionary into an SPSS syntax file.\n\n\
                  The generated .sps program declares the fixed-width column layout,\n\
                  assigns variable and value labels, and saves a compressed .sav file."
)]
pub struct Cli {
    /// Path to the Triple-S XML variable dictionary.
    #[arg(value_name = "DICTIONARY")]
    pub dictionary: PathBuf,

    /// Raw fixed-width data file referenced by the FILE HANDLE statement.
    #[arg(value_name = "DATA_FILE")]
    pub data_file: String,

    /// Write the syntax to this path (default: next to the dictionary, .sps).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

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
