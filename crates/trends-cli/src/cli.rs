//! CLI argument definitions for the trends ETL.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "trends-etl",
    version,
    about = "Retail trends ETL - Load transaction data into a star schema",
    long_about = "One-shot extract-transform-load for retail transaction data.\n\n\
                  Reads a transactions CSV, decomposes it into customer and item\n\
                  dimensions plus a purchase fact table, and recreates and loads\n\
                  the target MySQL schema."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

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
    /// Run the one-shot extract-transform-load.
    Load(LoadArgs),

    /// List the target star-schema tables.
    Tables,
}

#[derive(Parser)]
pub struct LoadArgs {
    /// Path to the transactions CSV file.
    #[arg(value_name = "CSV", default_value = "data/shopping_trends.csv")]
    pub input: PathBuf,

    /// Normalize and decompose without touching the database.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
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
