//! Command-line interface definitions.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for the generated series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain textual representation
    Terminal,
    /// Structured JSON report
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "fibo")]
#[command(about = "Fibonacci series generator", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Exclusive upper bound for generated values
    #[arg(default_value = "10")]
    pub bound: u64,

    /// Output format
    #[arg(short, long, value_enum, default_value = "terminal")]
    pub format: OutputFormat,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Stream values as they are generated, space-separated on one line
    #[arg(long)]
    pub stream: bool,

    /// Increase verbosity level (can be repeated: -v, -vv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,
}
