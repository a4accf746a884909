//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

pub mod commands;
pub mod output;

pub use commands::Commands;
pub use output::OutputFormat;

/// arec - rank catalog assessments against hiring queries
#[derive(Parser, Debug)]
#[command(name = "arec", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Machine-readable JSON output on stdout (errors included)
    #[arg(long, global = true)]
    pub robot: bool,

    /// Output format
    #[arg(long, value_enum, global = true)]
    pub format: Option<FormatArg>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable logging
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Explicit config file (replaces global and project config)
    #[arg(long, global = true, env = "AREC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Catalog JSON file to use instead of the built-in catalog
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatArg {
    Human,
    Json,
    Jsonl,
    Plain,
}

impl Cli {
    /// `--robot` wins over `--format`.
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        if self.robot {
            return OutputFormat::Json;
        }
        match self.format {
            None | Some(FormatArg::Human) => OutputFormat::Human,
            Some(FormatArg::Json) => OutputFormat::Json,
            Some(FormatArg::Jsonl) => OutputFormat::Jsonl,
            Some(FormatArg::Plain) => OutputFormat::Plain,
        }
    }
}
