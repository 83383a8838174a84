//! CLI argument definitions.

use clap::Parser;
use std::path::PathBuf;

/// FNOL extraction, validation & routing CLI.
#[derive(Debug, Parser)]
#[command(name = "fnol")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the FNOL document (PDF or plain text)
    pub path: PathBuf,

    /// Path to a JSONL file with expected values (one JSON object per line)
    #[arg(long)]
    pub expected: Option<PathBuf>,

    /// Path to save the output JSON file
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Skip the external reasoning call
    #[arg(long)]
    pub no_reasoning: bool,

    /// Enable verbose diagnostic logging
    #[arg(long)]
    pub debug: bool,
}
