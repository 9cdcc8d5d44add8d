//! CLI command definitions and argument parsing.

use clap::Parser;
use std::path::PathBuf;

/// doxa - verify an argument map and render it with computed credences.
#[derive(Debug, Parser)]
#[command(name = "doxa")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Input JSON document (reads stdin when omitted)
    pub input: Option<PathBuf>,

    /// HTML output path (defaults to "<input>_verified.html")
    pub output: Option<PathBuf>,

    /// Run the checks only, skip HTML rendering
    #[arg(long)]
    pub verify_only: bool,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Configuration file path (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Full report (default)
    Text,
    /// JSON format
    Json,
    /// Quiet format (errors only)
    Quiet,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Text => crate::config::OutputFormat::Text,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}
