use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::output::OutputFormat;

#[derive(Debug, Parser)]
#[command(name = "buildintel", version, about = "Project intelligence cards from crawl and API data")]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity to debug
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Explicit log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fetch and normalize an intelligence card for a project
    Analyze(AnalyzeArgs),
    /// Normalize a raw backend payload from a local file
    Normalize(NormalizeArgs),
    /// Check that the analysis backend is reachable
    Health(HealthArgs),
}

#[derive(Debug, clap::Args)]
pub struct AnalyzeArgs {
    /// Project name to analyze
    pub project: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Write the card to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override the backend base URL (BUILDINTEL_API_URL)
    #[arg(long)]
    pub api_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,
}

#[derive(Debug, clap::Args)]
pub struct NormalizeArgs {
    /// Path to a JSON file holding a raw backend response
    #[arg(short, long)]
    pub file: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Write the card to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, clap::Args)]
pub struct HealthArgs {
    /// Override the backend base URL (BUILDINTEL_API_URL)
    #[arg(long)]
    pub api_url: Option<String>,
}
