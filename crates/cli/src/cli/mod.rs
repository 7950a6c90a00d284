pub mod commands;
pub mod output;

pub use commands::{AnalyzeArgs, CliArgs, Commands, HealthArgs, NormalizeArgs};
pub use output::{OutputFormat, OutputFormatter};
