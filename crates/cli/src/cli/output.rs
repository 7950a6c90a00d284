use anyhow::Result;
use buildintel_core::ProjectAnalysis;
use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Yaml,
}

pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn format(&self, analysis: &ProjectAnalysis) -> Result<String> {
        match self.format {
            OutputFormat::Json => analysis.to_json_pretty(),
            OutputFormat::Yaml => analysis.to_yaml(),
        }
    }
}
