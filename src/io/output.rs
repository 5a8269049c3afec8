use crate::core::ProjectConfig;
use crate::estimation::FpaCalculations;
use crate::formatting::FormattingConfig;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

pub use super::writers::{JsonWriter, MarkdownWriter, TerminalWriter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "json" => Some(Self::Json),
            "markdown" | "md" => Some(Self::Markdown),
            "terminal" => Some(Self::Terminal),
            _ => None,
        }
    }
}

/// Everything a report needs: which estimate, with which parameters, and
/// the calculated figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateReport {
    pub estimate_id: String,
    pub name: Option<String>,
    pub organization: Option<String>,
    pub generated_at: DateTime<Utc>,
    pub config: ProjectConfig,
    pub calculations: FpaCalculations,
}

impl EstimateReport {
    pub fn title(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.estimate_id)
    }
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &EstimateReport) -> anyhow::Result<()>;
}

pub fn create_writer<'w>(
    format: OutputFormat,
    writer: Box<dyn Write + 'w>,
    formatting: FormattingConfig,
) -> Box<dyn OutputWriter + 'w> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer, formatting)),
    }
}
