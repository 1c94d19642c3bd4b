pub mod report;

use crate::types::DocumentType;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Command-line arguments for reportcat
#[derive(Parser, Debug)]
#[command(name = "reportcat")]
#[command(about = "Structured field extraction from narrative medical reports")]
#[command(version)]
pub struct Cli {
    /// Path to the narrative text file ("-" reads stdin)
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Document type hint passed to the classifier
    #[arg(short, long, default_value = "general")]
    pub document_type: DocumentTypeArg,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Output format options
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format
    Text,
    /// JSON format
    #[cfg(feature = "json")]
    Json,
}

/// Document type hint for the classifier
#[derive(Debug, Clone, ValueEnum)]
pub enum DocumentTypeArg {
    /// Free-form diagnostic narrative
    General,
    /// Quality/performance report card
    ReportCard,
    /// Clinical lab panel document
    LabMetrics,
}

impl From<DocumentTypeArg> for DocumentType {
    fn from(arg: DocumentTypeArg) -> Self {
        match arg {
            DocumentTypeArg::General => DocumentType::General,
            DocumentTypeArg::ReportCard => DocumentType::ReportCard,
            DocumentTypeArg::LabMetrics => DocumentType::LabMetrics,
        }
    }
}
