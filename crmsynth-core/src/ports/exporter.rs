// crmsynth-core/src/ports/exporter.rs

// What the application needs from an export target, without knowing the
// file format behind it.

use crate::domain::model::Dataset;
use crate::error::CrmSynthError;
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// One file per table.
    Csv,
    /// A single document holding the three tables.
    Json,
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Csv => write!(f, "csv"),
            ExportFormat::Json => write!(f, "json"),
        }
    }
}

pub trait DatasetExporter: Send + Sync {
    fn format(&self) -> ExportFormat;

    /// Writes the customer, deal and feedback tables under `out_dir` and
    /// returns the files it produced.
    fn export(&self, dataset: &Dataset, out_dir: &Path) -> Result<Vec<PathBuf>, CrmSynthError>;
}
