// crmsynth-core/src/infrastructure/exporters/csv.rs

use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

use crate::domain::model::rows::{CUSTOMER_COLUMNS, DEAL_COLUMNS, FEEDBACK_COLUMNS};
use crate::domain::model::Dataset;
use crate::error::CrmSynthError;
use crate::infrastructure::error::InfrastructureError;
use crate::infrastructure::fs::{atomic_write, ensure_dir};
use crate::ports::{DatasetExporter, ExportFormat};

pub const CUSTOMERS_FILE: &str = "customers.csv";
pub const DEALS_FILE: &str = "deals.csv";
pub const FEEDBACK_FILE: &str = "feedback.csv";

/// Writes `customers.csv`, `deals.csv` and `feedback.csv`.
#[derive(Debug, Default, Clone, Copy)]
pub struct CsvExporter;

impl CsvExporter {
    pub fn new() -> Self {
        Self
    }

    /// Header line is written even when there are no rows.
    fn encode<R: Serialize>(columns: &[&str], rows: &[R]) -> Result<Vec<u8>, InfrastructureError> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(Vec::new());

        writer.write_record(columns)?;
        for row in rows {
            writer.serialize(row)?;
        }

        writer
            .into_inner()
            .map_err(|e| InfrastructureError::Io(e.into_error()))
    }

    fn write_table<R: Serialize>(
        out_dir: &Path,
        file_name: &str,
        columns: &[&str],
        rows: &[R],
    ) -> Result<PathBuf, InfrastructureError> {
        let path = out_dir.join(file_name);
        atomic_write(&path, Self::encode(columns, rows)?)?;
        debug!(file = %path.display(), rows = rows.len(), "CSV table written");
        Ok(path)
    }
}

impl DatasetExporter for CsvExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Csv
    }

    #[instrument(skip_all, fields(out_dir = %out_dir.display()))]
    fn export(&self, dataset: &Dataset, out_dir: &Path) -> Result<Vec<PathBuf>, CrmSynthError> {
        ensure_dir(out_dir)?;

        Ok(vec![
            Self::write_table(out_dir, CUSTOMERS_FILE, &CUSTOMER_COLUMNS, &dataset.customer_rows())?,
            Self::write_table(out_dir, DEALS_FILE, &DEAL_COLUMNS, &dataset.deal_rows())?,
            Self::write_table(
                out_dir,
                FEEDBACK_FILE,
                &FEEDBACK_COLUMNS,
                &dataset.feedback_rows(),
            )?,
        ])
    }
}
