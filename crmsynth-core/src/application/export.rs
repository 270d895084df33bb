// crmsynth-core/src/application/export.rs

use std::path::{Path, PathBuf};
use tracing::{info, instrument};

use crate::domain::model::Dataset;
use crate::error::CrmSynthError;
use crate::ports::{DatasetExporter, ExportFormat};

#[derive(Debug, Clone, PartialEq)]
pub struct ExportSummary {
    pub format: ExportFormat,
    pub files: Vec<PathBuf>,
    pub customers: usize,
    pub deals: usize,
    pub feedback: usize,
}

/// Hands the dataset to `exporter` and reports what was written.
#[instrument(skip(dataset, exporter), fields(format = %exporter.format()))]
pub fn export_dataset(
    dataset: &Dataset,
    exporter: &dyn DatasetExporter,
    out_dir: &Path,
) -> Result<ExportSummary, CrmSynthError> {
    let files = exporter.export(dataset, out_dir)?;
    info!(files = files.len(), out_dir = %out_dir.display(), "Dataset exported");

    Ok(ExportSummary {
        format: exporter.format(),
        files,
        customers: dataset.customers().len(),
        deals: dataset.deals().len(),
        feedback: dataset.feedback().len(),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::application::assembler::DatasetAssembler;
    use crate::domain::generation::GenerationConfig;
    use crate::infrastructure::exporters::exporter_for;
    use anyhow::Result;
    use tempfile::tempdir;

    #[test]
    fn test_export_summary_matches_dataset() -> Result<()> {
        let dataset = DatasetAssembler::assemble(&GenerationConfig {
            customer_count: 5,
            ..Default::default()
        })?;
        let dir = tempdir()?;

        let summary = export_dataset(&dataset, exporter_for(ExportFormat::Csv).as_ref(), dir.path())?;
        assert_eq!(summary.format, ExportFormat::Csv);
        assert_eq!(summary.files.len(), 3);
        assert_eq!(summary.customers, 5);
        assert_eq!(summary.deals, dataset.deals().len());
        assert!(summary.files.iter().all(|p| p.exists()));

        let summary = export_dataset(&dataset, exporter_for(ExportFormat::Json).as_ref(), dir.path())?;
        assert_eq!(summary.files.len(), 1);
        Ok(())
    }
}
