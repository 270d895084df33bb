// crmsynth-core/src/infrastructure/exporters/json.rs

use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

use crate::domain::generation::GenerationConfig;
use crate::domain::model::{CustomerRow, Dataset, DealRow, FeedbackRow};
use crate::error::CrmSynthError;
use crate::infrastructure::error::InfrastructureError;
use crate::infrastructure::fs::{atomic_write, ensure_dir};
use crate::ports::{DatasetExporter, ExportFormat};

pub const DATASET_FILE: &str = "crm_dataset.json";

#[derive(Serialize)]
struct DatasetDocument<'a> {
    config: &'a GenerationConfig,
    customers: Vec<CustomerRow>,
    deals: Vec<DealRow>,
    feedback: Vec<FeedbackRow>,
}

/// Writes one pretty-printed document holding the config and all three tables.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonExporter;

impl JsonExporter {
    pub fn new() -> Self {
        Self
    }

    pub fn to_json(dataset: &Dataset) -> Result<String, InfrastructureError> {
        let document = DatasetDocument {
            config: dataset.config(),
            customers: dataset.customer_rows(),
            deals: dataset.deal_rows(),
            feedback: dataset.feedback_rows(),
        };
        Ok(serde_json::to_string_pretty(&document)?)
    }
}

impl DatasetExporter for JsonExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Json
    }

    #[instrument(skip_all, fields(out_dir = %out_dir.display()))]
    fn export(&self, dataset: &Dataset, out_dir: &Path) -> Result<Vec<PathBuf>, CrmSynthError> {
        ensure_dir(out_dir)?;

        let path = out_dir.join(DATASET_FILE);
        atomic_write(&path, Self::to_json(dataset)?)?;
        debug!(file = %path.display(), "JSON dataset written");

        Ok(vec![path])
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::model::dataset::fixtures::*;
    use crate::domain::model::{DealStage, Region, Segment};
    use anyhow::Result;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_export_writes_single_document() -> Result<()> {
        let dataset = Dataset::from_parts(
            GenerationConfig::default(),
            vec![customer("CUST_00001", Region::Apac, Segment::Enterprise, 0.8)],
            vec![deal("DEAL_CUST_00001_1", "CUST_00001", DealStage::Qualification, 5000.0)],
            vec![feedback("FB_CUST_00001_1", "CUST_00001", -0.45, false)],
        )?;

        let dir = tempdir()?;
        let files = JsonExporter::new().export(&dataset, dir.path())?;
        assert_eq!(files, vec![dir.path().join(DATASET_FILE)]);

        let doc: serde_json::Value = serde_json::from_str(&fs::read_to_string(&files[0])?)?;
        assert_eq!(doc["customers"][0]["customer_id"], "CUST_00001");
        assert_eq!(doc["customers"][0]["region"], "APAC");
        assert!(doc["deals"][0]["close_date"].is_null());
        assert_eq!(doc["feedback"][0]["sentiment_label"], "Negative");
        assert_eq!(doc["feedback"][0]["timestamp"], "2025-07-01");
        assert_eq!(doc["config"]["seed"], 42);
        Ok(())
    }
}
