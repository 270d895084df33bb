// crmsynth-core/src/infrastructure/exporters/mod.rs

pub mod csv;
pub mod json;

pub use self::csv::CsvExporter;
pub use self::json::JsonExporter;

use crate::ports::{DatasetExporter, ExportFormat};

/// Adapter for the requested output format.
pub fn exporter_for(format: ExportFormat) -> Box<dyn DatasetExporter> {
    match format {
        ExportFormat::Csv => Box::new(CsvExporter::new()),
        ExportFormat::Json => Box::new(JsonExporter::new()),
    }
}
