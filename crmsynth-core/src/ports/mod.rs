// crmsynth-core/src/ports/mod.rs

pub mod exporter;

pub use exporter::{DatasetExporter, ExportFormat};
