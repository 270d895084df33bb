// crmsynth-core/src/application/mod.rs

pub mod assembler;
pub mod dashboard;
pub mod export;
pub mod ports;
pub mod report;

// --- RE-EXPORTS (FACADE PATTERN) ---
// The CLI can `use crmsynth_core::application::{DatasetAssembler, Dashboard};`
// without knowing the file layout.

pub use assembler::DatasetAssembler;
pub use dashboard::Dashboard;
pub use export::{ExportSummary, export_dataset};
pub use report::{render_report, write_report};
