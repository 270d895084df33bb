// crmsynth/src/commands/generate.rs
//
// USE CASE: Generate a dataset and export it to disk.

use anyhow::Context;
use std::path::PathBuf;

use crate::cli::{GenerationArgs, OutputFormat};
use crmsynth_core::application::export_dataset;
use crmsynth_core::infrastructure::exporters::exporter_for;

pub fn execute(generation: GenerationArgs, format: OutputFormat, out_dir: PathBuf) -> anyhow::Result<()> {
    let dataset = super::build_dataset(&generation)?;

    let exporter = exporter_for(format.into());
    println!("📦 Exporting as {} to '{}'...", exporter.format(), out_dir.display());

    let summary = export_dataset(&dataset, exporter.as_ref(), &out_dir)
        .with_context(|| format!("Failed to export dataset to {}", out_dir.display()))?;

    println!(
        "   {} customers, {} deals, {} feedback entries",
        summary.customers, summary.deals, summary.feedback
    );
    for file in &summary.files {
        println!("   ➜ {}", file.display());
    }
    println!("✨ Dataset exported successfully!");
    Ok(())
}
