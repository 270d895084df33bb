// crmsynth/src/commands/report.rs
//
// USE CASE: Render the markdown insights report.

use anyhow::Context;
use std::path::PathBuf;

use crate::cli::GenerationArgs;
use crmsynth_core::application::{Dashboard, write_report};
use crmsynth_core::infrastructure::render::JinjaRenderer;

pub fn execute(generation: GenerationArgs, out: PathBuf) -> anyhow::Result<()> {
    let dataset = super::build_dataset(&generation)?;
    let dashboard = Dashboard::build(&dataset);

    println!("📝 Rendering report...");
    let renderer = JinjaRenderer::new();
    write_report(&dashboard, &renderer, &out)
        .with_context(|| format!("Failed to write report to {}", out.display()))?;

    println!("✨ Report written to {}", out.display());
    Ok(())
}
