// crmsynth/src/commands/mod.rs

pub mod dashboard;
pub mod generate;
pub mod recommend;
pub mod report;

use anyhow::Context;
use std::path::Path;
use tracing::debug;

use crate::cli::GenerationArgs;
use crmsynth_core::application::DatasetAssembler;
use crmsynth_core::domain::generation::GenerationConfig;
use crmsynth_core::domain::model::Dataset;
use crmsynth_core::infrastructure::config::load_generation_config;

/// Defaults < config file < env < flags.
pub fn resolve_config(args: &GenerationArgs) -> anyhow::Result<GenerationConfig> {
    let mut config = load_generation_config(args.config.as_deref(), Path::new("."))
        .context("Failed to load generation config")?;
    args.apply(&mut config);
    debug!(?config, "Resolved generation config");
    Ok(config)
}

pub fn build_dataset(args: &GenerationArgs) -> anyhow::Result<Dataset> {
    let config = resolve_config(args)?;
    // stderr keeps stdout clean for --json payloads.
    eprintln!(
        "⚙️  Generating {} customers (seed {}, as of {})...",
        config.customer_count, config.seed, config.as_of
    );
    let dataset = DatasetAssembler::assemble(&config).context("Dataset generation failed")?;
    Ok(dataset)
}
