// crmsynth/src/commands/recommend.rs
//
// USE CASE: Print prioritized recommendations.

use crate::cli::GenerationArgs;
use crmsynth_core::application::Dashboard;
use crmsynth_core::domain::analytics::{Priority, Recommendation};

pub fn execute(generation: GenerationArgs, json: bool) -> anyhow::Result<()> {
    let dataset = super::build_dataset(&generation)?;
    let dashboard = Dashboard::build(&dataset);

    if json {
        println!("{}", serde_json::to_string_pretty(&dashboard.recommendations)?);
        return Ok(());
    }

    if dashboard.recommendations.is_empty() {
        println!("✅ Nothing to flag.");
        return Ok(());
    }

    println!("\n💡 {} recommendations", dashboard.recommendations.len());
    for rec in &dashboard.recommendations {
        println!("{}", format_line(rec));
    }
    Ok(())
}

fn marker(priority: Priority) -> &'static str {
    match priority {
        Priority::High => "🔴",
        Priority::Medium => "🟠",
        Priority::Low => "🟢",
    }
}

pub fn format_line(rec: &Recommendation) -> String {
    format!(
        "{} [{}] {}: {}\n      ➜ {} ({})",
        marker(rec.priority()),
        rec.priority(),
        rec.category(),
        rec.headline(),
        rec.next_step(),
        rec.context()
    )
}
