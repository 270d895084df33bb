// crmsynth/src/commands/dashboard.rs
//
// USE CASE: Print the KPI dashboard (table or JSON payload).

use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};

use crate::cli::GenerationArgs;
use crmsynth_core::application::Dashboard;
use crmsynth_core::domain::model::ChurnTier;
use crmsynth_core::domain::analytics::recommendation::format_money;

pub fn execute(generation: GenerationArgs, json: bool) -> anyhow::Result<()> {
    let dataset = super::build_dataset(&generation)?;
    let dashboard = Dashboard::build(&dataset);

    if json {
        println!("{}", dashboard.to_json()?);
        return Ok(());
    }

    println!("\n📊 CRM Dashboard");
    println!("{}", kpi_table(&dashboard));
    println!("{}", region_table(&dashboard));
    println!("{}", churn_table(&dashboard));
    Ok(())
}

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

pub fn kpi_table(dashboard: &Dashboard) -> Table {
    let kpis = &dashboard.metrics.kpis;
    let mut table = new_table(vec!["KPI", "Value"]);

    table.add_row(vec!["Customers".to_string(), kpis.total_customers.to_string()]);
    table.add_row(vec!["Deals".to_string(), kpis.total_deals.to_string()]);
    table.add_row(vec!["Feedback".to_string(), kpis.total_feedback.to_string()]);
    table.add_row(vec!["High churn risk".to_string(), format!("{:.1}%", kpis.churn_percent)]);
    table.add_row(vec!["Avg sentiment".to_string(), format!("{:+.3}", kpis.avg_sentiment)]);
    table.add_row(vec!["Resolution rate".to_string(), format!("{:.1}%", kpis.resolution_rate)]);
    table.add_row(vec!["Win rate".to_string(), format!("{:.1}%", kpis.win_rate)]);
    table.add_row(vec![
        "Feedback resolved".to_string(),
        format!("{:.1}%", kpis.feedback_resolution_rate),
    ]);
    table.add_row(vec!["Open pipeline".to_string(), format_money(kpis.total_pipeline)]);
    table.add_row(vec!["Avg deal size".to_string(), format_money(kpis.avg_deal_size)]);
    table.add_row(vec![
        "Avg response time".to_string(),
        format!("{:.1}h", kpis.avg_response_hours),
    ]);
    table
}

pub fn region_table(dashboard: &Dashboard) -> Table {
    let mut table = new_table(vec!["Region", "Customers", "Avg sentiment", "High risk", "Avg response"]);
    for group in &dashboard.metrics.region_breakdown {
        let sentiment = match dashboard.metrics.sentiment_by_region.get(&group.group) {
            Some(score) => format!("{:+.3}", score),
            None => "n/a".to_string(),
        };
        table.add_row(vec![
            group.group.clone(),
            group.customers.to_string(),
            sentiment,
            group.high_risk_customers.to_string(),
            format!("{:.1}h", group.avg_response_hours),
        ]);
    }
    table
}

pub fn churn_table(dashboard: &Dashboard) -> Table {
    let dist = &dashboard.metrics.churn_risk_distribution;
    let mut table = new_table(vec!["Churn tier", "Customers"]);
    for tier in ChurnTier::ALL {
        table.add_row(vec![tier.to_string(), dist.count(tier).to_string()]);
    }
    table
}
