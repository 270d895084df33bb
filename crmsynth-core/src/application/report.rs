// crmsynth-core/src/application/report.rs

use std::path::Path;
use tracing::{info, instrument};

use crate::application::dashboard::Dashboard;
use crate::application::ports::TemplateEngine;
use crate::error::CrmSynthError;
use crate::infrastructure::fs::atomic_write;

pub const REPORT_TEMPLATE: &str = r#"# CRM Insights Report

Generated from seed {{ dataset.seed }} as of {{ dataset.as_of }}:
{{ dataset.customer_count }} customers, {{ dataset.deal_count }} deals, {{ dataset.feedback_count }} feedback entries.

## Key metrics

| Metric | Value |
|---|---|
| High churn risk | {{ metrics.kpis.churn_percent | percent }} |
| Average sentiment | {{ metrics.kpis.avg_sentiment | signed }} |
| Deal resolution rate | {{ metrics.kpis.resolution_rate | percent }} |
| Win rate | {{ metrics.kpis.win_rate | percent }} |
| Feedback resolution rate | {{ metrics.kpis.feedback_resolution_rate | percent }} |
| Open pipeline | {{ metrics.kpis.total_pipeline | money }} |
| Average deal size | {{ metrics.kpis.avg_deal_size | money }} |

## Sentiment by region
{% for region, score in metrics.sentiment_by_region | items %}
- {{ region }}: {{ score | signed }}
{%- else %}
- No feedback recorded.
{%- endfor %}

## Monthly sentiment
{% for month, score in metrics.sentiment_trend | items %}
- {{ month }}: {{ score | signed }}
{%- else %}
- No feedback recorded.
{%- endfor %}

## Churn risk
{% for tier in ["Low", "Medium", "High"] %}
- {{ tier }}: {{ metrics.churn_risk_distribution[tier] }}
{%- endfor %}
{% if metrics.pain_points.top_pain_points %}
## Top pain points
{% for pain in metrics.pain_points.top_pain_points %}
- {{ pain.pain_point }} ({{ pain.frequency }})
{%- endfor %}
{% endif %}
## Recommendations
{% for rec in recommendations %}
{%- if rec.category == "priority_action" %}
- **[{{ rec.priority }}]** {{ rec.action }} ({{ rec.metric }}; {{ rec.impact }})
{%- elif rec.category == "revenue_opportunity" %}
- **[{{ rec.priority }}]** {{ rec.opportunity }}: {{ rec.action }} (potential: {{ rec.potential }})
{%- else %}
- **[{{ rec.priority }}]** {{ rec.insight }}: {{ rec.recommendation }} ({{ rec.detail }})
{%- endif %}
{%- else %}
- Nothing to flag.
{%- endfor %}
"#;

/// Renders the dashboard through `engine` with [`REPORT_TEMPLATE`].
pub fn render_report<T: TemplateEngine + ?Sized>(
    dashboard: &Dashboard,
    engine: &T,
) -> Result<String, CrmSynthError> {
    engine.render(REPORT_TEMPLATE, &dashboard.to_value()?)
}

#[instrument(skip_all, fields(out = %out.display()))]
pub fn write_report<T: TemplateEngine + ?Sized>(
    dashboard: &Dashboard,
    engine: &T,
    out: &Path,
) -> Result<(), CrmSynthError> {
    let content = render_report(dashboard, engine)?;
    let bytes = content.len();
    atomic_write(out, content)?;
    info!(bytes, "Report written");
    Ok(())
}
