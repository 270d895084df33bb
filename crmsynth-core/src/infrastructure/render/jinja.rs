// crmsynth-core/src/infrastructure/render/jinja.rs

// Renders text reports from a JSON context. Adds the number filters the
// report templates rely on.

use crate::application::ports::TemplateEngine;
use crate::domain::analytics::recommendation::format_money;
use crate::error::CrmSynthError;
use crate::infrastructure::error::InfrastructureError;
use minijinja::Environment;

pub struct JinjaRenderer<'a> {
    env: Environment<'a>,
}

impl<'a> JinjaRenderer<'a> {
    pub fn new() -> Self {
        let mut env = Environment::new();

        // {{ kpis.total_pipeline | money }} -> $1,234,567
        env.add_filter("money", |value: f64| format_money(value));
        // {{ kpis.win_rate | percent }} -> 42.5%
        env.add_filter("percent", |value: f64| format!("{:.1}%", value));
        // {{ kpis.avg_sentiment | signed }} -> +0.12 / -0.40
        env.add_filter("signed", |value: f64| format!("{:+.2}", value));

        Self { env }
    }
}

impl<'a> Default for JinjaRenderer<'a> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> TemplateEngine for JinjaRenderer<'a> {
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String, CrmSynthError> {
        self.env
            .render_str(template, context)
            .map_err(|e| CrmSynthError::Infrastructure(InfrastructureError::Template(e)))
    }
}
