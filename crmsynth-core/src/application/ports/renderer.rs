use crate::error::CrmSynthError;

pub trait TemplateEngine: Send + Sync {
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String, CrmSynthError>;
}
