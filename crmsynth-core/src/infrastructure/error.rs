// crmsynth-core/src/infrastructure/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum InfrastructureError {
    // --- FILESYSTEM (IO) ---
    #[error("File System Error: {0}")]
    #[diagnostic(
        code(crmsynth::infra::io),
        help("Check file permissions or path validity.")
    )]
    Io(#[from] std::io::Error),

    // --- CONFIG / YAML ---
    #[error("YAML Parsing Error: {0}")]
    #[diagnostic(
        code(crmsynth::infra::yaml),
        help("Check your YAML syntax (indentation, types).")
    )]
    Yaml(#[from] serde_yaml::Error),

    #[error("Configuration Error: {0}")]
    #[diagnostic(code(crmsynth::infra::config))]
    Config(String),

    #[error("Generation configuration not found at '{0}'")]
    #[diagnostic(code(crmsynth::infra::config_missing))]
    ConfigNotFound(String),

    // --- EXPORT ---
    #[error("JSON Serialization Error: {0}")]
    #[diagnostic(code(crmsynth::infra::json))]
    Json(#[from] serde_json::Error),

    #[error("CSV Export Error: {0}")]
    #[diagnostic(
        code(crmsynth::infra::csv),
        help("Check that the output directory is writable.")
    )]
    Csv(#[from] csv::Error),

    // --- TEMPLATING ---
    #[error("Template Rendering Error: {0}")]
    #[diagnostic(
        code(crmsynth::infra::template),
        help("Check your Jinja syntax ({{ ... }}) inside the report template.")
    )]
    Template(#[from] minijinja::Error),
}
