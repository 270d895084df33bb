// crmsynth-core/src/domain/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic, PartialEq)]
pub enum DomainError {
    #[error("Invalid generation config: {0}")]
    #[diagnostic(
        code(crmsynth::domain::invalid_config),
        help("customer_count must be positive and every per-customer range must satisfy 0 <= min <= max.")
    )]
    InvalidConfig(String),

    // Unreachable when the generators are wired correctly. Treated as fatal.
    #[error("Referential integrity violation: {0}")]
    #[diagnostic(code(crmsynth::domain::invalid_reference))]
    InvalidReference(String),
}
