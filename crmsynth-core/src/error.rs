// crmsynth-core/src/error.rs

use crate::domain::error::DomainError;
use crate::infrastructure::error::InfrastructureError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CrmSynthError {
    // --- DOMAIN (config bounds, referential integrity) ---
    #[error(transparent)]
    Domain(#[from] DomainError),

    // --- INFRASTRUCTURE (IO, parsing, export) ---
    #[error(transparent)]
    Infrastructure(#[from] InfrastructureError),

    #[error("Internal Error: {0}")]
    InternalError(String),
}

// `?` on std::io calls without an explicit map_err
impl From<std::io::Error> for CrmSynthError {
    fn from(err: std::io::Error) -> Self {
        CrmSynthError::Infrastructure(InfrastructureError::Io(err))
    }
}
