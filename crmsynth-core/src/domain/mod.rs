pub mod analytics;
pub mod error;
pub mod generation;
pub mod model;
pub mod random;

// Convenience re-export for the layers above
pub use error::DomainError;
