// crmsynth-core/src/domain/generation/mod.rs

pub mod config;
pub mod customers;
pub mod deals;
pub mod feedback;
pub mod text;

pub use config::{CountRange, GenerationConfig};
pub use customers::CustomerGenerator;
pub use deals::DealGenerator;
pub use feedback::FeedbackGenerator;
