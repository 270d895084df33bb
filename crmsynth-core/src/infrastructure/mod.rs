// crmsynth-core/src/infrastructure/mod.rs

pub mod config;
pub mod error;
pub mod exporters;
pub mod fs;
pub mod render;
