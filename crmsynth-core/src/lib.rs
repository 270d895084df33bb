// crmsynth-core/src/lib.rs

#![allow(missing_docs)]
// Memory safety
#![deny(unsafe_code)]
// Robustness
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
// Performance
#![warn(clippy::perf)]

// --- HEXAGONAL MODULES ---

// Ports: contracts the application needs (dataset exporters).
pub mod ports;

// Domain: records, seeded generators, metrics and recommendation rules.
// Depends on nothing else in the crate.
pub mod domain;

// Infrastructure: adapters (config file, CSV/JSON export, Jinja rendering).
pub mod infrastructure;

// Application: use cases wiring domain and infrastructure together.
pub mod application;

pub mod error;

// --- RE-EXPORTS (FACADE) ---
pub use error::CrmSynthError;
