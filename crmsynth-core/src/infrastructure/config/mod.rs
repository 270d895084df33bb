pub mod generation;

pub use generation::{apply_env_overrides, load_generation_config, parse_config};
