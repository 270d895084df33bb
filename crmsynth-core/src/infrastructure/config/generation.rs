// crmsynth-core/src/infrastructure/config/generation.rs

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, instrument, warn};

use crate::domain::generation::GenerationConfig;
use crate::infrastructure::error::InfrastructureError;

pub const CONFIG_CANDIDATES: [&str; 2] = ["crmsynth.yaml", "crmsynth.yml"];
pub const ENV_SEED: &str = "CRMSYNTH_SEED";
pub const ENV_CUSTOMERS: &str = "CRMSYNTH_CUSTOMERS";

/// Loads the generation config.
///
/// An explicit `path` must exist. Without one, `dir` is searched for
/// `crmsynth.yaml` / `crmsynth.yml` and the defaults apply when neither is
/// present. Environment overrides are layered on top of the file.
///
/// The result is not validated here; callers run [`GenerationConfig::check`].
#[instrument(skip_all)]
pub fn load_generation_config(
    path: Option<&Path>,
    dir: &Path,
) -> Result<GenerationConfig, InfrastructureError> {
    let config_path = match path {
        Some(p) if p.exists() => Some(p.to_path_buf()),
        Some(p) => return Err(InfrastructureError::ConfigNotFound(p.display().to_string())),
        None => find_config(dir),
    };

    let mut config = match config_path {
        Some(p) => {
            info!(path = ?p, "Loading generation config");
            parse_config(&fs::read_to_string(&p)?)?
        }
        None => {
            info!("No config file found, using defaults");
            GenerationConfig::default()
        }
    };

    apply_env_overrides(&mut config, |key| std::env::var(key).ok())?;
    Ok(config)
}

fn find_config(dir: &Path) -> Option<PathBuf> {
    let mut found = CONFIG_CANDIDATES
        .iter()
        .map(|name| dir.join(name))
        .filter(|p| p.exists());
    let first = found.next()?;
    for ignored in found {
        warn!(used = ?first, ignored = ?ignored, "Several config files found, using the first");
    }
    Some(first)
}

/// An empty document yields the defaults.
pub fn parse_config(content: &str) -> Result<GenerationConfig, InfrastructureError> {
    if content.trim().is_empty() {
        return Ok(GenerationConfig::default());
    }
    Ok(serde_yaml::from_str(content)?)
}

/// Applies `CRMSYNTH_SEED` and `CRMSYNTH_CUSTOMERS` as read through `lookup`.
pub fn apply_env_overrides(
    config: &mut GenerationConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<(), InfrastructureError> {
    if let Some(val) = lookup(ENV_SEED) {
        let seed = val.trim().parse::<u64>().map_err(|e| {
            InfrastructureError::Config(format!("{} must be an unsigned integer: {}", ENV_SEED, e))
        })?;
        info!(old = config.seed, new = seed, "Overriding seed via ENV");
        config.seed = seed;
    }
    if let Some(val) = lookup(ENV_CUSTOMERS) {
        let count = val.trim().parse::<i64>().map_err(|e| {
            InfrastructureError::Config(format!("{} must be an integer: {}", ENV_CUSTOMERS, e))
        })?;
        info!(old = config.customer_count, new = count, "Overriding customer count via ENV");
        config.customer_count = count;
    }
    Ok(())
}
