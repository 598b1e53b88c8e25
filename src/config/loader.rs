//! @acp:module "Config Loader"
//! @acp:summary "Layer configuration from defaults, a project file and overrides"
//! @acp:domain format
//! @acp:layer io

use anyhow::{Context, Result};
use std::path::Path;

use super::Config;

/// Programmatic overrides applied after the config file
#[derive(Debug, Default, Clone)]
pub struct ConfigOverrides {
    pub map_url: Option<String>,
    pub link_target: Option<String>,
    pub precision: Option<usize>,
}

/// Load configuration with 3-layer merging:
/// 1. Built-in defaults
/// 2. Project file (JSON or YAML), if it exists
/// 3. Overrides
pub fn load_config(project_file: Option<&Path>, overrides: &ConfigOverrides) -> Result<Config> {
    let mut config = Config::default();

    if let Some(path) = project_file {
        if path.exists() {
            config = Config::load(path)
                .with_context(|| format!("Failed to load dataguess config from {:?}", path))?;
        } else {
            tracing::debug!("No config at {:?}, using defaults", path);
        }
    }

    Ok(apply_overrides(config, overrides))
}

fn apply_overrides(mut config: Config, overrides: &ConfigOverrides) -> Config {
    if let Some(ref map_url) = overrides.map_url {
        config.map_url = map_url.clone();
    }
    if let Some(ref target) = overrides.link_target {
        if target.is_empty() {
            tracing::warn!("Ignoring empty link target override");
        } else {
            config.link_target = target.clone();
        }
    }
    if let Some(precision) = overrides.precision {
        config.precision = precision;
    }
    config
}
