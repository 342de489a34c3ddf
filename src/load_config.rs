/// `load_config` module: loads the optional YAML policy file into a [`PlatformPolicy`].
///
/// Accepted schema:
///
/// ```yaml
/// policy:
///   allowed_platform_tags:
///     - manylinux1_x86_64
///     - manylinux2010_x86_64
/// ```
///
/// A missing `policy` section or tag list falls back to the default policy
/// (`manylinux1_x86_64` only). An explicit empty list is rejected.
///
/// # Errors
/// Unreadable files, invalid YAML, unknown keys and empty tag lists are reported as
/// `anyhow::Error` and surfaced at the CLI boundary.
use std::fs;
use std::path::Path;

use aicoe_index_core::PlatformPolicy;
use anyhow::{bail, Result};
use serde::Deserialize;
use tracing::{error, info};

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    #[serde(default)]
    pub policy: PolicySection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PolicySection {
    #[serde(default)]
    pub allowed_platform_tags: Option<Vec<String>>,
}

impl CliConfig {
    pub fn platform_policy(&self) -> PlatformPolicy {
        match &self.policy.allowed_platform_tags {
            Some(tags) => PlatformPolicy::new(tags.iter().cloned()),
            None => PlatformPolicy::default(),
        }
    }
}

/// Loads a YAML policy file.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<CliConfig> {
    let path_ref = path.as_ref();
    info!(config_path = ?path_ref, "Loading configuration from file");

    let config_content = match fs::read_to_string(path_ref) {
        Ok(content) => content,
        Err(e) => {
            error!(error = ?e, config_path = ?path_ref, "Failed to read config file");
            return Err(anyhow::anyhow!(
                "Failed to read config file {:?}: {}",
                path_ref,
                e
            ));
        }
    };

    let config: CliConfig = match serde_yaml::from_str(&config_content) {
        Ok(conf) => conf,
        Err(e) => {
            error!(error = ?e, config_path = ?path_ref, "Failed to parse config YAML");
            return Err(anyhow::anyhow!("Failed to parse config YAML: {e}"));
        }
    };

    if let Some(tags) = &config.policy.allowed_platform_tags {
        if tags.is_empty() {
            error!(config_path = ?path_ref, "Config allows no platform tag");
            bail!("policy.allowed_platform_tags in {path_ref:?} must list at least one tag");
        }
    }

    info!(
        config_path = ?path_ref,
        allowed_platform_tags = ?config.platform_policy().allowed_tags().collect::<Vec<_>>(),
        "Parsed config YAML successfully"
    );
    Ok(config)
}
