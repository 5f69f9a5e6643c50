//! Configuration management module
//!
//! Loads the YAML configuration file and applies environment overrides.

use std::env;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use locator_engine::ResolveOptions;
use serde::{Deserialize, Serialize};
use tokio::fs;
use tracing::{debug, warn};

pub const ENV_INCLUDE_HIDDEN: &str = "SEMLOC_INCLUDE_HIDDEN";
pub const ENV_MAX_LISTED: &str = "SEMLOC_MAX_LISTED";

/// Application configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default log level when neither `--log-level` nor `RUST_LOG` is given
    pub log_level: String,
    pub resolve: ResolveOptions,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            resolve: ResolveOptions::default(),
        }
    }
}

/// Configuration together with the file it came from, if any
#[derive(Clone, Debug)]
pub struct LoadedConfig {
    pub config: AppConfig,
    pub path: Option<PathBuf>,
}

/// Load configuration.
///
/// Priority: explicit path > ./config/semloc.yaml > <config dir>/semloc/config.yaml.
/// An explicit path must exist; the default locations may be absent.
pub async fn load_config(explicit: Option<&Path>) -> Result<LoadedConfig> {
    let path = match explicit {
        Some(path) => {
            if !path.exists() {
                bail!("Configuration file not found: {}", path.display());
            }
            Some(path.to_path_buf())
        }
        None => default_config_path(),
    };

    let mut config = match &path {
        Some(path) => {
            let contents = fs::read_to_string(path)
                .await
                .with_context(|| format!("Failed to read config file {}", path.display()))?;
            parse_config(&contents)
                .with_context(|| format!("Failed to parse config file {}", path.display()))?
        }
        None => {
            debug!("No configuration file found, using defaults");
            AppConfig::default()
        }
    };

    apply_overrides(&mut config, |key| env::var(key).ok());
    Ok(LoadedConfig { config, path })
}

fn default_config_path() -> Option<PathBuf> {
    let local_config = PathBuf::from("config/semloc.yaml");
    if local_config.exists() {
        return Some(local_config);
    }
    let mut path = dirs::config_dir()?;
    path.push("semloc");
    path.push("config.yaml");
    path.exists().then_some(path)
}

pub fn parse_config(contents: &str) -> Result<AppConfig> {
    if contents.trim().is_empty() {
        return Ok(AppConfig::default());
    }
    serde_yaml::from_str(contents).context("Invalid configuration")
}

/// Apply `SEMLOC_*` overrides read through `lookup`
pub fn apply_overrides<F>(config: &mut AppConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(raw) = lookup(ENV_INCLUDE_HIDDEN) {
        config.resolve.include_hidden = matches!(
            raw.trim().to_ascii_lowercase().as_str(),
            "1" | "true" | "yes"
        );
    }
    if let Some(raw) = lookup(ENV_MAX_LISTED) {
        match raw.trim().parse::<usize>() {
            Ok(limit) => config.resolve.max_listed_candidates = limit,
            Err(err) => warn!(value = %raw, ?err, "ignoring invalid {}", ENV_MAX_LISTED),
        }
    }
}
