//! Configuration loading from nestcheck.toml.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::{fs, path::Path};

/// Main configuration structure for nestcheck.toml.
#[derive(Debug, Deserialize, Default)]
pub struct NestcheckConfig {
    /// Maximum allowed serialization depth.
    pub max_depth: Option<usize>,
    /// Extra value types to append to the built-in serializable set.
    pub builtins: Option<Vec<String>>,
    /// Root type names or patterns to skip.
    pub ignore: Option<Vec<String>>,
    /// Output configuration.
    pub output: Option<OutputConfig>,
}

/// Output format configuration.
#[derive(Debug, Deserialize, Default)]
pub struct OutputConfig {
    /// Output format: "plain" or "json".
    pub format: Option<String>,
}

/// Loads configuration from nestcheck.toml if it exists.
pub fn load_config(root: &Path) -> Result<Option<NestcheckConfig>> {
    let path = root.join("nestcheck.toml");
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(&path)?;
    let cfg = toml::from_str(&content).context("Invalid nestcheck.toml")?;
    Ok(Some(cfg))
}
