//! Configuration file support for bom-graph.
//!
//! Provides YAML-based configuration through `bom-graph.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::{bail, Context};
use bom_graph::application::dto::OutputFormat;
use bom_graph::application::store::StaleDataPolicy;
use bom_graph::shared::Result;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

use crate::logging::LogFormat;

pub const CONFIG_FILENAME: &str = "bom-graph.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub api_url: Option<String>,
    pub input: Option<PathBuf>,
    pub format: Option<String>,
    pub timeout_secs: Option<u64>,
    pub stale_data: Option<StaleDataPolicy>,
    pub allow_leaf_items: Option<bool>,
    pub log_level: Option<String>,
    pub log_format: Option<LogFormat>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// Parsed `format`, if one is set. Only valid after `validate_config`.
    pub fn output_format(&self) -> Option<OutputFormat> {
        self.format
            .as_deref()
            .and_then(|format| OutputFormat::from_str(format).ok())
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if config.api_url.is_some() && config.input.is_some() {
        bail!(
            "Invalid config: 'api_url' and 'input' are mutually exclusive.\n\n\
             💡 Hint: Keep only the BOM source you want to use."
        );
    }

    if let Some(ref api_url) = config.api_url {
        if api_url.trim().is_empty() {
            bail!(
                "Invalid config: api_url must not be empty.\n\n\
                 💡 Hint: Use a base URL such as \"http://localhost:3000/api\"."
            );
        }
    }

    if let Some(ref format) = config.format {
        if let Err(e) = OutputFormat::from_str(format) {
            bail!("Invalid config: {}", e);
        }
    }

    if config.timeout_secs == Some(0) {
        bail!(
            "Invalid config: timeout_secs must be greater than 0.\n\n\
             💡 Hint: The default request timeout is 30 seconds."
        );
    }

    if let Some(ref log_level) = config.log_level {
        if let Err(e) = EnvFilter::try_new(log_level) {
            bail!(
                "Invalid config: log_level '{}' is not a valid filter ({}).\n\n\
                 💡 Hint: Use a level such as \"warn\" or \"debug\", or a directive like \"bom_graph=debug\".",
                log_level,
                e
            );
        }
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!("⚠️  Warning: Unknown config field '{}' will be ignored.", key);
    }
}
