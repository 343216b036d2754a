//! Configuration file support for sbom-compare.
//!
//! Provides YAML-based configuration through `sbom-compare.config.yml` files,
//! including data structures, file loading, validation, and merging with
//! command-line overrides.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use crate::application::dto::OutputFormat;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "sbom-compare.config.yml";

/// Service base URL used when neither the CLI nor the config file sets one
pub const DEFAULT_SERVICE_URL: &str = "http://localhost:8080/svip";

/// Request timeout used when neither the CLI nor the config file sets one
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub service_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub format: Option<String>,
    pub conflicts_only: Option<bool>,
    pub fail_on_conflict: Option<bool>,
    pub quality: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
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
    if let Some(ref url) = config.service_url {
        if url.trim().is_empty() {
            bail!(
                "Invalid config: service_url must not be empty.\n\n\
                 💡 Hint: Remove the key to use the default ({}) or set a full URL.",
                DEFAULT_SERVICE_URL
            );
        }
    }

    if config.timeout_secs == Some(0) {
        bail!(
            "Invalid config: timeout_secs must be greater than 0.\n\n\
             💡 Hint: Remove the key to use the default of {} seconds.",
            DEFAULT_TIMEOUT_SECS
        );
    }

    if let Some(ref format) = config.format {
        if let Err(e) = format.parse::<OutputFormat>() {
            bail!("Invalid config: {}", e);
        }
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

/// Values given on the command line; `None`/`false` means "not given"
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub service_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub format: Option<OutputFormat>,
    pub conflicts_only: bool,
    pub fail_on_conflict: bool,
    pub quality: bool,
}

/// Effective settings after applying CLI > config file > defaults
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub service_url: String,
    pub timeout: Duration,
    pub format: OutputFormat,
    pub conflicts_only: bool,
    pub fail_on_conflict: bool,
    pub quality: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            service_url: DEFAULT_SERVICE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            format: OutputFormat::default(),
            conflicts_only: false,
            fail_on_conflict: false,
            quality: false,
        }
    }
}

impl Settings {
    /// Merges CLI overrides over an optional config file.
    ///
    /// Boolean flags can only switch a feature on; a config file that enables
    /// one cannot be turned off from the command line.
    pub fn resolve(overrides: SettingsOverrides, config: Option<&ConfigFile>) -> Result<Self> {
        let defaults = Settings::default();

        let service_url = overrides
            .service_url
            .or_else(|| config.and_then(|c| c.service_url.clone()))
            .unwrap_or(defaults.service_url);
        if service_url.trim().is_empty() {
            bail!("Service URL must not be empty");
        }

        let timeout_secs = overrides
            .timeout_secs
            .or_else(|| config.and_then(|c| c.timeout_secs))
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        if timeout_secs == 0 {
            bail!("Timeout must be greater than 0 seconds");
        }

        let format = match overrides.format {
            Some(format) => format,
            None => match config.and_then(|c| c.format.as_deref()) {
                Some(raw) => raw.parse::<OutputFormat>().map_err(anyhow::Error::msg)?,
                None => defaults.format,
            },
        };

        let flag = |cli: bool, file: Option<bool>| cli || file.unwrap_or(false);

        Ok(Self {
            service_url,
            timeout: Duration::from_secs(timeout_secs),
            format,
            conflicts_only: flag(overrides.conflicts_only, config.and_then(|c| c.conflicts_only)),
            fail_on_conflict: flag(
                overrides.fail_on_conflict,
                config.and_then(|c| c.fail_on_conflict),
            ),
            quality: flag(overrides.quality, config.and_then(|c| c.quality)),
        })
    }
}
