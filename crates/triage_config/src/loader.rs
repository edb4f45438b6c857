//! Configuration file loading and validation.

use crate::error::ConfigError;
use crate::types::{TriageConfig, MAX_INDENT};
use std::path::Path;

/// The configuration file looked up in a project directory.
pub const CONFIG_FILE_NAME: &str = "triage.toml";

/// Loads the configuration from a project directory.
///
/// Reads `<project_dir>/triage.toml`. A directory without the file yields the
/// default configuration.
pub fn load_config(project_dir: &Path) -> Result<TriageConfig, ConfigError> {
    let config_path = project_dir.join(CONFIG_FILE_NAME);
    if !config_path.is_file() {
        return Ok(TriageConfig::default());
    }
    load_config_file(&config_path)
}

/// Loads the configuration from an explicit file path, which must exist.
pub fn load_config_file(path: &Path) -> Result<TriageConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    load_config_from_str(&content)
}

/// Parses and validates a configuration from a string.
///
/// Useful for testing without filesystem dependencies.
pub fn load_config_from_str(content: &str) -> Result<TriageConfig, ConfigError> {
    let config: TriageConfig = toml::from_str(content)?;
    validate_config(&config)?;
    Ok(config)
}

/// Rejects empty settings, non-http documentation roots, and oversized indents.
fn validate_config(config: &TriageConfig) -> Result<(), ConfigError> {
    let export = &config.export;
    if export.generator.trim().is_empty() {
        return Err(ConfigError::EmptySetting { field: "generator" });
    }
    if export.doc_base_url.trim().is_empty() {
        return Err(ConfigError::EmptySetting {
            field: "doc_base_url",
        });
    }
    if !(export.doc_base_url.starts_with("https://") || export.doc_base_url.starts_with("http://"))
    {
        return Err(ConfigError::UnsupportedUrlScheme {
            url: export.doc_base_url.clone(),
        });
    }
    if export.indent > MAX_INDENT {
        return Err(ConfigError::IndentTooWide {
            indent: export.indent,
            max: MAX_INDENT,
        });
    }
    Ok(())
}
