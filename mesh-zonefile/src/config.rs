use std::path::Path;
use serde::Deserialize;
use anyhow::{Context, Result};

/// Environment variable naming an optional TOML config file
pub const CONFIG_ENV: &str = "MESH_ZONEFILE_CONFIG";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub records: RecordsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    /// Unknown template fields become render errors
    #[serde(default)]
    pub strict: bool,
    #[serde(default)]
    pub html_escape: bool,
    #[serde(default = "default_trailing_newline")]
    pub trailing_newline: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecordsConfig {
    #[serde(default = "default_aggregate_name")]
    pub aggregate_name: String,
}

fn default_trailing_newline() -> bool {
    true
}

fn default_aggregate_name() -> String {
    shared::protocol::AGGREGATE_RECORD_NAME.to_string()
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            strict: false,
            html_escape: false,
            trailing_newline: default_trailing_newline(),
        }
    }
}

impl Default for RecordsConfig {
    fn default() -> Self {
        Self {
            aggregate_name: default_aggregate_name(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load the file named by `MESH_ZONEFILE_CONFIG`, or fall back to defaults
    pub fn from_env() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}
