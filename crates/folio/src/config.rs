//! Configuration file loading (folio.toml).

use std::fs;
use std::path::Path;

use anyhow::Result;
use serde::Deserialize;

/// Configuration file structure (folio.toml).
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub portfolio: PortfolioConfig,
    #[serde(default)]
    pub preview: PreviewConfig,
}

#[derive(Debug, Deserialize)]
pub struct PortfolioConfig {
    /// Portfolio document file
    #[serde(default = "default_document")]
    pub file: String,

    /// Export output path
    #[serde(default = "default_output")]
    pub output: String,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            file: default_document(),
            output: default_output(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct PreviewConfig {
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_host")]
    pub host: String,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            host: default_host(),
        }
    }
}

fn default_document() -> String {
    "portfolio.json".to_string()
}
fn default_output() -> String {
    "portfolio.html".to_string()
}
fn default_port() -> u16 {
    7777
}
fn default_host() -> String {
    "127.0.0.1".to_string()
}

/// Load configuration from the given path if it exists.
/// Returns an error if the config file exists but is malformed.
pub fn load_config(path: &Path) -> Result<ConfigFile> {
    if path.exists() {
        let content = fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;
        let config: ConfigFile = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path.display(), e))?;
        tracing::info!("Loaded config from {}", path.display());
        return Ok(config);
    }
    Ok(ConfigFile::default())
}
