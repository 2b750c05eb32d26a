//! Configuration loading for Irisboard.
//! Reads irisboard.toml from the current directory or the path in IRISBOARD_CONFIG.
//! Without a file, the caller falls back to `Config::default()`.

use irisboard_cluster::KMeansSettings;
use irisboard_data::Attribute;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_ENV: &str = "IRISBOARD_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "irisboard.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub clustering: KMeansSettings,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Verbose request and clustering logs when RUST_LOG is unset.
    #[serde(default = "bool_true")]
    pub debug: bool,
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16    { 8050 }
fn bool_true()    -> bool   { true }

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port(), debug: bool_true() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_x")]
    pub default_x: Attribute,
    #[serde(default = "default_y")]
    pub default_y: Attribute,
    #[serde(default = "default_clusters")]
    pub default_clusters: i64,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_x()         -> Attribute { Attribute::SepalLength }
fn default_y()         -> Attribute { Attribute::SepalWidth }
fn default_clusters()  -> i64       { 3 }
fn default_page_size() -> usize     { 10 }

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            default_x: default_x(),
            default_y: default_y(),
            default_clusters: default_clusters(),
            page_size: default_page_size(),
        }
    }
}

mod tests;

impl Config {
    /// Find the config file to use.
    /// An explicit IRISBOARD_CONFIG must exist; the default file is optional.
    pub fn locate() -> anyhow::Result<Option<PathBuf>> {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            let path = PathBuf::from(path);
            if !path.exists() {
                anyhow::bail!("{CONFIG_ENV} points to a missing file: {}", path.display());
            }
            return Ok(Some(path));
        }
        let path = PathBuf::from(DEFAULT_CONFIG_FILE);
        Ok(path.exists().then_some(path))
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        self.clustering.validate()?;
        if self.ui.page_size == 0 {
            anyhow::bail!("ui.page_size must be at least 1");
        }
        if self.ui.default_clusters < 1 {
            anyhow::bail!("ui.default_clusters must be at least 1");
        }
        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
