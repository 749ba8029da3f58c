use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::Path;
use std::time::Duration;

pub const CONFIG_FILE: &str = "config.toml";
pub const API_KEY_ENV: &str = "PROXYGG_API_KEY";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub api_key: String,
    /// Base URL without the query string, e.g. `https://api.proxy.gg/get.php`.
    pub endpoint: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl Settings {
    /// Loads `config.toml` from the working directory. A missing file is fine
    /// as long as `PROXYGG_API_KEY` supplies the key.
    pub fn new() -> Result<Self> {
        let config_data = fs::read_to_string(CONFIG_FILE).unwrap_or_default();
        Self::resolve(&config_data, env::var(API_KEY_ENV).ok())
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let config_data = fs::read_to_string(path)
            .with_context(|| format!("cannot read {}", path.display()))?;
        Self::resolve(&config_data, env::var(API_KEY_ENV).ok())
    }

    /// Parses settings from TOML text without consulting the environment.
    pub fn from_toml(config_data: &str) -> Result<Self> {
        Self::resolve(config_data, None)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    fn resolve(config_data: &str, env_key: Option<String>) -> Result<Self> {
        let mut settings: Settings = if config_data.trim().is_empty() {
            Settings::default()
        } else {
            toml::from_str(config_data)?
        };

        if let Some(key) = env_key.filter(|k| !k.is_empty()) {
            settings.api_key = key;
        }

        if settings.api_key.is_empty() {
            return Err(anyhow!(
                "no api key: set api_key in {} or {}",
                CONFIG_FILE,
                API_KEY_ENV
            ));
        }

        Ok(settings)
    }
}
