//! Configuration management for Henkan CLI
//!
//! Stores output precision and API settings in ~/.config/henkan/config.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

pub use henkan::MAX_PRECISION;
use henkan::DEFAULT_PRECISION;

const CONFIG_DIR: &str = "henkan";
const CONFIG_FILE: &str = "config.toml";

/// CLI Configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Decimals shown on results
    #[serde(default = "default_precision")]
    pub precision: usize,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Send conversions to the API instead of computing locally
    #[serde(default)]
    pub remote: bool,
}

fn default_precision() -> usize {
    DEFAULT_PRECISION
}

fn default_base_url() -> String {
    "http://127.0.0.1:8080".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            precision: default_precision(),
            base_url: default_base_url(),
            api_key: None,
            remote: false,
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join(CONFIG_DIR);
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        Self::parse(&content)
    }

    /// Parse config from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).context("Failed to parse config file")?;
        Ok(config)
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let dir = Self::config_dir()?;
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create config directory {:?}", dir))?;

        let path = Self::config_path()?;
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&path, content)
            .with_context(|| format!("Failed to write config to {:?}", path))?;

        Ok(())
    }

    /// Set result precision; rejects values above [`MAX_PRECISION`]
    pub fn set_precision(&mut self, precision: usize) -> bool {
        if precision > MAX_PRECISION {
            return false;
        }
        self.precision = precision;
        true
    }

    /// Set API base URL
    pub fn set_base_url(&mut self, url: String) {
        self.base_url = url.trim_end_matches('/').to_string();
    }

    /// Set API key
    pub fn set_api_key(&mut self, key: String) {
        self.api_key = Some(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.precision, 4);
        assert!(!config.remote);
    }

    #[test]
    fn test_partial_file() {
        let config = Config::parse("precision = 2\nremote = true\n").unwrap();
        assert_eq!(config.precision, 2);
        assert!(config.remote);
        assert_eq!(config.base_url, "http://127.0.0.1:8080");
    }

    #[test]
    fn test_round_trip_omits_missing_key() {
        let config = Config::default();
        let text = toml::to_string_pretty(&config).unwrap();
        assert!(!text.contains("api_key"));
        assert_eq!(Config::parse(&text).unwrap(), config);
    }

    #[test]
    fn test_setters() {
        let mut config = Config::default();
        assert!(config.set_precision(6));
        assert!(!config.set_precision(40));
        assert_eq!(config.precision, 6);

        config.set_base_url("https://henkan.example.com/".to_string());
        assert_eq!(config.base_url, "https://henkan.example.com");
    }

    #[test]
    fn test_invalid_toml() {
        assert!(Config::parse("precision = \"four\"").is_err());
    }
}
