//! Server configuration
//!
//! Read from the process environment (a `.env` file is loaded first when
//! present).

use anyhow::{bail, Context, Result};

use henkan::{DEFAULT_PRECISION, MAX_PRECISION};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Runtime settings for the API server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Socket address to listen on
    pub bind_addr: String,
    /// Bearer token required on `/henkan/*`; auth is off when unset
    pub api_key: Option<String>,
    /// Decimal places in rendered results, at most [`MAX_PRECISION`]
    pub precision: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            api_key: None,
            precision: DEFAULT_PRECISION,
        }
    }
}

impl ServerConfig {
    /// Load from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let precision = match lookup("HENKAN_PRECISION") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("Invalid HENKAN_PRECISION: {raw:?}"))?,
            None => defaults.precision,
        };

        if precision > MAX_PRECISION {
            bail!("HENKAN_PRECISION must be at most {MAX_PRECISION}, got {precision}");
        }

        Ok(Self {
            bind_addr: lookup("HENKAN_BIND_ADDR").unwrap_or(defaults.bind_addr),
            api_key: lookup("HENKAN_API_KEY").filter(|k| !k.is_empty()),
            precision,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.precision, 4);
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("HENKAN_BIND_ADDR", "127.0.0.1:9000"),
            ("HENKAN_API_KEY", "secret"),
            ("HENKAN_PRECISION", "2"),
        ]))
        .unwrap();
        assert_eq!(config.bind_addr, "127.0.0.1:9000");
        assert_eq!(config.api_key.as_deref(), Some("secret"));
        assert_eq!(config.precision, 2);
    }

    #[test]
    fn test_empty_api_key_disables_auth() {
        let config = ServerConfig::from_lookup(lookup_from(&[("HENKAN_API_KEY", "")])).unwrap();
        assert_eq!(config.api_key, None);
    }

    #[test]
    fn test_precision_too_large() {
        let result = ServerConfig::from_lookup(lookup_from(&[("HENKAN_PRECISION", "70000")]));
        assert!(result.is_err());

        let config = ServerConfig::from_lookup(lookup_from(&[("HENKAN_PRECISION", "12")])).unwrap();
        assert_eq!(config.precision, MAX_PRECISION);
    }

    #[test]
    fn test_bad_precision() {
        let result = ServerConfig::from_lookup(lookup_from(&[("HENKAN_PRECISION", "four")]));
        assert!(result.is_err());
    }
}
