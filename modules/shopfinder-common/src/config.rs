use std::env;
use std::path::PathBuf;

use tracing::info;

use crate::error::ShopfinderError;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    // Data
    pub data_path: PathBuf,

    // Web server
    pub web_host: String,
    pub web_port: u16,
    pub allowed_origins: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("./data"),
            web_host: "0.0.0.0".to_string(),
            web_port: 5000,
            allowed_origins: Vec::new(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables, falling back to defaults
    /// for anything unset. Only a malformed `WEB_PORT` is an error.
    pub fn from_env() -> Result<Self, ShopfinderError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ShopfinderError> {
        let defaults = Self::default();

        let data_path = lookup("DATA_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| {
                info!(default = %defaults.data_path.display(), "DATA_PATH not set, using default");
                defaults.data_path.clone()
            });

        let web_port = match lookup("WEB_PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ShopfinderError::Config(format!("WEB_PORT must be a number, got {raw:?}")))?,
            None => defaults.web_port,
        };

        Ok(Self {
            data_path,
            web_host: lookup("WEB_HOST").unwrap_or(defaults.web_host),
            web_port,
            allowed_origins: lookup("ALLOWED_ORIGINS")
                .map(|raw| parse_origins(&raw))
                .unwrap_or_default(),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.web_host, self.web_port)
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_env_empty() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.data_path, PathBuf::from("./data"));
        assert_eq!(config.bind_addr(), "0.0.0.0:5000");
        assert!(config.allowed_origins.is_empty());
    }

    #[test]
    fn reads_all_vars() {
        let config = Config::from_lookup(lookup_from(&[
            ("DATA_PATH", "/srv/data"),
            ("WEB_HOST", "127.0.0.1"),
            ("WEB_PORT", "8080"),
            ("ALLOWED_ORIGINS", "http://a.test, http://b.test,,"),
        ]))
        .unwrap();
        assert_eq!(config.data_path, PathBuf::from("/srv/data"));
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
        assert_eq!(config.allowed_origins, vec!["http://a.test", "http://b.test"]);
    }

    #[test]
    fn bad_port_is_config_error() {
        let err = Config::from_lookup(lookup_from(&[("WEB_PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, ShopfinderError::Config(_)));
    }
}
