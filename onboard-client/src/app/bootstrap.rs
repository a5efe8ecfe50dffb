use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_SERVER_URL: &str = "http://localhost:3000";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub const SERVER_URL_VAR: &str = "ONBOARD_SERVER_URL";
pub const API_TOKEN_VAR: &str = "ONBOARD_API_TOKEN";
pub const REQUEST_TIMEOUT_VAR: &str = "ONBOARD_REQUEST_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{var} must be a whole number of seconds, got {value:?}")]
    InvalidTimeout { var: &'static str, value: String },

    #[error("{var} must be greater than zero")]
    ZeroTimeout { var: &'static str },

    #[error("Server URL must start with http:// or https://, got {0:?}")]
    InvalidServerUrl(String),
}

#[derive(Clone)]
pub struct AppConfig {
    server_url: Arc<str>,
    api_token: Option<String>,
    request_timeout: Duration,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("server_url", &self.server_url)
            .field("has_api_token", &self.api_token.is_some())
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_url: Arc::from(DEFAULT_SERVER_URL),
            api_token: None,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl AppConfig {
    pub fn from_environment() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build a config from an arbitrary variable source. Empty values count
    /// as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |var: &str| lookup(var).filter(|value| !value.trim().is_empty());

        let mut config = Self::default();
        if let Some(url) = read(SERVER_URL_VAR) {
            config = config.with_server_url(url)?;
        }
        config.api_token = read(API_TOKEN_VAR);
        if let Some(raw) = read(REQUEST_TIMEOUT_VAR) {
            let secs = raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidTimeout {
                    var: REQUEST_TIMEOUT_VAR,
                    value: raw.clone(),
                })?;
            config = config.with_timeout_secs(secs)?;
        }
        Ok(config)
    }

    pub fn with_server_url(mut self, url: impl AsRef<str>) -> Result<Self, ConfigError> {
        let url = url.as_ref().trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::InvalidServerUrl(url.to_string()));
        }
        self.server_url = Arc::from(url.trim_end_matches('/'));
        Ok(self)
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Result<Self, ConfigError> {
        if secs == 0 {
            return Err(ConfigError::ZeroTimeout {
                var: REQUEST_TIMEOUT_VAR,
            });
        }
        self.request_timeout = Duration::from_secs(secs);
        Ok(self)
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    pub fn api_token(&self) -> Option<&str> {
        self.api_token.as_deref()
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var: &str| vars.get(var).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.server_url(), DEFAULT_SERVER_URL);
        assert_eq!(config.api_token(), None);
        assert_eq!(config.request_timeout(), DEFAULT_REQUEST_TIMEOUT);
    }

    #[test]
    fn reads_every_variable() {
        let config = AppConfig::from_lookup(lookup(&[
            (SERVER_URL_VAR, "https://directory.example.com/"),
            (API_TOKEN_VAR, "tok"),
            (REQUEST_TIMEOUT_VAR, " 5 "),
        ]))
        .unwrap();
        assert_eq!(config.server_url(), "https://directory.example.com");
        assert_eq!(config.api_token(), Some("tok"));
        assert_eq!(config.request_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn empty_values_count_as_unset() {
        let config =
            AppConfig::from_lookup(lookup(&[(API_TOKEN_VAR, ""), (SERVER_URL_VAR, "  ")]))
                .unwrap();
        assert_eq!(config.api_token(), None);
        assert_eq!(config.server_url(), DEFAULT_SERVER_URL);
    }

    #[test]
    fn rejects_bad_values() {
        assert_eq!(
            AppConfig::from_lookup(lookup(&[(REQUEST_TIMEOUT_VAR, "soon")])).unwrap_err(),
            ConfigError::InvalidTimeout {
                var: REQUEST_TIMEOUT_VAR,
                value: "soon".to_string(),
            }
        );
        assert!(matches!(
            AppConfig::from_lookup(lookup(&[(REQUEST_TIMEOUT_VAR, "0")])),
            Err(ConfigError::ZeroTimeout { .. })
        ));
        assert!(matches!(
            AppConfig::from_lookup(lookup(&[(SERVER_URL_VAR, "localhost:3000")])),
            Err(ConfigError::InvalidServerUrl(_))
        ));
    }

    #[test]
    fn debug_hides_token() {
        let config = AppConfig::from_lookup(lookup(&[(API_TOKEN_VAR, "secret")])).unwrap();
        assert!(!format!("{config:?}").contains("secret"));
    }
}
