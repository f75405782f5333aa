//! Builds a validated `Config` from defaults, an optional file, and
//! explicit overrides.

use std::time::Duration;
use url::Url;

use crate::core::config::{Config, ConfigFile};
use crate::core::error::{ClientError, Result};

/// Layered configuration builder.
///
/// Explicit setter values win over config-file values, which win over the
/// built-in defaults.
#[derive(Debug, Default, Clone)]
pub struct ConfigBuilder {
    file: Option<ConfigFile>,
    loaded_config_path: Option<String>,
    api_key: Option<String>,
    api_base_url: Option<String>,
    request_timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a TOML configuration file to merge beneath the explicit values.
    pub fn config_file(mut self, path: &str) -> Result<Self> {
        self.file = Some(ConfigFile::load(path)?);
        self.loaded_config_path = Some(path.to_string());
        Ok(self)
    }

    /// Merges an already-parsed configuration file.
    pub fn with_config_file(mut self, file: ConfigFile) -> Self {
        self.file = Some(file);
        self
    }

    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn api_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api_base_url = Some(base_url.into());
        self
    }

    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Validates the merged settings and produces the final configuration.
    pub fn build(self) -> Result<Config> {
        let defaults = Config::default();
        let file = self.file.unwrap_or_default();

        let api_key = self.api_key.or(file.api.api_key);
        let api_base_url = self
            .api_base_url
            .or(file.api.base_url)
            .unwrap_or(defaults.api_base_url);
        let request_timeout = self
            .request_timeout
            .or(file.network.request_timeout.map(Duration::from_secs))
            .unwrap_or(defaults.request_timeout);
        let user_agent = self
            .user_agent
            .or(file.network.user_agent)
            .unwrap_or(defaults.user_agent);

        if let Some(key) = &api_key {
            if key.trim().is_empty() {
                return Err(ClientError::Config(
                    "api_key must not be blank when set".to_string(),
                ));
            }
        }
        Url::parse(&api_base_url).map_err(|e| {
            ClientError::Config(format!("invalid api_base_url '{}': {}", api_base_url, e))
        })?;
        if request_timeout.is_zero() {
            return Err(ClientError::Config(
                "request_timeout must be greater than zero".to_string(),
            ));
        }
        if user_agent.is_empty() {
            return Err(ClientError::Config(
                "user_agent must not be empty".to_string(),
            ));
        }

        Ok(Config {
            api_key,
            api_base_url,
            request_timeout,
            user_agent,
            loaded_config_path: self.loaded_config_path,
        })
    }
}
