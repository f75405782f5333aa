//! Defines the structure mirroring the TOML configuration file format.

use serde::Deserialize;
use std::path::Path;

use crate::core::error::{ClientError, Result};

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub(crate) api: ApiConfig,
    #[serde(default)]
    pub(crate) network: NetworkConfig,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub(crate) struct ApiConfig {
    pub(crate) api_key: Option<String>,
    pub(crate) base_url: Option<String>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub(crate) struct NetworkConfig {
    /// Request timeout in seconds.
    pub(crate) request_timeout: Option<u64>,
    pub(crate) user_agent: Option<String>,
}

impl ConfigFile {
    /// Reads and parses the configuration file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        toml::from_str(&raw).map_err(|e| {
            ClientError::Config(format!(
                "failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })
    }
}
