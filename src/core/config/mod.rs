//! Defines the core runtime `Config` struct and its defaults.
//! Submodules handle loading and building.

pub(crate) mod builder;
pub(crate) mod file;

pub use builder::ConfigBuilder;
pub use file::ConfigFile;

use std::time::Duration;

/// Default location of the ListWise API.
pub const DEFAULT_API_BASE_URL: &str = "https://api.listwisehq.com";

/// Runtime configuration settings used by the deep-clean client.
#[derive(Debug, Clone)]
pub struct Config {
    /// Key identifying the caller to the API. Calls fail with
    /// [`ClientError::MissingApiKey`](crate::ClientError::MissingApiKey)
    /// while this is unset.
    pub api_key: Option<String>,
    /// Base URL the deep-clean endpoint path is joined to.
    pub api_base_url: String,

    pub request_timeout: Duration,
    pub user_agent: String,

    /// Path of the TOML file this configuration was loaded from, if any.
    pub loaded_config_path: Option<String>,
}

impl Config {
    fn build_default() -> Self {
        Config {
            api_key: None,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(10),
            user_agent: format!("listwise/{}", env!("CARGO_PKG_VERSION")),
            loaded_config_path: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::build_default()
    }
}
