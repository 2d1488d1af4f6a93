// src/config.rs

use std::env;

pub const DEFAULT_BASE_URL: &str = "https://sharpapi.com/api/v1";

/// Client version tag, sent as the User-Agent header on every request.
pub const USER_AGENT: &str = concat!(
    "sharpapi-rust-travel-review-sentiment/",
    env!("CARGO_PKG_VERSION")
);

/// Everything a core client needs to talk to the API. Construction never
/// touches the network.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub api_key: String,
    pub base_url: String,
    pub user_agent: String,
}

impl ClientConfig {
    pub fn new(api_key: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: USER_AGENT.to_string(),
        }
    }

    /// Overrides the production endpoint, e.g. for a staging deployment.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = env::var("SHARPAPI_API_KEY")
            .map_err(|_| ConfigError::MissingRequired("SHARPAPI_API_KEY".to_string()))?;

        let config = match env::var("SHARPAPI_BASE_URL") {
            Ok(url) => Self::new(&api_key).with_base_url(&url),
            Err(_) => Self::new(&api_key),
        };

        tracing::debug!(base_url = %config.base_url, "loaded client configuration");
        Ok(config)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingRequired(String),
}
