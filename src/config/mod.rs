#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::{ApiError, Result};
use crate::utils::validation::{validate_url, Validate};

pub const BACKEND_URL_ENV: &str = "BACKEND_URL";

/// Backend location, fixed once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    backend_url: String,
}

impl ClientConfig {
    pub fn new(backend_url: impl Into<String>) -> Result<Self> {
        let config = Self {
            backend_url: backend_url.into(),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn from_env() -> Result<Self> {
        let url = std::env::var(BACKEND_URL_ENV).map_err(|_| ApiError::Config {
            field: BACKEND_URL_ENV.to_string(),
            message: format!("{} environment variable is required", BACKEND_URL_ENV),
        })?;
        Self::new(url)
    }

    pub fn from_provider(provider: &impl ConfigProvider) -> Result<Self> {
        Self::new(provider.backend_url())
    }

    /// `<backend_url>/api`, without a doubled slash.
    pub fn api_base(&self) -> String {
        format!("{}/api", self.backend_url.trim_end_matches('/'))
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base(), path.trim_start_matches('/'))
    }
}

impl ConfigProvider for ClientConfig {
    fn backend_url(&self) -> &str {
        &self.backend_url
    }
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<()> {
        validate_url("backend_url", &self.backend_url)
    }
}
