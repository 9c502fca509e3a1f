//! Connection settings for a news source.

use std::time::Duration;

use url::Url;
use voca_core::{Error, Result};

pub const DEFAULT_BASE_URL: &str = "https://apnews.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct NewsConfig {
    /// Homepage of the source; relative article links are resolved against it.
    pub base_url: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for NewsConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: format!("voca/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl NewsConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> Result<Url> {
        Url::parse(&self.base_url).map_err(|e| Error::InvalidUrl(format!("{}: {}", self.base_url, e)))
    }

    pub fn http_client(&self) -> Result<reqwest::Client> {
        Ok(reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent.clone())
            .build()?)
    }
}
