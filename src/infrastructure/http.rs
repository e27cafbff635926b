//! Blocking HTTP client shared by the providers

use crate::error::{ReadingsError, Result};
use crate::infrastructure::Config;
use reqwest::blocking::Client;
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ReadingsError::Config(format!("Failed to build HTTP client: {}", e)))?;
        Ok(HttpClient { client })
    }

    /// GET a URL and return its body, treating non-2xx statuses as errors
    pub fn get_text(&self, url: &str) -> Result<String> {
        debug!(url, "GET");
        let response = self
            .client
            .get(url)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| ReadingsError::http(url, e))?;
        response.text().map_err(|e| ReadingsError::http(url, e))
    }
}
