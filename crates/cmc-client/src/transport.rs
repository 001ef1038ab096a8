//! HTTP transport layer for CoinMarketCap API requests

use cmc_core::{Config, Error, Result};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, error, info, instrument};
use url::Url;

/// HTTP transport layer for making requests to the CoinMarketCap API
pub struct Transport {
    client: Client,
    base_url: String,
    api_key: String,
    timeout: Duration,
}

impl Transport {
    /// Create a new transport instance
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent("cmc-client/0.1.0")
            .build()
            .map_err(|e| Error::Http(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
            timeout: Duration::from_secs(config.timeout_secs),
        })
    }

    /// Create a mock transport for testing
    #[cfg(test)]
    pub fn new_mock(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
            api_key: "test_key".to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Make a GET request to the CoinMarketCap API
    ///
    /// # Arguments
    ///
    /// * `path` - The endpoint path (e.g. `/v1/cryptocurrency/listings/latest`)
    /// * `params` - Query parameters for the request
    ///
    /// # Returns
    ///
    /// Returns a `Result` containing the deserialized response or an error.
    /// One attempt per call: failures propagate to the caller unchanged.
    #[instrument(skip(self, params), fields(path = %path))]
    pub async fn get<T>(&self, path: &str, params: HashMap<String, String>) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = self.build_url(path, params)?;
        debug!("Making request to: {}", url);

        let response = self.make_request(&url).await?;
        let text = response.text().await.map_err(|e| {
            Error::Http(format!("Failed to read response body: {}", e))
        })?;

        debug!("Response body length: {} bytes", text.len());

        match serde_json::from_str::<T>(&text) {
            Ok(data) => {
                info!("Successfully parsed response for path: {}", path);
                Ok(data)
            }
            Err(e) => {
                error!("Failed to parse JSON response: {}", e);
                Err(Error::Parse(format!(
                    "Failed to parse response: {}. Response: {}",
                    e,
                    &text[..std::cmp::min(200, text.len())]
                )))
            }
        }
    }

    /// Build the full URL for an API request
    fn build_url(&self, path: &str, params: HashMap<String, String>) -> Result<String> {
        let mut url = Url::parse(&format!("{}{}", self.base_url, path))
            .map_err(|e| Error::Http(format!("Invalid base URL: {}", e)))?;

        // Add all parameters to the URL
        {
            let mut query_pairs = url.query_pairs_mut();
            for (key, value) in params {
                query_pairs.append_pair(&key, &value);
            }
        }

        Ok(url.to_string())
    }

    /// Make the actual HTTP request
    async fn make_request(&self, url: &str) -> Result<Response> {
        let response = self
            .client
            .get(url)
            .header("X-CMC_PRO_API_KEY", &self.api_key)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| Error::Http(format!("Request failed: {}", e)))?;

        let status = response.status();

        if status.is_success() {
            debug!("Request successful with status: {}", status);
            return Ok(response);
        }

        error!("Request failed with status: {}", status);
        match status.as_u16() {
            401 => Err(Error::ApiKey("Invalid API key or unauthorized request".to_string())),
            429 => Err(Error::RateLimit("API call frequency limit exceeded".to_string())),
            _ => Err(Error::Http(format!("HTTP error: {}", status))),
        }
    }

    /// Get the base URL being used
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get request timeout duration
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_build_url() {
        let transport = Transport::new_mock("https://mock.coinmarketcap.com".to_string());
        let mut params = HashMap::new();
        params.insert("convert".to_string(), "USD".to_string());
        params.insert("limit".to_string(), "100".to_string());

        let url = transport
            .build_url(cmc_core::LISTINGS_PATH, params)
            .unwrap();

        assert!(url.contains("convert=USD"));
        assert!(url.contains("limit=100"));
        assert!(url.starts_with("https://mock.coinmarketcap.com/v1/cryptocurrency/listings/latest"));
    }

    #[test]
    fn test_build_url_rejects_bad_base() {
        let transport = Transport::new_mock("not a url".to_string());
        let result = transport.build_url(cmc_core::LISTINGS_PATH, HashMap::new());
        assert!(matches!(result, Err(Error::Http(_))));
    }
}
