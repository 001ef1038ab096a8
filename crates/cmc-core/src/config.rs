//! Configuration management for the CoinMarketCap client

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::env;
use dotenvy::dotenv;

/// Main configuration struct for the CoinMarketCap client
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
  /// CoinMarketCap Pro API key
  pub api_key: String,

  /// API rate limit (requests per minute)
  pub rate_limit: u32,

  /// Request timeout in seconds
  pub timeout_secs: u64,

  /// Base URL for the CoinMarketCap API
  pub base_url: String,

  /// Conversion currency for all quotes (e.g. "USD")
  pub convert: String,

  /// Number of listings requested per snapshot
  pub listing_limit: u32,
}

impl Config {
  /// Load configuration from environment variables
  pub fn from_env() -> Result<Self> {

    dotenv().ok();

    let api_key = env::var("CMC_API_KEY")
      .map_err(|_| Error::ApiKey("CMC_API_KEY not set".to_string()))?;

    let rate_limit = env::var("CMC_RATE_LIMIT")
      .unwrap_or_else(|_| "30".to_string())
      .parse()
      .map_err(|_| Error::Config("Invalid CMC_RATE_LIMIT".to_string()))?;

    let timeout_secs = env::var("CMC_TIMEOUT_SECS")
      .unwrap_or_else(|_| "30".to_string())
      .parse()
      .map_err(|_| Error::Config("Invalid CMC_TIMEOUT_SECS".to_string()))?;

    let convert = env::var("CMC_CONVERT").unwrap_or_else(|_| crate::DEFAULT_CONVERT.to_string());

    let listing_limit = env::var("CMC_LISTING_LIMIT")
      .unwrap_or_else(|_| "100".to_string())
      .parse()
      .map_err(|_| Error::Config("Invalid CMC_LISTING_LIMIT".to_string()))?;

    let base_url = env::var("CMC_BASE_URL").unwrap_or_else(|_| crate::CMC_BASE_URL.to_string());

    Ok(Config { api_key, rate_limit, timeout_secs, base_url, convert, listing_limit })
  }

  /// Create a config with default values (for testing)
  pub fn default_with_key(api_key: String) -> Self {
    Config {
      api_key,
      rate_limit: crate::DEFAULT_RATE_LIMIT,
      timeout_secs: 30,
      base_url: crate::CMC_BASE_URL.to_string(),
      convert: crate::DEFAULT_CONVERT.to_string(),
      listing_limit: crate::DEFAULT_LISTING_LIMIT,
    }
  }
}
