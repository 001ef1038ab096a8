/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! High level CoinMarketCap client

use crate::models::CmcResponse;
use crate::transport::Transport;
use cmc_core::{AssetRecord, Config, ListingSort, Result};
use governor::{
  Quota, RateLimiter,
  clock::DefaultClock,
  middleware::NoOpMiddleware,
  state::{InMemoryState, NotKeyed},
};
use std::collections::HashMap;
use std::num::NonZeroU32;
use std::sync::Arc;
use tracing::{info, instrument};

/// Main CoinMarketCap API client
///
/// Wraps the transport layer with rate limiting and exposes the listings
/// endpoint as typed domain records. Handles authentication and transport
/// concerns automatically.
///
/// # Examples
///
/// ```rust,no_run
/// use cmc_client::CmcClient;
/// use cmc_core::Config;
///
/// # async fn run() -> cmc_core::Result<()> {
/// let config = Config::from_env()?;
/// let client = CmcClient::new(config)?;
/// let assets = client.listings().await?;
/// println!("snapshot holds {} assets", assets.len());
/// # Ok(())
/// # }
/// ```
pub struct CmcClient {
  rate_limiter: Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock, NoOpMiddleware>>,
  transport: Arc<Transport>,
  convert: String,
  listing_limit: u32,
}

impl CmcClient {
  /// Create a new CoinMarketCap API client
  ///
  /// # Arguments
  ///
  /// * `config` - Configuration containing API key and other settings
  ///
  /// # Errors
  ///
  /// Returns an error if the HTTP client cannot be created.
  pub fn new(config: Config) -> Result<Self> {
    let rate_limit = config.rate_limit;

    // Ensure rate_limit is non-zero, fallback to default if invalid
    let rate_limit_value = NonZeroU32::new(rate_limit).unwrap_or_else(|| {
      NonZeroU32::new(cmc_core::DEFAULT_RATE_LIMIT).expect("DEFAULT_RATE_LIMIT must be non-zero")
    });
    let quota = Quota::per_minute(rate_limit_value);
    let rate_limiter = Arc::new(RateLimiter::direct(quota));

    let transport = Arc::new(Transport::new(&config)?);

    Ok(Self { rate_limiter, transport, convert: config.convert, listing_limit: config.listing_limit })
  }

  /// Fetch the latest listings snapshot, ordered by provider rank.
  ///
  /// Requests `listing_limit` assets quoted in the configured conversion
  /// currency, sorted by market cap so the provider rank order is preserved
  /// in the returned sequence.
  #[instrument(skip(self))]
  pub async fn listings(&self) -> Result<Vec<AssetRecord>> {
    self.rate_limiter.until_ready().await;

    let mut params = HashMap::new();
    params.insert("start".to_string(), "1".to_string());
    params.insert("limit".to_string(), self.listing_limit.to_string());
    params.insert("convert".to_string(), self.convert.clone());
    params.insert("sort".to_string(), ListingSort::MarketCap.to_string());

    let response: CmcResponse = self.transport.get(cmc_core::LISTINGS_PATH, params).await?;
    let assets = response.into_assets(&self.convert)?;

    info!("Successfully processed {} assets from CoinMarketCap", assets.len());
    Ok(assets)
  }

  /// The conversion currency all quotes are denominated in
  pub fn convert(&self) -> &str {
    &self.convert
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use wiremock::matchers::{header, method, path, query_param};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  fn test_config(base_url: String) -> Config {
    let mut config = Config::default_with_key("test_key".to_string());
    config.base_url = base_url;
    config.listing_limit = 2;
    config
  }

  fn listing_body() -> serde_json::Value {
    serde_json::json!({
      "status": {
        "timestamp": "2026-08-01T10:00:00.000Z",
        "error_code": 0,
        "error_message": null,
        "elapsed": 10,
        "credit_count": 1,
        "notice": null
      },
      "data": [
        {
          "id": 1,
          "name": "Bitcoin",
          "symbol": "BTC",
          "slug": "bitcoin",
          "num_market_pairs": 500,
          "date_added": "2013-04-28T00:00:00.000Z",
          "max_supply": 21000000.0,
          "circulating_supply": 19000000.0,
          "total_supply": 19000000.0,
          "cmc_rank": 1,
          "last_updated": "2026-08-01T10:00:00.000Z",
          "quote": {
            "USD": {
              "price": 45000.0,
              "volume_24h": 20000000000.0,
              "percent_change_24h": 2.5,
              "percent_change_7d": -1.2,
              "market_cap": 855000000000.0,
              "last_updated": "2026-08-01T10:00:00.000Z"
            }
          }
        },
        {
          "id": 1027,
          "name": "Ethereum",
          "symbol": "ETH",
          "slug": "ethereum",
          "num_market_pairs": 400,
          "date_added": "2015-08-07T00:00:00.000Z",
          "max_supply": null,
          "circulating_supply": 120000000.0,
          "total_supply": 120000000.0,
          "cmc_rank": 2,
          "last_updated": "2026-08-01T10:00:00.000Z",
          "quote": {
            "USD": {
              "price": 2500.0,
              "volume_24h": 9000000000.0,
              "percent_change_24h": -0.5,
              "percent_change_7d": 4.0,
              "market_cap": 300000000000.0,
              "last_updated": "2026-08-01T10:00:00.000Z"
            }
          }
        }
      ]
    })
  }

  #[tokio::test]
  async fn test_listings_fetch_and_convert() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
      .and(path(cmc_core::LISTINGS_PATH))
      .and(header("X-CMC_PRO_API_KEY", "test_key"))
      .and(query_param("convert", "USD"))
      .and(query_param("limit", "2"))
      .respond_with(ResponseTemplate::new(200).set_body_json(listing_body()))
      .mount(&server)
      .await;

    let client = CmcClient::new(test_config(server.uri())).unwrap();
    let assets = client.listings().await.unwrap();

    assert_eq!(assets.len(), 2);
    assert_eq!(assets[0].symbol, "BTC");
    assert_eq!(assets[1].symbol, "ETH");
    assert_eq!(assets[1].rank, 2);
  }

  #[tokio::test]
  async fn test_listings_unauthorized() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
      .and(path(cmc_core::LISTINGS_PATH))
      .respond_with(ResponseTemplate::new(401))
      .mount(&server)
      .await;

    let client = CmcClient::new(test_config(server.uri())).unwrap();
    let result = client.listings().await;

    assert!(matches!(result, Err(cmc_core::Error::ApiKey(_))));
  }

  #[tokio::test]
  async fn test_listings_rate_limited() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
      .and(path(cmc_core::LISTINGS_PATH))
      .respond_with(ResponseTemplate::new(429))
      .mount(&server)
      .await;

    let client = CmcClient::new(test_config(server.uri())).unwrap();
    let result = client.listings().await;

    assert!(matches!(result, Err(cmc_core::Error::RateLimit(_))));
  }
}
