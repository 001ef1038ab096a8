/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-dot-]browne[-at-]dwightjbrowne[-dot-]com
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

//! Wire types for the CoinMarketCap listings endpoint

use chrono::{DateTime, Utc};
use cmc_core::{AssetRecord, Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct CmcResponse {
  pub status: CmcStatus,
  pub data: Vec<CmcCryptocurrency>,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct CmcStatus {
  pub timestamp: String,
  pub error_code: i32,
  pub error_message: Option<String>,
  pub elapsed: i32,
  pub credit_count: i32,
  pub notice: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct CmcCryptocurrency {
  pub id: u64,
  pub name: String,
  pub symbol: String,
  pub slug: String,
  pub num_market_pairs: Option<u32>,
  pub date_added: String,
  pub max_supply: Option<f64>,
  pub circulating_supply: Option<f64>,
  pub total_supply: Option<f64>,
  pub cmc_rank: Option<u32>,
  pub last_updated: String,
  pub quote: HashMap<String, CmcQuote>,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct CmcQuote {
  pub price: Option<f64>,
  pub volume_24h: Option<f64>,
  pub volume_change_24h: Option<f64>,
  pub percent_change_1h: Option<f64>,
  pub percent_change_24h: Option<f64>,
  pub percent_change_7d: Option<f64>,
  pub market_cap: Option<f64>,
  pub market_cap_dominance: Option<f64>,
  pub last_updated: String,
}

impl CmcResponse {
  /// Check the status envelope and convert the payload into domain records.
  ///
  /// Listings without a quote for the requested conversion currency are
  /// skipped; a quote that is present but missing a required numeric field
  /// fails the whole snapshot.
  pub(crate) fn into_assets(self, convert: &str) -> Result<Vec<AssetRecord>> {
    if self.status.error_code != 0 {
      return Err(Error::Api(
        self.status.error_message.unwrap_or_else(|| "Unknown CMC error".to_string()),
      ));
    }

    let mut assets = Vec::with_capacity(self.data.len());
    for crypto in self.data {
      if let Some(asset) = crypto.into_asset(convert)? {
        assets.push(asset);
      }
    }
    Ok(assets)
  }
}

impl CmcCryptocurrency {
  fn into_asset(self, convert: &str) -> Result<Option<AssetRecord>> {
    let quote = match self.quote.get(convert) {
      Some(quote) => quote,
      None => {
        debug!("No {} quote for {}, skipping", convert, self.symbol);
        return Ok(None);
      }
    };

    let rank = self
      .cmc_rank
      .ok_or_else(|| Error::MissingField(format!("cmc_rank for {}", self.symbol)))?;
    let price =
      quote.price.ok_or_else(|| Error::MissingField(format!("quote.price for {}", self.symbol)))?;
    let volume_24h = quote
      .volume_24h
      .ok_or_else(|| Error::MissingField(format!("quote.volume_24h for {}", self.symbol)))?;
    let percent_change_24h = quote.percent_change_24h.ok_or_else(|| {
      Error::MissingField(format!("quote.percent_change_24h for {}", self.symbol))
    })?;
    let market_cap = quote
      .market_cap
      .ok_or_else(|| Error::MissingField(format!("quote.market_cap for {}", self.symbol)))?;
    let percent_change_7d = quote.percent_change_7d;
    let circulating_supply = self
      .circulating_supply
      .ok_or_else(|| Error::MissingField(format!("circulating_supply for {}", self.symbol)))?;

    let date_added = DateTime::parse_from_rfc3339(&self.date_added)?.with_timezone(&Utc);

    Ok(Some(AssetRecord {
      symbol: self.symbol.to_uppercase(),
      name: self.name,
      rank,
      price,
      volume_24h,
      percent_change_24h,
      percent_change_7d,
      circulating_supply,
      market_cap,
      date_added,
    }))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  const LISTING_FIXTURE: &str = r#"{
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
                    "max_supply": 21000000,
                    "circulating_supply": 19000000,
                    "total_supply": 19000000,
                    "cmc_rank": 1,
                    "last_updated": "2026-08-01T10:00:00.000Z",
                    "quote": {
                        "USD": {
                            "price": 45000,
                            "volume_24h": 20000000000,
                            "percent_change_24h": 2.5,
                            "percent_change_7d": -1.2,
                            "market_cap": 855000000000,
                            "last_updated": "2026-08-01T10:00:00.000Z"
                        }
                    }
                }
            ]
        }"#;

  #[test]
  fn test_listing_response_parsing() {
    let response: CmcResponse = serde_json::from_str(LISTING_FIXTURE).unwrap();
    assert_eq!(response.status.error_code, 0);
    assert_eq!(response.data.len(), 1);
    assert_eq!(response.data[0].symbol, "BTC");
  }

  #[test]
  fn test_into_assets_converts_quote() {
    let response: CmcResponse = serde_json::from_str(LISTING_FIXTURE).unwrap();
    let assets = response.into_assets("USD").unwrap();

    assert_eq!(assets.len(), 1);
    let btc = &assets[0];
    assert_eq!(btc.symbol, "BTC");
    assert_eq!(btc.rank, 1);
    assert_eq!(btc.price, 45000.0);
    assert_eq!(btc.percent_change_7d, Some(-1.2));
    assert_eq!(btc.date_added.to_rfc3339(), "2013-04-28T00:00:00+00:00");
  }

  #[test]
  fn test_into_assets_skips_missing_convert_currency() {
    let response: CmcResponse = serde_json::from_str(LISTING_FIXTURE).unwrap();
    let assets = response.into_assets("EUR").unwrap();
    assert!(assets.is_empty());
  }

  #[test]
  fn test_into_assets_error_envelope() {
    let json = r#"{
            "status": {
                "timestamp": "2026-08-01T10:00:00.000Z",
                "error_code": 1001,
                "error_message": "This API Key is invalid.",
                "elapsed": 0,
                "credit_count": 0,
                "notice": null
            },
            "data": []
        }"#;
    let response: CmcResponse = serde_json::from_str(json).unwrap();
    let result = response.into_assets("USD");

    assert!(matches!(result, Err(Error::Api(ref msg)) if msg.contains("invalid")));
  }

  #[test]
  fn test_into_asset_missing_price_fails() {
    let mut response: CmcResponse = serde_json::from_str(LISTING_FIXTURE).unwrap();
    response.data[0].quote.get_mut("USD").unwrap().price = None;
    let result = response.into_assets("USD");

    assert!(matches!(result, Err(Error::MissingField(ref f)) if f.contains("quote.price")));
  }
}
