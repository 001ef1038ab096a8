pub mod config;
pub mod error;
pub mod types;

pub use config::Config;
pub use error::{Error, Result};
pub use types::AssetRecord;

/// Sort orders accepted by the CoinMarketCap listings endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListingSort {
  MarketCap,
  Volume24h,
  Price,
  CirculatingSupply,
  DateAdded,
}

// Implement Display trait for ListingSort
impl std::fmt::Display for ListingSort {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      ListingSort::MarketCap => write!(f, "market_cap"),
      ListingSort::Volume24h => write!(f, "volume_24h"),
      ListingSort::Price => write!(f, "price"),
      ListingSort::CirculatingSupply => write!(f, "circulating_supply"),
      ListingSort::DateAdded => write!(f, "date_added"),
    }
  }
}

/// Base URL for the CoinMarketCap Pro API
pub const CMC_BASE_URL: &str = "https://pro-api.coinmarketcap.com";

/// Listings endpoint path
pub const LISTINGS_PATH: &str = "/v1/cryptocurrency/listings/latest";

/// API rate limits
pub const DEFAULT_RATE_LIMIT: u32 = 30; // requests per minute (basic tier)

/// Default conversion currency for quotes
pub const DEFAULT_CONVERT: &str = "USD";

/// Default number of listings requested per snapshot
pub const DEFAULT_LISTING_LIMIT: u32 = 100;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_listing_sort_display() {
    assert_eq!(ListingSort::MarketCap.to_string(), "market_cap");
    assert_eq!(ListingSort::DateAdded.to_string(), "date_added");
  }
}
