//! Source abstraction for the report pipeline

use crate::client::CmcClient;
use async_trait::async_trait;
use cmc_core::{AssetRecord, Result};

/// A source of asset snapshots for the report pipeline.
///
/// The reporting side only needs an ordered sequence of `AssetRecord`s, so
/// the concrete provider can be swapped out (or mocked) behind this trait.
#[async_trait]
pub trait AssetProvider: Send + Sync {
  /// Fetch the current asset snapshot, ordered by provider rank
  async fn fetch_assets(&self) -> Result<Vec<AssetRecord>>;

  /// Get provider name for logging/tracking
  fn source_name(&self) -> &'static str;
}

#[async_trait]
impl AssetProvider for CmcClient {
  async fn fetch_assets(&self) -> Result<Vec<AssetRecord>> {
    self.listings().await
  }

  fn source_name(&self) -> &'static str {
    "CoinMarketCap"
  }
}
