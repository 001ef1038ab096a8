use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A full snapshot report.
///
/// This struct is the final output of `build_report` and serves as the
/// serialization contract for the report file: field order here is the
/// field order in the JSON document, so identical inputs serialize to
/// byte-identical output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
  /// Timestamp of the run that produced this report
  pub retrieved_at: DateTime<Utc>,

  // I. Single-asset highlights
  pub highest_volume_24h: AssetVolume,
  pub best_performer_24h: AssetChange,
  pub worst_performer_24h: AssetChange,

  // II. Simulated one-unit purchases
  pub top_ranked_unit_cost: UnitCost,
  pub above_threshold_unit_cost: ThresholdCost,
  pub retroactive_change_24h: RetroactiveChange,

  // III. Leaderboards and classifications
  pub percent_change_leaders: PercentChangeLeaders,
  pub circulating_supply_ranking: Vec<SupplyEntry>,
  pub market_cap_ranking: Vec<MarketCapEntry>,
  pub date_added_ranking: Vec<ListedEntry>,
}

/// The asset with the largest 24h trading volume
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetVolume {
  pub symbol: String,
  pub name: String,
  pub volume_24h: f64,
}

/// A single asset picked by its 24h percent change
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetChange {
  pub symbol: String,
  pub name: String,
  pub percent_change_24h: f64,
}

/// One unit price line in a simulated purchase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetPrice {
  pub symbol: String,
  pub price: f64,
}

/// Cost of one unit of each of the top-ranked assets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitCost {
  pub total: f64,
  pub assets: Vec<AssetPrice>,
}

/// Cost of one unit of every asset above the volume threshold
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdCost {
  pub threshold: f64,
  pub total: f64,
  pub assets: Vec<AssetPrice>,
}

/// Aggregate gain/loss had the top assets been bought one day earlier.
///
/// `percent` is `None` when the aggregate is undefined; `excluded` lists
/// assets whose yesterday price cannot be reconstructed (a -100% 24h
/// change), and `note` explains any of those conditions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetroactiveChange {
  pub percent: Option<f64>,
  pub cost_today: f64,
  pub cost_yesterday: f64,
  pub excluded: Vec<String>,
  pub note: Option<String>,
}

/// One row of a percent-change leaderboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeEntry {
  pub symbol: String,
  pub percent_change: f64,
}

/// Percent-change leaderboards over the snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PercentChangeLeaders {
  pub gainers_24h: Vec<ChangeEntry>,
  pub losers_24h: Vec<ChangeEntry>,
  pub gainers_7d: Vec<ChangeEntry>,
}

/// One row of the circulating-supply classification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplyEntry {
  pub symbol: String,
  pub circulating_supply: f64,
}

/// One row of the market-cap classification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketCapEntry {
  pub symbol: String,
  pub market_cap: f64,
}

/// One row of the chronological-addition ranking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListedEntry {
  pub symbol: String,
  pub date_added: DateTime<Utc>,
}
