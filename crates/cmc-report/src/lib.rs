//! # cmc-report
//!
//! Report construction for CoinMarketCap listings snapshots.
//!
//! This crate turns one asset snapshot plus a small set of report settings
//! into a single structured report document:
//! - Highest-volume asset and best/worst 24h performers
//! - Simulated one-unit purchase costs (top ranked, above volume threshold)
//! - Retroactive 24h gain/loss over a simulated purchase
//! - Full-snapshot classifications (circulating supply, market cap, listing date)
//! - Percent-change leaderboards (24h gainers/losers, 7d gainers)
//!
//! The builder is a pure function of `(snapshot, settings, timestamp)`; the
//! writer persists the result as pretty JSON, overwriting the previous run.

pub mod builder;
pub mod error;
pub mod report;
pub mod settings;
pub mod writer;

// Re-export commonly used types
pub use builder::build_report;
pub use error::{ReportError, ReportResult};
pub use report::{
  AssetChange, AssetPrice, AssetVolume, ChangeEntry, ListedEntry, MarketCapEntry,
  PercentChangeLeaders, Report, RetroactiveChange, SupplyEntry, ThresholdCost, UnitCost,
};
pub use settings::ReportSettings;
pub use writer::{ReportWriter, DEFAULT_REPORT_PATH};
