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

//! Snapshot statistics: one pure pass from asset records to a report

use crate::error::{ReportError, ReportResult};
use crate::report::{
  AssetChange, AssetPrice, AssetVolume, ChangeEntry, ListedEntry, MarketCapEntry,
  PercentChangeLeaders, Report, RetroactiveChange, SupplyEntry, ThresholdCost, UnitCost,
};
use crate::settings::ReportSettings;
use chrono::{DateTime, Utc};
use cmc_core::AssetRecord;
use tracing::debug;

/// Build a report from one listings snapshot.
///
/// A pure function of `(assets, settings, retrieved_at)`: every metric is
/// computed independently from the same immutable snapshot and all
/// orderings are total, so the same inputs always produce the same report.
///
/// `ranking_count` and `purchase_count` larger than the snapshot clamp to
/// the snapshot size.
///
/// # Errors
///
/// Returns `ReportError::EmptySnapshot` for an empty snapshot and
/// `ReportError::InvalidField` when a numeric field is non-finite or
/// negative where non-negativity is required.
pub fn build_report(
  assets: &[AssetRecord],
  settings: &ReportSettings,
  retrieved_at: DateTime<Utc>,
) -> ReportResult<Report> {
  validate(assets)?;

  // Rank-limited metrics select on the provider's rank field; the rank is
  // never re-derived from market cap.
  let mut by_rank: Vec<&AssetRecord> = assets.iter().collect();
  by_rank.sort_by(|a, b| a.rank.cmp(&b.rank));

  Ok(Report {
    retrieved_at,
    highest_volume_24h: highest_volume(assets),
    best_performer_24h: best_performer(assets),
    worst_performer_24h: worst_performer(assets),
    top_ranked_unit_cost: top_ranked_unit_cost(&by_rank, settings.ranking_count),
    above_threshold_unit_cost: above_threshold_unit_cost(&by_rank, settings.max_threshold_volume),
    retroactive_change_24h: retroactive_change(&by_rank, settings.purchase_count),
    percent_change_leaders: percent_change_leaders(assets, settings.ranking_count),
    circulating_supply_ranking: circulating_supply_ranking(assets),
    market_cap_ranking: market_cap_ranking(assets),
    date_added_ranking: date_added_ranking(assets),
  })
}

fn validate(assets: &[AssetRecord]) -> ReportResult<()> {
  if assets.is_empty() {
    return Err(ReportError::EmptySnapshot);
  }

  for asset in assets {
    check_field(asset, "price", asset.price, true)?;
    check_field(asset, "volume_24h", asset.volume_24h, true)?;
    check_field(asset, "percent_change_24h", asset.percent_change_24h, false)?;
    check_field(asset, "circulating_supply", asset.circulating_supply, true)?;
    check_field(asset, "market_cap", asset.market_cap, true)?;
    if let Some(change) = asset.percent_change_7d {
      check_field(asset, "percent_change_7d", change, false)?;
    }
  }

  Ok(())
}

fn check_field(
  asset: &AssetRecord,
  field: &'static str,
  value: f64,
  non_negative: bool,
) -> ReportResult<()> {
  if !value.is_finite() || (non_negative && value < 0.0) {
    return Err(ReportError::InvalidField { symbol: asset.symbol.clone(), field, value });
  }
  Ok(())
}

/// The asset with maximum 24h volume; ties go to the lowest rank.
fn highest_volume(assets: &[AssetRecord]) -> AssetVolume {
  let top = assets
    .iter()
    .max_by(|a, b| a.volume_24h.total_cmp(&b.volume_24h).then_with(|| b.rank.cmp(&a.rank)))
    .expect("snapshot validated as non-empty");

  AssetVolume { symbol: top.symbol.clone(), name: top.name.clone(), volume_24h: top.volume_24h }
}

/// The asset with maximum 24h percent change; ties go to the lowest rank.
fn best_performer(assets: &[AssetRecord]) -> AssetChange {
  let best = assets
    .iter()
    .max_by(|a, b| {
      a.percent_change_24h.total_cmp(&b.percent_change_24h).then_with(|| b.rank.cmp(&a.rank))
    })
    .expect("snapshot validated as non-empty");

  AssetChange {
    symbol: best.symbol.clone(),
    name: best.name.clone(),
    percent_change_24h: best.percent_change_24h,
  }
}

/// The asset with minimum 24h percent change; ties go to the lowest rank.
fn worst_performer(assets: &[AssetRecord]) -> AssetChange {
  let worst = assets
    .iter()
    .min_by(|a, b| {
      a.percent_change_24h.total_cmp(&b.percent_change_24h).then_with(|| a.rank.cmp(&b.rank))
    })
    .expect("snapshot validated as non-empty");

  AssetChange {
    symbol: worst.symbol.clone(),
    name: worst.name.clone(),
    percent_change_24h: worst.percent_change_24h,
  }
}

fn top_ranked_unit_cost(by_rank: &[&AssetRecord], ranking_count: usize) -> UnitCost {
  let count = ranking_count.min(by_rank.len());
  let assets: Vec<AssetPrice> = by_rank[..count]
    .iter()
    .map(|a| AssetPrice { symbol: a.symbol.clone(), price: a.price })
    .collect();
  let total = assets.iter().map(|a| a.price).sum();

  UnitCost { total, assets }
}

fn above_threshold_unit_cost(by_rank: &[&AssetRecord], threshold: f64) -> ThresholdCost {
  // Strictly greater than the threshold; an empty match is a valid result.
  let assets: Vec<AssetPrice> = by_rank
    .iter()
    .filter(|a| a.volume_24h > threshold)
    .map(|a| AssetPrice { symbol: a.symbol.clone(), price: a.price })
    .collect();
  let total = assets.iter().map(|a| a.price).sum();

  ThresholdCost { threshold, total, assets }
}

/// Aggregate 24h gain/loss over a simulated one-unit purchase of the top
/// `purchase_count` assets, made one day earlier.
///
/// The yesterday price is reconstructed by inverting the 24h change:
/// `price / (1 + percent_change_24h / 100)`. A -100% change has no finite
/// inverse, so such assets are dropped from both sums and annotated.
fn retroactive_change(by_rank: &[&AssetRecord], purchase_count: usize) -> RetroactiveChange {
  let count = purchase_count.min(by_rank.len());
  let mut cost_today = 0.0;
  let mut cost_yesterday = 0.0;
  let mut excluded: Vec<String> = Vec::new();

  for asset in &by_rank[..count] {
    let divisor = 1.0 + asset.percent_change_24h / 100.0;
    if divisor == 0.0 {
      debug!("Excluding {} from retroactive metric: 24h change is -100%", asset.symbol);
      excluded.push(asset.symbol.clone());
      continue;
    }
    cost_today += asset.price;
    cost_yesterday += asset.price / divisor;
  }

  let mut notes: Vec<String> = Vec::new();
  if !excluded.is_empty() {
    notes.push(format!(
      "excluded {}: a -100% 24h change makes the yesterday price undefined",
      excluded.join(", ")
    ));
  }

  let percent = if cost_yesterday > 0.0 {
    Some((cost_today - cost_yesterday) / cost_yesterday * 100.0)
  } else {
    notes.push("aggregate percent undefined: reconstructed yesterday cost is zero".to_string());
    None
  };

  let note = if notes.is_empty() { None } else { Some(notes.join("; ")) };

  RetroactiveChange { percent, cost_today, cost_yesterday, excluded, note }
}

fn percent_change_leaders(assets: &[AssetRecord], ranking_count: usize) -> PercentChangeLeaders {
  let mut desc_24h: Vec<&AssetRecord> = assets.iter().collect();
  desc_24h.sort_by(|a, b| {
    b.percent_change_24h.total_cmp(&a.percent_change_24h).then_with(|| a.symbol.cmp(&b.symbol))
  });

  let mut asc_24h: Vec<&AssetRecord> = assets.iter().collect();
  asc_24h.sort_by(|a, b| {
    a.percent_change_24h.total_cmp(&b.percent_change_24h).then_with(|| a.symbol.cmp(&b.symbol))
  });

  // Assets without a 7d quote simply do not compete on the 7d board.
  let mut desc_7d: Vec<(&AssetRecord, f64)> =
    assets.iter().filter_map(|a| a.percent_change_7d.map(|change| (a, change))).collect();
  desc_7d.sort_by(|(a, ca), (b, cb)| cb.total_cmp(ca).then_with(|| a.symbol.cmp(&b.symbol)));

  PercentChangeLeaders {
    gainers_24h: desc_24h
      .iter()
      .take(ranking_count)
      .map(|a| ChangeEntry { symbol: a.symbol.clone(), percent_change: a.percent_change_24h })
      .collect(),
    losers_24h: asc_24h
      .iter()
      .take(ranking_count)
      .map(|a| ChangeEntry { symbol: a.symbol.clone(), percent_change: a.percent_change_24h })
      .collect(),
    gainers_7d: desc_7d
      .iter()
      .take(ranking_count)
      .map(|(a, change)| ChangeEntry { symbol: a.symbol.clone(), percent_change: *change })
      .collect(),
  }
}

/// Full snapshot, descending by circulating supply, ties by symbol.
fn circulating_supply_ranking(assets: &[AssetRecord]) -> Vec<SupplyEntry> {
  let mut sorted: Vec<&AssetRecord> = assets.iter().collect();
  sorted.sort_by(|a, b| {
    b.circulating_supply.total_cmp(&a.circulating_supply).then_with(|| a.symbol.cmp(&b.symbol))
  });

  sorted
    .into_iter()
    .map(|a| SupplyEntry { symbol: a.symbol.clone(), circulating_supply: a.circulating_supply })
    .collect()
}

/// Full snapshot, descending by market cap, ties by symbol.
///
/// Sorted independently of the provider rank as a cross-check; the input
/// order is never assumed to be market-cap order.
fn market_cap_ranking(assets: &[AssetRecord]) -> Vec<MarketCapEntry> {
  let mut sorted: Vec<&AssetRecord> = assets.iter().collect();
  sorted.sort_by(|a, b| b.market_cap.total_cmp(&a.market_cap).then_with(|| a.symbol.cmp(&b.symbol)));

  sorted
    .into_iter()
    .map(|a| MarketCapEntry { symbol: a.symbol.clone(), market_cap: a.market_cap })
    .collect()
}

/// Full snapshot, ascending by first listing date, ties by symbol.
fn date_added_ranking(assets: &[AssetRecord]) -> Vec<ListedEntry> {
  let mut sorted: Vec<&AssetRecord> = assets.iter().collect();
  sorted.sort_by(|a, b| a.date_added.cmp(&b.date_added).then_with(|| a.symbol.cmp(&b.symbol)));

  sorted
    .into_iter()
    .map(|a| ListedEntry { symbol: a.symbol.clone(), date_added: a.date_added })
    .collect()
}
