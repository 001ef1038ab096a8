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

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One cryptocurrency as quoted in a single listings snapshot.
///
/// The quote values are already converted to the configured currency; the
/// provider's `cmc_rank` carries over as `rank` and is unique within a
/// snapshot, ordered by descending market capitalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetRecord {
  /// Ticker symbol, upper case (e.g. "BTC")
  pub symbol: String,

  /// Full asset name (e.g. "Bitcoin")
  pub name: String,

  /// Provider market-cap rank, 1-based
  pub rank: u32,

  /// Current unit price in the conversion currency
  pub price: f64,

  /// Trading volume over the last 24 hours
  pub volume_24h: f64,

  /// Signed percentage price change over the last 24 hours
  pub percent_change_24h: f64,

  /// Signed percentage price change over the last 7 days, when quoted
  pub percent_change_7d: Option<f64>,

  /// Units currently in circulation
  pub circulating_supply: f64,

  /// Market capitalization in the conversion currency
  pub market_cap: f64,

  /// First listing date on the provider
  pub date_added: DateTime<Utc>,
}
