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

//! Trigger boundary: time-of-day scheduling for report runs

use crate::config::Config;
use anyhow::Result;
use chrono::{Duration, Local, NaiveDateTime, NaiveTime, Utc};
use cmc_client::{AssetProvider, CmcClient};
use cmc_report::{build_report, ReportSettings, ReportWriter};
use std::str::FromStr;
use tracing::{error, info};

/// How often a scheduled report recurs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepeatInterval {
  Daily,
  Weekly,
  /// Fallback cadence: every N minutes, ignoring the run time
  EveryMinutes(u32),
}

impl RepeatInterval {
  /// The period between two consecutive runs
  pub fn period(&self) -> Duration {
    match self {
      RepeatInterval::Daily => Duration::days(1),
      RepeatInterval::Weekly => Duration::days(7),
      RepeatInterval::EveryMinutes(minutes) => Duration::minutes(*minutes as i64),
    }
  }
}

impl FromStr for RepeatInterval {
  type Err = cmc_core::Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_ascii_lowercase().as_str() {
      "daily" | "day" => Ok(RepeatInterval::Daily),
      "weekly" | "week" => Ok(RepeatInterval::Weekly),
      other => other
        .parse::<u32>()
        .ok()
        .filter(|minutes| *minutes > 0)
        .map(RepeatInterval::EveryMinutes)
        .ok_or_else(|| cmc_core::Error::Config(format!("Invalid repeat interval: {}", s))),
    }
  }
}

impl std::fmt::Display for RepeatInterval {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      RepeatInterval::Daily => write!(f, "daily"),
      RepeatInterval::Weekly => write!(f, "weekly"),
      RepeatInterval::EveryMinutes(minutes) => write!(f, "every {} minutes", minutes),
    }
  }
}

/// The first scheduled occurrence strictly after `now`.
///
/// Daily and weekly schedules anchor on the configured time of day; the
/// minute fallback starts one period from now. Later occurrences advance by
/// `period()` from this anchor.
pub fn first_run(now: NaiveDateTime, run_time: NaiveTime, interval: RepeatInterval) -> NaiveDateTime {
  match interval {
    RepeatInterval::EveryMinutes(_) => now + interval.period(),
    _ => {
      let today = now.date().and_time(run_time);
      if today > now { today } else { today + Duration::days(1) }
    }
  }
}

/// One fetch -> build -> write cycle.
pub async fn run_cycle(
  provider: &dyn AssetProvider,
  settings: &ReportSettings,
  writer: &ReportWriter,
) -> Result<()> {
  info!("Fetching snapshot from {}", provider.source_name());
  let assets = provider.fetch_assets().await?;
  info!("Snapshot holds {} assets", assets.len());

  let report = build_report(&assets, settings, Utc::now())?;
  writer.write(&report)?;

  Ok(())
}

/// Produce reports forever on the configured cadence.
///
/// One run at a time; a failed cycle is logged and the schedule carries on
/// with the next occurrence.
pub async fn run_schedule(config: &Config) -> Result<()> {
  let client = CmcClient::new(config.api_config.clone())?;
  let writer = ReportWriter::new(&config.output_path);

  let mut next = first_run(Local::now().naive_local(), config.run_time, config.repeat_interval);
  info!("Running {} at {}, first report at {}", config.repeat_interval, config.run_time, next);

  loop {
    let now = Local::now().naive_local();
    if next > now {
      let wait = (next - now).to_std().unwrap_or(std::time::Duration::ZERO);
      tokio::time::sleep(wait).await;
    }

    if let Err(e) = run_cycle(&client, &config.settings, &writer).await {
      error!("Report run failed: {:#}", e);
    }

    next = next + config.repeat_interval.period();
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use async_trait::async_trait;
  use chrono::{NaiveDate, TimeZone};
  use cmc_core::AssetRecord;

  #[test]
  fn test_repeat_interval_parsing() {
    assert_eq!("daily".parse::<RepeatInterval>().unwrap(), RepeatInterval::Daily);
    assert_eq!("WEEKLY".parse::<RepeatInterval>().unwrap(), RepeatInterval::Weekly);
    assert_eq!("15".parse::<RepeatInterval>().unwrap(), RepeatInterval::EveryMinutes(15));
    assert!("0".parse::<RepeatInterval>().is_err());
    assert!("fortnightly".parse::<RepeatInterval>().is_err());
  }

  #[test]
  fn test_repeat_interval_period() {
    assert_eq!(RepeatInterval::Daily.period(), Duration::days(1));
    assert_eq!(RepeatInterval::Weekly.period(), Duration::days(7));
    assert_eq!(RepeatInterval::EveryMinutes(30).period(), Duration::minutes(30));
  }

  #[test]
  fn test_first_run_later_today() {
    let now = NaiveDate::from_ymd_opt(2026, 8, 1).unwrap().and_hms_opt(10, 0, 0).unwrap();
    let run_time = NaiveTime::from_hms_opt(16, 30, 0).unwrap();

    let next = first_run(now, run_time, RepeatInterval::Daily);
    assert_eq!(next, NaiveDate::from_ymd_opt(2026, 8, 1).unwrap().and_hms_opt(16, 30, 0).unwrap());
  }

  #[test]
  fn test_first_run_rolls_to_tomorrow() {
    let now = NaiveDate::from_ymd_opt(2026, 8, 1).unwrap().and_hms_opt(17, 0, 0).unwrap();
    let run_time = NaiveTime::from_hms_opt(16, 30, 0).unwrap();

    let next = first_run(now, run_time, RepeatInterval::Weekly);
    assert_eq!(next, NaiveDate::from_ymd_opt(2026, 8, 2).unwrap().and_hms_opt(16, 30, 0).unwrap());
  }

  #[test]
  fn test_first_run_minutes_fallback() {
    let now = NaiveDate::from_ymd_opt(2026, 8, 1).unwrap().and_hms_opt(10, 0, 0).unwrap();
    let run_time = NaiveTime::from_hms_opt(16, 30, 0).unwrap();

    let next = first_run(now, run_time, RepeatInterval::EveryMinutes(15));
    assert_eq!(next, now + Duration::minutes(15));
  }

  struct StubProvider;

  #[async_trait]
  impl AssetProvider for StubProvider {
    async fn fetch_assets(&self) -> cmc_core::Result<Vec<AssetRecord>> {
      Ok(vec![AssetRecord {
        symbol: "BTC".to_string(),
        name: "Bitcoin".to_string(),
        rank: 1,
        price: 45000.0,
        volume_24h: 20_000_000_000.0,
        percent_change_24h: 2.5,
        percent_change_7d: Some(-1.2),
        circulating_supply: 19_000_000.0,
        market_cap: 855_000_000_000.0,
        date_added: Utc.with_ymd_and_hms(2013, 4, 28, 0, 0, 0).unwrap(),
      }])
    }

    fn source_name(&self) -> &'static str {
      "stub"
    }
  }

  #[tokio::test]
  async fn test_run_cycle_writes_report() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report/report.json");
    let writer = ReportWriter::new(&path);

    run_cycle(&StubProvider, &ReportSettings::default(), &writer).await.unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("\"highest_volume_24h\""));
    assert!(text.contains("BTC"));
  }

  struct FailingProvider;

  #[async_trait]
  impl AssetProvider for FailingProvider {
    async fn fetch_assets(&self) -> cmc_core::Result<Vec<AssetRecord>> {
      Err(cmc_core::Error::Http("connection refused".to_string()))
    }

    fn source_name(&self) -> &'static str {
      "stub"
    }
  }

  #[tokio::test]
  async fn test_run_cycle_propagates_fetch_failure() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.json");
    let writer = ReportWriter::new(&path);

    let result = run_cycle(&FailingProvider, &ReportSettings::default(), &writer).await;

    assert!(result.is_err());
    assert!(!path.exists());
  }
}
