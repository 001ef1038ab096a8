use crate::scheduler::RepeatInterval;
use anyhow::{Context, Result};
use chrono::NaiveTime;
use cmc_core::Config as CoreConfig;
use cmc_report::ReportSettings;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
  pub api_config: CoreConfig,
  pub settings: ReportSettings,
  pub output_path: PathBuf,
  pub run_time: NaiveTime,
  pub repeat_interval: RepeatInterval,
}

impl Config {
  pub fn from_env() -> Result<Self> {
    let api_config =
      CoreConfig::from_env().context("Failed to load CoinMarketCap API configuration")?;

    let max_threshold_volume = env::var("REPORT_MAX_THRESHOLD_VOLUME")
      .unwrap_or_else(|_| "76000000".to_string())
      .parse()
      .context("Invalid REPORT_MAX_THRESHOLD_VOLUME")?;

    let ranking_count = env::var("REPORT_RANKING_COUNT")
      .unwrap_or_else(|_| "10".to_string())
      .parse()
      .context("Invalid REPORT_RANKING_COUNT")?;

    let purchase_count = env::var("REPORT_PURCHASE_COUNT")
      .unwrap_or_else(|_| "20".to_string())
      .parse()
      .context("Invalid REPORT_PURCHASE_COUNT")?;

    let output_path = env::var("REPORT_OUTPUT_PATH")
      .unwrap_or_else(|_| cmc_report::DEFAULT_REPORT_PATH.to_string())
      .into();

    let run_time = NaiveTime::parse_from_str(
      &env::var("REPORT_RUN_TIME").unwrap_or_else(|_| "16:30".to_string()),
      "%H:%M",
    )
    .context("Invalid REPORT_RUN_TIME, expected HH:MM")?;

    let repeat_interval = env::var("REPORT_REPEAT_INTERVAL")
      .unwrap_or_else(|_| "daily".to_string())
      .parse()
      .context("Invalid REPORT_REPEAT_INTERVAL")?;

    let settings = ReportSettings { max_threshold_volume, ranking_count, purchase_count };

    Ok(Self { api_config, settings, output_path, run_time, repeat_interval })
  }
}
