//! Report persistence: one JSON document, overwritten each run

use crate::report::Report;
use cmc_core::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Default location of the report file, relative to the working directory
pub const DEFAULT_REPORT_PATH: &str = "report/report.json";

/// Writes a report as pretty JSON to a fixed path.
///
/// The parent directory is created on demand and the previous report is
/// overwritten; there is no history beyond the latest run.
#[derive(Debug, Clone)]
pub struct ReportWriter {
  path: PathBuf,
}

impl ReportWriter {
  pub fn new(path: impl Into<PathBuf>) -> Self {
    Self { path: path.into() }
  }

  /// The path this writer persists to
  pub fn path(&self) -> &Path {
    &self.path
  }

  /// Serialize and persist one report, replacing any previous one.
  pub fn write(&self, report: &Report) -> Result<()> {
    if let Some(parent) = self.path.parent() {
      if !parent.as_os_str().is_empty() {
        fs::create_dir_all(parent)?;
      }
    }

    let json = serde_json::to_string_pretty(report)?;
    fs::write(&self.path, json)?;

    info!("Report written to {}", self.path.display());
    Ok(())
  }
}

impl Default for ReportWriter {
  fn default() -> Self {
    Self::new(DEFAULT_REPORT_PATH)
  }
}
