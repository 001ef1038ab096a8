use thiserror::Error;

/// Fatal input-validation failures for report construction.
///
/// Anything recoverable (e.g. the retroactive metric's division edge case)
/// is annotated inside the report instead of raised here.
#[derive(Error, Debug)]
pub enum ReportError {
  #[error("Asset snapshot is empty")]
  EmptySnapshot,

  #[error("Invalid value for `{field}` on {symbol}: {value}")]
  InvalidField { symbol: String, field: &'static str, value: f64 },
}

/// Result type alias for report construction
pub type ReportResult<T> = Result<T, ReportError>;
