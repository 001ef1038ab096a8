/// Report knobs consumed by the builder
#[derive(Debug, Clone)]
pub struct ReportSettings {
  /// Volume lower bound for the above-threshold unit-cost metric
  pub max_threshold_volume: f64,

  /// How many top-ranked assets the rank-limited metrics cover
  pub ranking_count: usize,

  /// How many top-ranked assets the simulated purchase metrics cover
  pub purchase_count: usize,
}

impl Default for ReportSettings {
  fn default() -> Self {
    Self { max_threshold_volume: 76_000_000.0, ranking_count: 10, purchase_count: 20 }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_settings_default() {
    let settings = ReportSettings::default();
    assert_eq!(settings.max_threshold_volume, 76_000_000.0);
    assert_eq!(settings.ranking_count, 10);
    assert_eq!(settings.purchase_count, 20);
  }
}
