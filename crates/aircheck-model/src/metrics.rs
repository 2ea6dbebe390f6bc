//! Delivery metrics and status banding.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Traffic-light style status attached to metric readings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricStatus {
    Excellent,
    Good,
    Warning,
    Critical,
    /// Informational only, for counts that are noteworthy but not a
    /// delivery failure (e.g. bonus over-delivery).
    Info,
}

impl MetricStatus {
    /// Band a percentage metric: `>=95` excellent, `>=85` good, `>=70`
    /// warning, anything below critical.
    pub fn from_percentage(value: f64) -> Self {
        if value >= 95.0 {
            MetricStatus::Excellent
        } else if value >= 85.0 {
            MetricStatus::Good
        } else if value >= 70.0 {
            MetricStatus::Warning
        } else {
            MetricStatus::Critical
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MetricStatus::Excellent => "excellent",
            MetricStatus::Good => "good",
            MetricStatus::Warning => "warning",
            MetricStatus::Critical => "critical",
            MetricStatus::Info => "info",
        }
    }
}

impl fmt::Display for MetricStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Headline statistics derived from one reconciliation run.
///
/// Percentages are rounded to two decimals. `channel_accuracy` is carried
/// for completeness of the campaign dashboard: channel equality is a hard
/// match filter, so it is 100.0 by construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    pub delivery_rate: f64,
    pub total_planned: usize,
    pub total_aired: usize,
    pub matched: usize,
    pub over_delivered: usize,
    pub under_delivered: usize,
    pub program_accuracy: f64,
    pub duration_accuracy: f64,
    pub channel_accuracy: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_banding_boundaries() {
        assert_eq!(MetricStatus::from_percentage(100.0), MetricStatus::Excellent);
        assert_eq!(MetricStatus::from_percentage(95.0), MetricStatus::Excellent);
        assert_eq!(MetricStatus::from_percentage(94.99), MetricStatus::Good);
        assert_eq!(MetricStatus::from_percentage(85.0), MetricStatus::Good);
        assert_eq!(MetricStatus::from_percentage(70.0), MetricStatus::Warning);
        assert_eq!(MetricStatus::from_percentage(69.99), MetricStatus::Critical);
    }

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&MetricStatus::Warning).unwrap();
        assert_eq!(json, "\"warning\"");
    }
}
