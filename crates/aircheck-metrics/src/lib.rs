//! Metrics aggregation over a reconciliation result.
//!
//! A pure reduction: the engine's [`MatchResult`] plus the expanded input
//! totals go in, headline percentages and labeled status readings come out.
//! Percentage banding is fixed; the thresholds for over/under-delivery
//! counts are campaign policy and therefore configurable.

use serde::Serialize;

use aircheck_model::{MatchResult, MetricStatus, Metrics};

/// Matched spots at or above this similarity count toward program accuracy.
pub const PROGRAM_ACCURACY_THRESHOLD: f64 = 0.95;

/// Matched spots within this many seconds count toward duration accuracy.
pub const DURATION_ACCURACY_TOLERANCE: i64 = 1;

/// Delivery rate as a percentage, 100.0 for an empty plan.
pub fn delivery_rate(matched: usize, total_planned: usize) -> f64 {
    if total_planned == 0 {
        return 100.0;
    }
    round2(matched as f64 / total_planned as f64 * 100.0)
}

/// Share of `correct` in `total` as a percentage, 100.0 when there is
/// nothing to measure.
pub fn accuracy(correct: usize, total: usize) -> f64 {
    if total == 0 {
        return 100.0;
    }
    round2(correct as f64 / total as f64 * 100.0)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Derive all headline metrics from a match result and the input totals.
///
/// `total_planned` must be the count of expanded planned instances (the
/// same universe the engine partitioned), not the raw plan row count.
pub fn calculate_metrics(
    result: &MatchResult,
    total_planned: usize,
    total_aired: usize,
) -> Metrics {
    let matched = result.matched_count();

    let high_program_matches = result
        .matched
        .iter()
        .filter(|pair| pair.score >= PROGRAM_ACCURACY_THRESHOLD)
        .count();
    let exact_durations = result
        .matched
        .iter()
        .filter(|pair| {
            (pair.planned.duration - pair.aired.duration).abs() <= DURATION_ACCURACY_TOLERANCE
        })
        .count();

    Metrics {
        delivery_rate: delivery_rate(matched, total_planned),
        total_planned,
        total_aired,
        matched,
        over_delivered: result.unmatched_aired.len(),
        under_delivered: result.unmatched_planned.len(),
        program_accuracy: accuracy(high_program_matches, matched),
        duration_accuracy: accuracy(exact_durations, matched),
        // Channel equality is a hard match filter, so matched pairs are
        // correct by construction.
        channel_accuracy: 100.0,
    }
}

/// Status thresholds for the over/under-delivery counts.
///
/// Campaign dispute policy rather than an engine invariant; the defaults
/// match the standard review playbook.
#[derive(Debug, Clone)]
pub struct DeliveryPolicy {
    /// Missing-spot count at which under-delivery turns `Warning`.
    pub under_warning: usize,
    /// Missing-spot count at which under-delivery turns `Critical`.
    pub under_critical: usize,
}

impl Default for DeliveryPolicy {
    fn default() -> Self {
        Self {
            under_warning: 1,
            under_critical: 6,
        }
    }
}

impl DeliveryPolicy {
    pub fn under_delivery_status(&self, count: usize) -> MetricStatus {
        if count >= self.under_critical {
            MetricStatus::Critical
        } else if count >= self.under_warning {
            MetricStatus::Warning
        } else {
            MetricStatus::Good
        }
    }

    /// Over-delivery never fails the campaign; nonzero counts are flagged
    /// informational.
    pub fn over_delivery_status(&self, count: usize) -> MetricStatus {
        if count > 0 {
            MetricStatus::Info
        } else {
            MetricStatus::Good
        }
    }
}

/// How a reading's value should be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricUnit {
    Percent,
    Count,
}

/// One labeled metric value with an optional status band.
#[derive(Debug, Clone, Serialize)]
pub struct MetricReading {
    pub label: &'static str,
    pub value: f64,
    pub unit: MetricUnit,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<MetricStatus>,
}

impl MetricReading {
    fn percent(label: &'static str, value: f64) -> Self {
        Self {
            label,
            value,
            unit: MetricUnit::Percent,
            status: Some(MetricStatus::from_percentage(value)),
        }
    }

    fn count(label: &'static str, value: usize, status: Option<MetricStatus>) -> Self {
        Self {
            label,
            value: value as f64,
            unit: MetricUnit::Count,
            status,
        }
    }
}

/// The labeled metric set consumed by the reporting layer.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsBundle {
    pub delivery_rate: MetricReading,
    pub total_planned: MetricReading,
    pub total_aired: MetricReading,
    pub matched: MetricReading,
    pub over_delivered: MetricReading,
    pub under_delivered: MetricReading,
    pub program_accuracy: MetricReading,
    pub duration_accuracy: MetricReading,
}

impl MetricsBundle {
    /// Readings in presentation order.
    pub fn readings(&self) -> [&MetricReading; 8] {
        [
            &self.delivery_rate,
            &self.total_planned,
            &self.total_aired,
            &self.matched,
            &self.over_delivered,
            &self.under_delivered,
            &self.program_accuracy,
            &self.duration_accuracy,
        ]
    }
}

/// Attach labels and status bands to raw metrics.
pub fn label_metrics(metrics: &Metrics, policy: &DeliveryPolicy) -> MetricsBundle {
    MetricsBundle {
        delivery_rate: MetricReading::percent("Delivery Rate", metrics.delivery_rate),
        total_planned: MetricReading::count("Total Planned", metrics.total_planned, None),
        total_aired: MetricReading::count("Total Aired", metrics.total_aired, None),
        matched: MetricReading::count("Matched Spots", metrics.matched, None),
        over_delivered: MetricReading::count(
            "Over-Delivered",
            metrics.over_delivered,
            Some(policy.over_delivery_status(metrics.over_delivered)),
        ),
        under_delivered: MetricReading::count(
            "Under-Delivered",
            metrics.under_delivered,
            Some(policy.under_delivery_status(metrics.under_delivered)),
        ),
        program_accuracy: MetricReading::percent("Program Accuracy", metrics.program_accuracy),
        duration_accuracy: MetricReading::percent("Duration Accuracy", metrics.duration_accuracy),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aircheck_model::{AiredSpot, MatchedSpot, PlannedSpot};
    use chrono::NaiveDate;

    fn pair(score: f64, planned_duration: i64, aired_duration: i64) -> MatchedSpot {
        MatchedSpot {
            planned: PlannedSpot {
                channel: "TVN".to_string(),
                program: "Noticias".to_string(),
                days: "L-V".to_string(),
                time_slot: String::new(),
                duration: planned_duration,
                count: 1,
            },
            aired: AiredSpot {
                channel: "TVN".to_string(),
                program: "Noticias".to_string(),
                date: NaiveDate::from_ymd_opt(2025, 10, 20),
                duration: aired_duration,
            },
            score,
        }
    }

    #[test]
    fn empty_plan_reports_full_delivery() {
        assert_eq!(delivery_rate(0, 0), 100.0);
        assert_eq!(accuracy(0, 0), 100.0);
    }

    #[test]
    fn delivery_rate_rounds_to_two_decimals() {
        assert_eq!(delivery_rate(2, 3), 66.67);
        assert_eq!(delivery_rate(1, 8), 12.5);
    }

    #[test]
    fn accuracies_use_their_thresholds() {
        let result = MatchResult {
            // Scores 1.0 and 0.94 straddle the 0.95 program threshold;
            // duration deltas 1 and 2 straddle the one-second tolerance.
            matched: vec![pair(1.0, 30, 31), pair(0.94, 30, 32)],
            discrepancies: Vec::new(),
            unmatched_planned: Vec::new(),
            unmatched_aired: Vec::new(),
        };
        let metrics = calculate_metrics(&result, 2, 2);
        assert_eq!(metrics.delivery_rate, 100.0);
        assert_eq!(metrics.program_accuracy, 50.0);
        assert_eq!(metrics.duration_accuracy, 50.0);
        assert_eq!(metrics.channel_accuracy, 100.0);
    }

    #[test]
    fn counts_come_from_the_unmatched_lists() {
        let result = MatchResult {
            matched: vec![pair(1.0, 30, 30)],
            discrepancies: Vec::new(),
            unmatched_planned: vec![PlannedSpot {
                channel: "TVN".to_string(),
                program: "Cine de Oro".to_string(),
                days: "S,D".to_string(),
                time_slot: String::new(),
                duration: 60,
                count: 1,
            }],
            unmatched_aired: Vec::new(),
        };
        let metrics = calculate_metrics(&result, 2, 1);
        assert_eq!(metrics.matched, 1);
        assert_eq!(metrics.under_delivered, 1);
        assert_eq!(metrics.over_delivered, 0);
        assert_eq!(metrics.delivery_rate, 50.0);
    }

    #[test]
    fn under_delivery_policy_bands() {
        let policy = DeliveryPolicy::default();
        assert_eq!(policy.under_delivery_status(0), MetricStatus::Good);
        assert_eq!(policy.under_delivery_status(1), MetricStatus::Warning);
        assert_eq!(policy.under_delivery_status(5), MetricStatus::Warning);
        assert_eq!(policy.under_delivery_status(6), MetricStatus::Critical);
    }

    #[test]
    fn over_delivery_is_informational() {
        let policy = DeliveryPolicy::default();
        assert_eq!(policy.over_delivery_status(0), MetricStatus::Good);
        assert_eq!(policy.over_delivery_status(3), MetricStatus::Info);
    }

    #[test]
    fn bundle_carries_labels_and_statuses() {
        let metrics = Metrics {
            delivery_rate: 92.0,
            total_planned: 25,
            total_aired: 24,
            matched: 23,
            over_delivered: 1,
            under_delivered: 2,
            program_accuracy: 95.0,
            duration_accuracy: 87.0,
            channel_accuracy: 100.0,
        };
        let bundle = label_metrics(&metrics, &DeliveryPolicy::default());
        assert_eq!(bundle.delivery_rate.status, Some(MetricStatus::Good));
        assert_eq!(bundle.program_accuracy.status, Some(MetricStatus::Excellent));
        assert_eq!(bundle.under_delivered.status, Some(MetricStatus::Warning));
        assert_eq!(bundle.over_delivered.status, Some(MetricStatus::Info));
        assert_eq!(bundle.total_planned.status, None);
        assert_eq!(bundle.readings().len(), 8);
    }
}
