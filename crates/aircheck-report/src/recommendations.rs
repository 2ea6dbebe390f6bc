//! Recommendation texts derived from metric thresholds.
//!
//! Mechanical reductions over the metrics: no scoring, no inference.

use aircheck_model::Metrics;

/// Delivery rate below which make-goods should be requested.
const MAKE_GOOD_THRESHOLD: f64 = 95.0;

/// Delivery rate at or above which the partner earns a commendation.
const PRAISE_THRESHOLD: f64 = 98.0;

/// Over-delivery beyond this share of the plan warrants investigation.
const OVERAGE_SHARE: f64 = 0.1;

/// Build the recommendation list for a finished analysis.
pub fn recommendations(metrics: &Metrics) -> Vec<String> {
    let mut out = Vec::new();

    if metrics.under_delivered > 0 {
        out.push(format!(
            "Follow up with the media company regarding {} missing spot(s) that were planned but did not air",
            metrics.under_delivered
        ));
    }

    if metrics.over_delivered as f64 > metrics.total_planned as f64 * OVERAGE_SHARE {
        out.push(format!(
            "Investigate {} over-delivered spot(s) to verify whether they are bonus placements or data attribution errors",
            metrics.over_delivered
        ));
    }

    if metrics.delivery_rate < MAKE_GOOD_THRESHOLD {
        out.push(format!(
            "Request make-goods or credits for {:.1}% under-delivery",
            100.0 - metrics.delivery_rate
        ));
    }

    if metrics.delivery_rate >= PRAISE_THRESHOLD {
        out.push(
            "Excellent delivery rate! Consider this media partner for future campaigns"
                .to_string(),
        );
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(delivery_rate: f64, under: usize, over: usize, total: usize) -> Metrics {
        Metrics {
            delivery_rate,
            total_planned: total,
            total_aired: total - under + over,
            matched: total - under,
            over_delivered: over,
            under_delivered: under,
            program_accuracy: 100.0,
            duration_accuracy: 100.0,
            channel_accuracy: 100.0,
        }
    }

    #[test]
    fn perfect_delivery_earns_praise_only() {
        let recs = recommendations(&metrics(100.0, 0, 0, 20));
        insta::assert_snapshot!(recs.join("\n"), @"Excellent delivery rate! Consider this media partner for future campaigns");
    }

    #[test]
    fn under_delivery_triggers_follow_up_and_make_goods() {
        let recs = recommendations(&metrics(80.0, 4, 0, 20));
        insta::assert_snapshot!(recs.join("\n"), @r"
        Follow up with the media company regarding 4 missing spot(s) that were planned but did not air
        Request make-goods or credits for 20.0% under-delivery
        ");
    }

    #[test]
    fn heavy_overage_is_flagged() {
        let recs = recommendations(&metrics(100.0, 0, 3, 20));
        assert!(recs.iter().any(|rec| rec.contains("3 over-delivered")));
    }

    #[test]
    fn small_overage_is_not_flagged() {
        let recs = recommendations(&metrics(100.0, 0, 2, 20));
        assert!(!recs.iter().any(|rec| rec.contains("over-delivered")));
    }

    #[test]
    fn boundary_delivery_rate_is_not_make_good_territory() {
        let recs = recommendations(&metrics(95.0, 1, 0, 20));
        assert!(!recs.iter().any(|rec| rec.contains("make-goods")));
    }
}
