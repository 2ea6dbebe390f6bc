//! Two-pass greedy reconciliation.
//!
//! Pass 1 commits only day-eligible pairings; pass 2 re-scans the leftovers
//! with the day constraint waived and flags each such match as a wrong-day
//! delivery. A wrong-day pairing therefore never consumes a planned spot
//! that a correct-day broadcast also qualifies for. Whatever survives both
//! passes is classified as overage (aired, never planned) or missing
//! (planned, never aired).

use tracing::debug;

use aircheck_model::{
    AiredSpot, Discrepancy, DiscrepancyKind, MatchResult, MatchedSpot, PlannedSpot, Severity,
};

use crate::day::day_eligible;
use crate::predicates::{channels_match, duration_within, program_similarity};

/// Tunable match constraints. Defaults reproduce the standard campaign
/// policy: program names must agree at 0.8 similarity and durations within
/// two seconds.
#[derive(Debug, Clone)]
pub struct MatchOptions {
    /// Minimum program similarity for a candidate pairing.
    pub program_threshold: f64,
    /// Maximum absolute duration difference, in seconds.
    pub duration_tolerance: i64,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            program_threshold: 0.8,
            duration_tolerance: 2,
        }
    }
}

/// Expand plan rows with `count > 1` into independent single-occurrence
/// instances.
///
/// Each occurrence is a separate matchable unit: a row buying five spots can
/// be fulfilled by five different broadcasts. Expansion happens before any
/// filtering so a partially delivered row yields per-occurrence missing-spot
/// discrepancies.
pub fn expand_planned(spots: &[PlannedSpot]) -> Vec<PlannedSpot> {
    let mut expanded = Vec::with_capacity(spots.len());
    for spot in spots {
        let occurrences = spot.count.max(1);
        for _ in 0..occurrences {
            expanded.push(PlannedSpot {
                count: 1,
                ..spot.clone()
            });
        }
    }
    expanded
}

/// Reconcile planned spots against a monitoring log.
///
/// Matching is spot-for-spot: one planned instance pairs with at most one
/// aired instance and vice versa. Candidate selection is greedy per aired
/// spot with strict-improvement tie-breaking (`score > best`), so the
/// first-encountered planned instance wins ties and identical inputs always
/// produce identical output.
pub fn match_spots(
    planned: &[PlannedSpot],
    aired: &[AiredSpot],
    options: &MatchOptions,
) -> MatchResult {
    let planned = expand_planned(planned);
    let mut consumed = vec![false; planned.len()];
    let mut claimed = vec![false; aired.len()];
    let mut matched = Vec::new();
    let mut discrepancies = Vec::new();

    // Pass 1: day-eligible pairings only.
    for (aired_idx, spot) in aired.iter().enumerate() {
        let Some((planned_idx, score)) = best_candidate(&planned, &consumed, spot, options, true)
        else {
            continue;
        };
        consumed[planned_idx] = true;
        claimed[aired_idx] = true;
        matched.push(MatchedSpot {
            planned: planned[planned_idx].clone(),
            aired: spot.clone(),
            score,
        });
    }
    debug!(pass = 1, matched = matched.len(), "day-eligible pass done");

    // Pass 2: day constraint waived; every commit is flagged as a wrong-day
    // delivery.
    for (aired_idx, spot) in aired.iter().enumerate() {
        if claimed[aired_idx] {
            continue;
        }
        let Some((planned_idx, score)) = best_candidate(&planned, &consumed, spot, options, false)
        else {
            continue;
        };
        consumed[planned_idx] = true;
        claimed[aired_idx] = true;
        discrepancies.push(wrong_day(&planned[planned_idx], spot));
        matched.push(MatchedSpot {
            planned: planned[planned_idx].clone(),
            aired: spot.clone(),
            score,
        });
    }
    debug!(pass = 2, matched = matched.len(), "fallback pass done");

    let mut unmatched_aired = Vec::new();
    for (aired_idx, spot) in aired.iter().enumerate() {
        if claimed[aired_idx] {
            continue;
        }
        discrepancies.push(extra_spot(spot));
        unmatched_aired.push(spot.clone());
    }

    let mut unmatched_planned = Vec::new();
    for (planned_idx, spot) in planned.iter().enumerate() {
        if consumed[planned_idx] {
            continue;
        }
        discrepancies.push(missing_spot(spot));
        unmatched_planned.push(spot.clone());
    }

    debug!(
        matched = matched.len(),
        missing = unmatched_planned.len(),
        overage = unmatched_aired.len(),
        "reconciliation finished"
    );

    MatchResult {
        matched,
        discrepancies,
        unmatched_planned,
        unmatched_aired,
    }
}

/// Best unconsumed planned candidate for one aired spot, if any.
///
/// Hard constraints first (channel, duration, similarity threshold, and
/// optionally day eligibility), then strict-improvement selection on the
/// similarity score.
fn best_candidate(
    planned: &[PlannedSpot],
    consumed: &[bool],
    aired: &AiredSpot,
    options: &MatchOptions,
    require_day: bool,
) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;
    for (planned_idx, spot) in planned.iter().enumerate() {
        if consumed[planned_idx] {
            continue;
        }
        if !channels_match(&spot.channel, &aired.channel) {
            continue;
        }
        if !duration_within(spot.duration, aired.duration, options.duration_tolerance) {
            continue;
        }
        let score = program_similarity(&spot.program, &aired.program);
        if score < options.program_threshold {
            continue;
        }
        if require_day && !day_eligible(&spot.days, aired.date) {
            continue;
        }
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((planned_idx, score));
        }
    }
    best
}

fn wrong_day(planned: &PlannedSpot, aired: &AiredSpot) -> Discrepancy {
    let weekday = aired
        .date
        .map(|date| date.format("%A").to_string())
        .unwrap_or_else(|| "unknown".to_string());
    let aired_on = aired
        .date
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "an unknown date".to_string());
    Discrepancy {
        kind: DiscrepancyKind::WrongTime,
        severity: Severity::Medium,
        channel: planned.channel.clone(),
        program: planned.program.clone(),
        expected: Some(planned.days.clone()),
        actual: Some(weekday),
        explanation: format!(
            "Spot aired on wrong day ({aired_on}) for plan '{}'",
            planned.days
        ),
    }
}

fn extra_spot(aired: &AiredSpot) -> Discrepancy {
    let aired_on = aired
        .date
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "an unknown date".to_string());
    Discrepancy {
        kind: DiscrepancyKind::ExtraSpot,
        severity: Severity::Low,
        channel: aired.channel.clone(),
        program: aired.program.clone(),
        expected: None,
        actual: Some(aired.program.clone()),
        explanation: format!("Overage: extra spot aired on {aired_on}"),
    }
}

fn missing_spot(planned: &PlannedSpot) -> Discrepancy {
    Discrepancy {
        kind: DiscrepancyKind::MissingSpot,
        severity: Severity::High,
        channel: planned.channel.clone(),
        program: planned.program.clone(),
        expected: Some(planned.program.clone()),
        actual: None,
        explanation: "Planned spot did not air".to_string(),
    }
}
