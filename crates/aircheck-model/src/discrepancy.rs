//! Discrepancy taxonomy and the engine's result type.
//!
//! Both enumerations are closed: the reporting layer matches on them
//! exhaustively, so adding a variant is a deliberate API change rather than
//! a new string slipping through.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::spot::{AiredSpot, MatchedSpot, PlannedSpot};

/// Kind of anomaly found while reconciling the plan against the monitoring
/// log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscrepancyKind {
    /// A purchased spot never aired.
    MissingSpot,
    /// A broadcast with no plausible planned counterpart.
    ExtraSpot,
    WrongProgram,
    WrongDuration,
    WrongChannel,
    WrongDate,
    /// Aired outside the plan's day pattern (the wrong-day fallback match).
    WrongTime,
}

impl DiscrepancyKind {
    /// Returns the wire spelling used in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            DiscrepancyKind::MissingSpot => "missing_spot",
            DiscrepancyKind::ExtraSpot => "extra_spot",
            DiscrepancyKind::WrongProgram => "wrong_program",
            DiscrepancyKind::WrongDuration => "wrong_duration",
            DiscrepancyKind::WrongChannel => "wrong_channel",
            DiscrepancyKind::WrongDate => "wrong_date",
            DiscrepancyKind::WrongTime => "wrong_time",
        }
    }
}

impl fmt::Display for DiscrepancyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DiscrepancyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "missing_spot" => Ok(DiscrepancyKind::MissingSpot),
            "extra_spot" => Ok(DiscrepancyKind::ExtraSpot),
            "wrong_program" => Ok(DiscrepancyKind::WrongProgram),
            "wrong_duration" => Ok(DiscrepancyKind::WrongDuration),
            "wrong_channel" => Ok(DiscrepancyKind::WrongChannel),
            "wrong_date" => Ok(DiscrepancyKind::WrongDate),
            "wrong_time" => Ok(DiscrepancyKind::WrongTime),
            _ => Err(format!("Unknown discrepancy kind: {s}")),
        }
    }
}

/// Business impact of a discrepancy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "high" => Ok(Severity::High),
            "medium" => Ok(Severity::Medium),
            "low" => Ok(Severity::Low),
            _ => Err(format!("Unknown severity: {s}")),
        }
    }
}

/// A reportable anomaly with enough context for a business user to dispute
/// a single spot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Discrepancy {
    pub kind: DiscrepancyKind,
    pub severity: Severity,
    pub channel: String,
    pub program: String,
    /// What the plan called for, when applicable.
    pub expected: Option<String>,
    /// What the monitoring log shows, when applicable.
    pub actual: Option<String>,
    /// Human-readable one-line explanation.
    pub explanation: String,
}

/// Output of a reconciliation run.
///
/// Every planned instance lands in exactly one of `matched` /
/// `unmatched_planned`, and every aired instance in exactly one of `matched`
/// / `unmatched_aired`. Nothing is dropped or double-counted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub matched: Vec<MatchedSpot>,
    pub discrepancies: Vec<Discrepancy>,
    pub unmatched_planned: Vec<PlannedSpot>,
    pub unmatched_aired: Vec<AiredSpot>,
}

impl MatchResult {
    pub fn matched_count(&self) -> usize {
        self.matched.len()
    }

    pub fn discrepancy_count(&self) -> usize {
        self.discrepancies.len()
    }

    /// Number of discrepancies carrying the given severity.
    pub fn severity_count(&self, severity: Severity) -> usize {
        self.discrepancies
            .iter()
            .filter(|discrepancy| discrepancy.severity == severity)
            .count()
    }

    /// Number of discrepancies of the given kind.
    pub fn kind_count(&self, kind: DiscrepancyKind) -> usize {
        self.discrepancies
            .iter()
            .filter(|discrepancy| discrepancy.kind == kind)
            .count()
    }

    /// True when any high-severity discrepancy was recorded.
    pub fn has_high_severity(&self) -> bool {
        self.severity_count(Severity::High) > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_round_trips_through_str() {
        for kind in [
            DiscrepancyKind::MissingSpot,
            DiscrepancyKind::ExtraSpot,
            DiscrepancyKind::WrongProgram,
            DiscrepancyKind::WrongDuration,
            DiscrepancyKind::WrongChannel,
            DiscrepancyKind::WrongDate,
            DiscrepancyKind::WrongTime,
        ] {
            assert_eq!(kind.as_str().parse::<DiscrepancyKind>().unwrap(), kind);
        }
    }

    #[test]
    fn kind_serializes_snake_case() {
        let json = serde_json::to_string(&DiscrepancyKind::MissingSpot).unwrap();
        assert_eq!(json, "\"missing_spot\"");
    }

    #[test]
    fn severity_from_str_is_case_insensitive() {
        assert_eq!("HIGH".parse::<Severity>().unwrap(), Severity::High);
        assert_eq!(" medium ".parse::<Severity>().unwrap(), Severity::Medium);
        assert!("fatal".parse::<Severity>().is_err());
    }

    #[test]
    fn result_counts_by_severity_and_kind() {
        let result = MatchResult {
            matched: Vec::new(),
            discrepancies: vec![
                Discrepancy {
                    kind: DiscrepancyKind::MissingSpot,
                    severity: Severity::High,
                    channel: "TVN".to_string(),
                    program: "Noticias".to_string(),
                    expected: Some("Noticias".to_string()),
                    actual: None,
                    explanation: "Planned spot did not air".to_string(),
                },
                Discrepancy {
                    kind: DiscrepancyKind::ExtraSpot,
                    severity: Severity::Low,
                    channel: "TVN".to_string(),
                    program: "Cine".to_string(),
                    expected: None,
                    actual: Some("Cine".to_string()),
                    explanation: "Overage: extra spot aired on 2025-10-21".to_string(),
                },
            ],
            unmatched_planned: Vec::new(),
            unmatched_aired: Vec::new(),
        };
        assert_eq!(result.severity_count(Severity::High), 1);
        assert_eq!(result.kind_count(DiscrepancyKind::ExtraSpot), 1);
        assert_eq!(result.kind_count(DiscrepancyKind::WrongTime), 0);
        assert!(result.has_high_severity());
    }
}
