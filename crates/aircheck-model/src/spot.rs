//! Spot records exchanged between the parsers, the matching engine, and the
//! reporting layer.
//!
//! All three record types are plain immutable values: they are created once
//! by the ingestion layer (or by count expansion) and never mutated. Identity
//! is per-instance: two planned spots with identical fields are two distinct
//! purchasable occurrences, not duplicates.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One contracted ad placement from the plan file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedSpot {
    /// Canonical channel name (normalization happens during ingestion).
    pub channel: String,
    /// Program the spot was bought against.
    pub program: String,
    /// Day pattern such as `"L-V"` or `"S,D"` (L,M,X,J,V,S,D = Mon..Sun).
    pub days: String,
    /// Informational time slot text; not used for matching.
    pub time_slot: String,
    /// Spot length in seconds. Positive by the ingestion contract.
    pub duration: i64,
    /// How many identical occurrences this row represents.
    #[serde(default = "default_count")]
    pub count: u32,
}

fn default_count() -> u32 {
    1
}

/// One observed broadcast event from the monitoring log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiredSpot {
    /// Canonical channel name.
    pub channel: String,
    /// Program the spot actually aired in.
    pub program: String,
    /// Calendar date of the broadcast. Monitoring exports occasionally lack
    /// a parseable date; such spots can never satisfy day eligibility.
    pub date: Option<NaiveDate>,
    /// Measured spot length in seconds.
    pub duration: i64,
}

/// A committed planned/aired pairing. Final once formed; the engine never
/// un-matches within a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchedSpot {
    pub planned: PlannedSpot,
    pub aired: AiredSpot,
    /// Program-name similarity in `[0, 1]`.
    pub score: f64,
}
