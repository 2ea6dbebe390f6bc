//! Record model for plan-versus-broadcast reconciliation.
//!
//! Value types shared by the ingestion, matching, metrics, and reporting
//! crates. Everything here is immutable once constructed and created fresh
//! per analysis run. Nothing is persisted between runs.

pub mod discrepancy;
pub mod metrics;
pub mod spot;

pub use discrepancy::{Discrepancy, DiscrepancyKind, MatchResult, Severity};
pub use metrics::{MetricStatus, Metrics};
pub use spot::{AiredSpot, MatchedSpot, PlannedSpot};
