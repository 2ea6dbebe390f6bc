//! Analysis report assembly.
//!
//! Takes the engine output plus the labeled metrics and produces the
//! structured payload consumed by dashboards and archived as JSON. Listings
//! are capped so a pathological log cannot balloon the report; the full
//! detail always remains available in the [`MatchResult`] itself.

mod recommendations;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::Utc;
use serde::Serialize;

use aircheck_metrics::MetricsBundle;
use aircheck_model::{Discrepancy, MatchResult, MatchedSpot, Metrics};

pub use recommendations::recommendations;

pub const REPORT_SCHEMA: &str = "aircheck.analysis-report";
pub const REPORT_SCHEMA_VERSION: u32 = 1;

/// Most discrepancies included in the report payload.
pub const MAX_REPORTED_DISCREPANCIES: usize = 20;

/// Most matched pairs included as a sample in the report payload.
pub const MAX_REPORTED_MATCHES: usize = 50;

/// Headline counts repeated at the top of the report.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub delivery_rate: f64,
    pub total_planned: usize,
    pub total_aired: usize,
    pub matched: usize,
    pub over_delivered: usize,
    pub under_delivered: usize,
    pub discrepancy_count: usize,
}

/// The complete analysis report payload.
#[derive(Debug, Serialize)]
pub struct AnalysisReport {
    pub schema: &'static str,
    pub schema_version: u32,
    pub generated_at: String,
    pub summary: RunSummary,
    pub metrics: MetricsBundle,
    /// Discrepancy counts keyed by kind, deterministically ordered.
    pub discrepancy_summary: BTreeMap<String, usize>,
    pub discrepancies: Vec<Discrepancy>,
    pub matched_spots: Vec<MatchedSpot>,
    pub recommendations: Vec<String>,
}

/// Assemble the report payload, stamping the current time.
pub fn build_report(
    metrics: &Metrics,
    bundle: &MetricsBundle,
    result: &MatchResult,
) -> AnalysisReport {
    AnalysisReport {
        schema: REPORT_SCHEMA,
        schema_version: REPORT_SCHEMA_VERSION,
        generated_at: Utc::now().to_rfc3339(),
        summary: RunSummary {
            delivery_rate: metrics.delivery_rate,
            total_planned: metrics.total_planned,
            total_aired: metrics.total_aired,
            matched: metrics.matched,
            over_delivered: metrics.over_delivered,
            under_delivered: metrics.under_delivered,
            discrepancy_count: result.discrepancy_count(),
        },
        metrics: bundle.clone(),
        discrepancy_summary: discrepancy_histogram(result),
        discrepancies: result
            .discrepancies
            .iter()
            .take(MAX_REPORTED_DISCREPANCIES)
            .cloned()
            .collect(),
        matched_spots: result
            .matched
            .iter()
            .take(MAX_REPORTED_MATCHES)
            .cloned()
            .collect(),
        recommendations: recommendations(metrics),
    }
}

/// Count discrepancies by kind. `BTreeMap` keeps report ordering stable
/// across runs.
pub fn discrepancy_histogram(result: &MatchResult) -> BTreeMap<String, usize> {
    let mut histogram = BTreeMap::new();
    for discrepancy in &result.discrepancies {
        *histogram
            .entry(discrepancy.kind.as_str().to_string())
            .or_insert(0) += 1;
    }
    histogram
}

/// Write the report as pretty-printed JSON under `output_dir`, creating the
/// directory if needed. Returns the written path.
pub fn write_report_json(output_dir: &Path, report: &AnalysisReport) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir)?;
    let output_path = output_dir.join("analysis_report.json");
    let json = serde_json::to_string_pretty(report)?;
    std::fs::write(&output_path, format!("{json}\n"))?;
    Ok(output_path)
}
