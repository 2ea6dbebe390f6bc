//! End-to-end analysis pipeline: parse both files, reconcile, aggregate,
//! and optionally write the JSON report.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use aircheck_ingest::{parse_monitoring_file, parse_plan_file};
use aircheck_metrics::{DeliveryPolicy, MetricsBundle, calculate_metrics, label_metrics};
use aircheck_model::{MatchResult, Metrics};
use aircheck_recon::{MatchOptions, expand_planned, match_spots};
use aircheck_report::{build_report, write_report_json};

/// Everything one analysis run needs.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub plan_path: PathBuf,
    pub monitoring_path: PathBuf,
    pub options: MatchOptions,
    /// Where to write the report; defaults to `output/` next to the plan.
    pub output_dir: Option<PathBuf>,
    pub write_report: bool,
}

/// The finished analysis, ready for presentation.
#[derive(Debug)]
pub struct AnalysisOutcome {
    pub metrics: Metrics,
    pub bundle: MetricsBundle,
    pub result: MatchResult,
    pub report_path: Option<PathBuf>,
}

/// Run one full analysis. Each run owns its records and match state, so
/// concurrent runs need no coordination.
pub fn run_analysis(request: &AnalysisRequest) -> Result<AnalysisOutcome> {
    let plan = parse_plan_file(&request.plan_path)
        .with_context(|| format!("failed to parse plan file {}", request.plan_path.display()))?;
    let log = parse_monitoring_file(&request.monitoring_path).with_context(|| {
        format!(
            "failed to parse monitoring file {}",
            request.monitoring_path.display()
        )
    })?;

    // Expand here so the totals and the engine see the same instance
    // universe (expansion is idempotent; the engine expands too).
    let planned = expand_planned(&plan);
    info!(
        planned = planned.len(),
        aired = log.len(),
        "reconciling plan against monitoring log"
    );

    let result = match_spots(&planned, &log, &request.options);
    let metrics = calculate_metrics(&result, planned.len(), log.len());
    let bundle = label_metrics(&metrics, &DeliveryPolicy::default());

    let report_path = if request.write_report {
        let output_dir = request
            .output_dir
            .clone()
            .unwrap_or_else(|| default_output_dir(&request.plan_path));
        let report = build_report(&metrics, &bundle, &result);
        let path = write_report_json(&output_dir, &report)
            .with_context(|| format!("failed to write report under {}", output_dir.display()))?;
        info!(path = %path.display(), "wrote analysis report");
        Some(path)
    } else {
        None
    };

    Ok(AnalysisOutcome {
        metrics,
        bundle,
        result,
        report_path,
    })
}

fn default_output_dir(plan_path: &Path) -> PathBuf {
    match plan_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.join("output"),
        _ => PathBuf::from("output"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_defaults_next_to_the_plan() {
        assert_eq!(
            default_output_dir(Path::new("campaigns/q4/plan.csv")),
            PathBuf::from("campaigns/q4/output")
        );
        assert_eq!(default_output_dir(Path::new("plan.csv")), PathBuf::from("output"));
    }
}
