//! Full-pipeline test: CSV fixtures in, metrics and report out.

use std::fs;

use aircheck_cli::pipeline::{AnalysisRequest, run_analysis};
use aircheck_model::DiscrepancyKind;
use aircheck_recon::MatchOptions;

const PLAN_CSV: &str = "\
PLAN DE MEDIOS Q4,,,,,
Canal,Programa,Días,Horario,Duración,Cantidad
TVN,Noticias AM,L-V,06:00-08:00,30ss,2
Telemetro,Deportes Total,S-D,20:00-21:00,45,1
";

// 2025-10-20 and 2025-10-21 are Monday and Tuesday; 2025-10-19 is a Sunday.
const MONITORING_CSV: &str = "\
Consulta Infoanalisis,,,
Vehiculo,Soporte,Fecha,Duración
TVN-2,Noticias AM,20251020,30
TVN,Noticias AM,20251021,31
MEDCOM,Deportes Total,20251019,45
TVN,Telenovela de la Tarde,20251021,60
";

#[test]
fn analyze_produces_metrics_and_report() {
    let dir = tempfile::tempdir().expect("tempdir");
    let plan_path = dir.path().join("plan.csv");
    let monitoring_path = dir.path().join("monitoreo.csv");
    fs::write(&plan_path, PLAN_CSV).expect("write plan");
    fs::write(&monitoring_path, MONITORING_CSV).expect("write monitoring");

    let outcome = run_analysis(&AnalysisRequest {
        plan_path,
        monitoring_path,
        options: MatchOptions::default(),
        output_dir: Some(dir.path().join("out")),
        write_report: true,
    })
    .expect("analysis");

    // Two Noticias occurrences and the Deportes spot all delivered; the
    // telenovela has no planned counterpart.
    assert_eq!(outcome.metrics.total_planned, 3);
    assert_eq!(outcome.metrics.total_aired, 4);
    assert_eq!(outcome.metrics.matched, 3);
    assert_eq!(outcome.metrics.delivery_rate, 100.0);
    assert_eq!(outcome.metrics.over_delivered, 1);
    assert_eq!(outcome.metrics.under_delivered, 0);
    assert_eq!(outcome.result.kind_count(DiscrepancyKind::ExtraSpot), 1);
    assert_eq!(outcome.result.kind_count(DiscrepancyKind::WrongTime), 0);
    assert!(!outcome.result.has_high_severity());

    let report_path = outcome.report_path.expect("report path");
    let raw = fs::read_to_string(report_path).expect("read report");
    assert!(raw.contains("\"schema\": \"aircheck.analysis-report\""));
    assert!(raw.contains("\"extra_spot\": 1"));
}

#[test]
fn analyze_flags_missing_spots() {
    let dir = tempfile::tempdir().expect("tempdir");
    let plan_path = dir.path().join("plan.csv");
    let monitoring_path = dir.path().join("monitoreo.csv");
    fs::write(&plan_path, PLAN_CSV).expect("write plan");
    fs::write(
        &monitoring_path,
        "Vehiculo,Soporte,Fecha,Duración\nTVN,Noticias AM,20251020,30\n",
    )
    .expect("write monitoring");

    let outcome = run_analysis(&AnalysisRequest {
        plan_path,
        monitoring_path,
        options: MatchOptions::default(),
        output_dir: None,
        write_report: false,
    })
    .expect("analysis");

    assert_eq!(outcome.metrics.matched, 1);
    assert_eq!(outcome.metrics.under_delivered, 2);
    assert!(outcome.result.has_high_severity());
    assert!(outcome.report_path.is_none());
}
