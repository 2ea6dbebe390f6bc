//! Subcommand entry points.

use anyhow::Result;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, Color, Table};

use aircheck_cli::pipeline::{AnalysisOutcome, AnalysisRequest, run_analysis};
use aircheck_ingest::CHANNEL_ALIASES;
use aircheck_recon::MatchOptions;

use crate::cli::AnalyzeArgs;

pub fn run_analyze(args: &AnalyzeArgs) -> Result<AnalysisOutcome> {
    let request = AnalysisRequest {
        plan_path: args.plan.clone(),
        monitoring_path: args.monitoring.clone(),
        options: MatchOptions {
            program_threshold: args.program_threshold,
            duration_tolerance: args.duration_tolerance,
        },
        output_dir: args.output_dir.clone(),
        write_report: !args.no_report,
    };
    run_analysis(&request)
}

pub fn run_channels() {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS);
    table.set_header(vec![
        Cell::new("Raw name")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new("Canonical")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
    ]);
    for (alias, canonical) in CHANNEL_ALIASES {
        table.add_row(vec![Cell::new(alias), Cell::new(canonical)]);
    }
    println!("{table}");
}
