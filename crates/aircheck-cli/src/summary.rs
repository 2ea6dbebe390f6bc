//! Terminal summary tables for a finished analysis.

use std::cmp::Ordering;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use aircheck_cli::pipeline::AnalysisOutcome;
use aircheck_metrics::{MetricReading, MetricUnit};
use aircheck_model::{Discrepancy, MetricStatus, Severity};

pub fn print_summary(outcome: &AnalysisOutcome) {
    if let Some(path) = &outcome.report_path {
        println!("Report: {}", path.display());
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Metric"),
        header_cell("Value"),
        header_cell("Status"),
    ]);
    apply_metrics_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Center);
    for reading in outcome.bundle.readings() {
        table.add_row(vec![
            Cell::new(reading.label),
            Cell::new(format_value(reading)),
            status_cell(reading.status),
        ]);
    }
    println!("{table}");

    print_discrepancy_table(&outcome.result.discrepancies);
}

fn print_discrepancy_table(discrepancies: &[Discrepancy]) {
    if discrepancies.is_empty() {
        return;
    }
    let mut ordered: Vec<&Discrepancy> = discrepancies.iter().collect();
    ordered.sort_by(|a, b| {
        let severity = severity_rank(b.severity).cmp(&severity_rank(a.severity));
        if severity != Ordering::Equal {
            return severity;
        }
        let kind = a.kind.as_str().cmp(b.kind.as_str());
        if kind != Ordering::Equal {
            return kind;
        }
        a.program.cmp(&b.program)
    });

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Kind"),
        header_cell("Severity"),
        header_cell("Channel"),
        header_cell("Program"),
        header_cell("Expected"),
        header_cell("Actual"),
        header_cell("Explanation"),
    ]);
    apply_discrepancy_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    for discrepancy in ordered {
        table.add_row(vec![
            Cell::new(discrepancy.kind.as_str()),
            severity_cell(discrepancy.severity),
            Cell::new(&discrepancy.channel),
            Cell::new(&discrepancy.program),
            optional_cell(discrepancy.expected.as_deref()),
            optional_cell(discrepancy.actual.as_deref()),
            Cell::new(&discrepancy.explanation),
        ]);
    }
    println!();
    println!("Discrepancies:");
    println!("{table}");
}

fn format_value(reading: &MetricReading) -> String {
    match reading.unit {
        MetricUnit::Percent => format!("{:.2}%", reading.value),
        MetricUnit::Count => format!("{}", reading.value as i64),
    }
}

fn apply_metrics_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
}

fn apply_discrepancy_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(160);
    if table.column_count() >= 7 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Fixed(14)),
            ColumnConstraint::UpperBoundary(Width::Fixed(10)),
            ColumnConstraint::UpperBoundary(Width::Fixed(12)),
            ColumnConstraint::UpperBoundary(Width::Percentage(20)),
            ColumnConstraint::UpperBoundary(Width::Fixed(12)),
            ColumnConstraint::UpperBoundary(Width::Fixed(12)),
            ColumnConstraint::UpperBoundary(Width::Percentage(40)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn status_cell(status: Option<MetricStatus>) -> Cell {
    match status {
        Some(MetricStatus::Excellent) => Cell::new("EXCELLENT")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
        Some(MetricStatus::Good) => Cell::new("GOOD").fg(Color::Green),
        Some(MetricStatus::Warning) => Cell::new("WARN").fg(Color::Yellow),
        Some(MetricStatus::Critical) => Cell::new("CRITICAL")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        Some(MetricStatus::Info) => Cell::new("INFO").fg(Color::Blue),
        None => dim_cell("-"),
    }
}

fn severity_cell(severity: Severity) -> Cell {
    match severity {
        Severity::High => Cell::new("HIGH")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        Severity::Medium => Cell::new("MEDIUM").fg(Color::Yellow),
        Severity::Low => Cell::new("LOW").fg(Color::DarkGrey),
    }
}

fn severity_rank(severity: Severity) -> u8 {
    match severity {
        Severity::High => 3,
        Severity::Medium => 2,
        Severity::Low => 1,
    }
}

fn optional_cell(value: Option<&str>) -> Cell {
    match value {
        Some(value) => Cell::new(value),
        None => dim_cell("-"),
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
