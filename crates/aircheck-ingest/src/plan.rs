//! Plan ("Presupuesto") file parsing.

use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use aircheck_model::PlannedSpot;

use crate::channel::canonical_channel;
use crate::error::{IngestError, Result};
use crate::sheet::{HeaderMap, RawSheet, cell};

/// Day pattern assumed when the plan leaves the column blank.
const DEFAULT_DAYS: &str = "L-V";

/// Column positions resolved from the plan's header row.
struct PlanColumns {
    channel: usize,
    program: usize,
    days: Option<usize>,
    time_slot: Option<usize>,
    duration: Option<usize>,
    count: Option<usize>,
}

/// Parse a plan CSV into planned spots.
///
/// The header row is discovered by the "programa" marker. Columns are
/// recognized by substring so that "Duración", "DURACION (seg)" and similar
/// agency variants all resolve. Rows without a program name, a channel, or a
/// positive duration are skipped; the engine's input contract starts here.
pub fn parse_plan_file(path: &Path) -> Result<Vec<PlannedSpot>> {
    let sheet = RawSheet::from_csv_path(path)?;
    let (header_row, headers) = sheet.require_header_row(&["programa"], path)?;
    let columns = resolve_plan_columns(&headers, path)?;

    let mut spots = Vec::new();
    let mut skipped = 0usize;
    for row in &sheet.rows[header_row + 1..] {
        let Some(program) = cell(row, columns.program) else {
            skipped += 1;
            continue;
        };
        let duration = columns
            .duration
            .and_then(|idx| cell(row, idx))
            .and_then(extract_duration_seconds)
            .unwrap_or(0);
        if duration <= 0 {
            skipped += 1;
            continue;
        }
        let channel = canonical_channel(cell(row, columns.channel).unwrap_or_default());
        if channel.is_empty() {
            skipped += 1;
            continue;
        }
        let days = columns
            .days
            .and_then(|idx| cell(row, idx))
            .unwrap_or(DEFAULT_DAYS);
        let time_slot = columns
            .time_slot
            .and_then(|idx| cell(row, idx))
            .unwrap_or_default();
        let count = columns
            .count
            .and_then(|idx| cell(row, idx))
            .and_then(|value| value.trim().parse::<u32>().ok())
            .filter(|count| *count >= 1)
            .unwrap_or(1);

        spots.push(PlannedSpot {
            channel,
            program: program.to_string(),
            days: days.to_string(),
            time_slot: time_slot.to_string(),
            duration,
            count,
        });
    }

    debug!(
        path = %path.display(),
        spots = spots.len(),
        skipped,
        "parsed plan file"
    );
    Ok(spots)
}

fn resolve_plan_columns(headers: &HeaderMap, path: &Path) -> Result<PlanColumns> {
    let find = |fragments: &[&str]| -> Option<usize> {
        headers
            .iter()
            .find(|(header, _)| fragments.iter().any(|fragment| header.contains(fragment)))
            .map(|(_, idx)| *idx)
    };

    let channel = find(&["canal"]).ok_or_else(|| IngestError::MissingColumn {
        column: "canal".to_string(),
        path: path.to_path_buf(),
    })?;
    let program = find(&["programa"]).ok_or_else(|| IngestError::MissingColumn {
        column: "programa".to_string(),
        path: path.to_path_buf(),
    })?;

    Ok(PlanColumns {
        channel,
        program,
        days: find(&["día", "dias"]),
        time_slot: find(&["horario", "hora"]),
        duration: find(&["duración", "duracion"]),
        count: find(&["cantidad"]),
    })
}

/// Pull the first digit run out of a duration cell ("35ss", "30 seg", "45").
fn extract_duration_seconds(raw: &str) -> Option<i64> {
    static DIGITS: OnceLock<Regex> = OnceLock::new();
    let digits = DIGITS.get_or_init(|| Regex::new(r"(\d+)").expect("digit pattern"));
    digits
        .captures(raw)
        .and_then(|captures| captures.get(1))
        .and_then(|group| group.as_str().parse().ok())
}
