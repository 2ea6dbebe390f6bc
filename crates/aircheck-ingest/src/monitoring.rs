//! Monitoring ("Monitoreo") log parsing.

use std::path::Path;

use chrono::NaiveDate;
use tracing::debug;

use aircheck_model::AiredSpot;

use crate::channel::canonical_channel;
use crate::error::{IngestError, Result};
use crate::sheet::{HeaderMap, RawSheet, cell};

/// Column positions resolved from the monitoring export's header row.
struct MonitoringColumns {
    channel: usize,
    program: usize,
    date: Option<usize>,
    duration: Option<usize>,
}

/// Parse a monitoring-log CSV into aired spots.
///
/// The export uses the monitoring bureau's vocabulary: "Vehículo" is the
/// channel, "Soporte" the program, "Fecha" the air date. A row must carry a
/// channel and a program to count as an observation; an unparseable date is
/// kept as `None` (the engine routes such spots through the wrong-day
/// fallback). An export with no usable rows is an error; it almost always
/// means the wrong file was uploaded.
pub fn parse_monitoring_file(path: &Path) -> Result<Vec<AiredSpot>> {
    let sheet = RawSheet::from_csv_path(path)?;
    let (header_row, headers) = sheet.require_header_row(&["vehiculo", "vehículo", "soporte", "fecha"], path)?;
    let columns = resolve_monitoring_columns(&headers, path)?;

    let mut spots = Vec::new();
    let mut skipped = 0usize;
    for row in &sheet.rows[header_row + 1..] {
        let channel = canonical_channel(cell(row, columns.channel).unwrap_or_default());
        let program = cell(row, columns.program).unwrap_or_default();
        if channel.is_empty() || program.is_empty() {
            skipped += 1;
            continue;
        }
        let date = columns
            .date
            .and_then(|idx| cell(row, idx))
            .and_then(parse_air_date);
        let duration = columns
            .duration
            .and_then(|idx| cell(row, idx))
            .and_then(parse_duration)
            .unwrap_or(0);

        spots.push(AiredSpot {
            channel,
            program: program.to_string(),
            date,
            duration,
        });
    }

    debug!(
        path = %path.display(),
        spots = spots.len(),
        skipped,
        "parsed monitoring file"
    );
    if spots.is_empty() {
        return Err(IngestError::Empty {
            path: path.to_path_buf(),
        });
    }
    Ok(spots)
}

fn resolve_monitoring_columns(headers: &HeaderMap, path: &Path) -> Result<MonitoringColumns> {
    let find = |fragments: &[&str]| -> Option<usize> {
        headers
            .iter()
            .find(|(header, _)| fragments.iter().any(|fragment| header.contains(fragment)))
            .map(|(_, idx)| *idx)
    };

    let channel = find(&["vehiculo", "vehículo"]).ok_or_else(|| IngestError::MissingColumn {
        column: "vehiculo".to_string(),
        path: path.to_path_buf(),
    })?;
    let program = find(&["soporte"]).ok_or_else(|| IngestError::MissingColumn {
        column: "soporte".to_string(),
        path: path.to_path_buf(),
    })?;

    Ok(MonitoringColumns {
        channel,
        program,
        date: find(&["fecha"]),
        duration: find(&["duración", "duracion"]),
    })
}

/// Parse the export's date spellings: `YYYYMMDD` (optionally with a numeric
/// tail like `20251020.0`), `DD/MM/YYYY`, or ISO `YYYY-MM-DD`.
fn parse_air_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.len() >= 8 && trimmed.as_bytes()[..8].iter().all(u8::is_ascii_digit) {
        if let Ok(date) = NaiveDate::parse_from_str(&trimmed[..8], "%Y%m%d") {
            return Some(date);
        }
    }
    NaiveDate::parse_from_str(trimmed, "%d/%m/%Y")
        .or_else(|_| NaiveDate::parse_from_str(trimmed, "%Y-%m-%d"))
        .ok()
}

/// Durations arrive as integers or spreadsheet floats ("30", "30.0").
fn parse_duration(raw: &str) -> Option<i64> {
    raw.trim().parse::<f64>().ok().map(|seconds| seconds as i64)
}
