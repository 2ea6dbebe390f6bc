//! Raw sheet loading and header-row discovery.
//!
//! Plan and monitoring files are CSV exports of hand-maintained
//! spreadsheets: the real header row sits below title banners, logos, and
//! blank lines, and its exact wording drifts between agencies. Rather than
//! trusting row zero, the loader scans the top of the sheet for a row
//! containing a known marker substring and maps the columns it finds there.

use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{IngestError, Result};

/// How many leading rows are searched for the header.
const HEADER_SCAN_ROWS: usize = 20;

/// A CSV file loaded as untyped trimmed cells.
#[derive(Debug, Clone)]
pub struct RawSheet {
    pub rows: Vec<Vec<String>>,
}

/// Column positions keyed by lowercased header text.
pub type HeaderMap = BTreeMap<String, usize>;

impl RawSheet {
    /// Load a CSV file without assuming any header placement. Rows may have
    /// ragged lengths; cells are trimmed in place.
    pub fn from_csv_path(path: &Path) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(path)?;
        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(record.iter().map(|cell| cell.trim().to_string()).collect());
        }
        Ok(Self { rows })
    }

    /// Find the header row: the first of the leading rows with a cell whose
    /// lowercased text contains any of `markers`. Returns the row index and
    /// the column map built from that row's non-empty cells.
    pub fn find_header_row(&self, markers: &[&str]) -> Option<(usize, HeaderMap)> {
        for (row_idx, row) in self.rows.iter().take(HEADER_SCAN_ROWS).enumerate() {
            let is_header = row.iter().any(|cell| {
                let lowered = cell.to_lowercase();
                markers.iter().any(|marker| lowered.contains(marker))
            });
            if !is_header {
                continue;
            }
            let mut headers = HeaderMap::new();
            for (col_idx, cell) in row.iter().enumerate() {
                if !cell.is_empty() {
                    headers.insert(cell.to_lowercase(), col_idx);
                }
            }
            return Some((row_idx, headers));
        }
        None
    }

    /// Like [`find_header_row`](Self::find_header_row) but failing with a
    /// [`IngestError::HeaderNotFound`] naming the first marker.
    pub fn require_header_row(&self, markers: &[&str], path: &Path) -> Result<(usize, HeaderMap)> {
        self.find_header_row(markers)
            .ok_or_else(|| IngestError::HeaderNotFound {
                path: path.to_path_buf(),
                marker: markers.first().copied().unwrap_or_default().to_string(),
            })
    }
}

/// Look up a cell by header position, empty cells reading as `None`.
pub fn cell<'a>(row: &'a [String], idx: usize) -> Option<&'a str> {
    row.get(idx)
        .map(String::as_str)
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn sheet_from(content: &str) -> RawSheet {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        RawSheet::from_csv_path(file.path()).unwrap()
    }

    #[test]
    fn header_found_below_banner_rows() {
        let sheet = sheet_from(
            "CAMPAIGN PLAN Q4,,\n\
             ,,\n\
             Programa,Días,Duración\n\
             Noticias,L-V,30\n",
        );
        let (row_idx, headers) = sheet.find_header_row(&["programa"]).unwrap();
        assert_eq!(row_idx, 2);
        assert_eq!(headers.get("programa"), Some(&0));
        assert_eq!(headers.get("duración"), Some(&2));
    }

    #[test]
    fn missing_marker_yields_none() {
        let sheet = sheet_from("a,b,c\n1,2,3\n");
        assert!(sheet.find_header_row(&["programa"]).is_none());
    }

    #[test]
    fn ragged_rows_are_tolerated() {
        let sheet = sheet_from("Programa,Días\nNoticias\n");
        assert_eq!(sheet.rows[1].len(), 1);
        assert_eq!(cell(&sheet.rows[1], 1), None);
    }
}
