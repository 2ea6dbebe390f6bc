//! Ingestion for plan and monitoring-log CSV exports.
//!
//! This crate is the engine's parsing collaborator: it turns messy
//! spreadsheet exports into clean [`aircheck_model`] records: header rows
//! discovered below banner junk, durations pulled out of "30ss"-style
//! cells, channel names canonicalized. The matching engine can then assume a
//! well-formed input universe.

pub mod channel;
pub mod error;
pub mod monitoring;
pub mod plan;
pub mod sheet;

pub use channel::{CHANNEL_ALIASES, canonical_channel};
pub use error::{IngestError, Result};
pub use monitoring::parse_monitoring_file;
pub use plan::parse_plan_file;
pub use sheet::RawSheet;
