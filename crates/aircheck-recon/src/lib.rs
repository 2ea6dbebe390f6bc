//! Plan-versus-broadcast reconciliation engine.
//!
//! Pure engine crate: receives already-parsed records, returns a
//! [`aircheck_model::MatchResult`]. No file parsing, no I/O, no state
//! between runs. Concurrent analyses only need their own input slices.

pub mod day;
pub mod engine;
pub mod predicates;

pub use day::{day_eligible, expand_day_pattern};
pub use engine::{MatchOptions, expand_planned, match_spots};
pub use predicates::{channels_match, duration_within, program_similarity};
