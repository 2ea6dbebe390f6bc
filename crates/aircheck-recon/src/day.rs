//! Day-pattern expansion and eligibility.
//!
//! Plan files express scheduling with single-letter Spanish day tokens:
//! L, M, X, J, V, S, D for Monday through Sunday. Two grammars are accepted:
//! a range like `"L-V"` (wrapping past Sunday when start > end, so `"D-M"`
//! covers Sunday through Tuesday) and a comma- or space-separated token list
//! like `"L, X, V"`. Anything else falls back to the Mon-Fri weekday set.

use chrono::{Datelike, NaiveDate};
use std::collections::BTreeSet;

/// Weekday indices with Monday = 0 .. Sunday = 6, matching
/// [`chrono::Weekday::num_days_from_monday`].
const MONDAY: u32 = 0;
const FRIDAY: u32 = 4;
const DAYS_PER_WEEK: u32 = 7;

fn token_index(token: &str) -> Option<u32> {
    match token.trim() {
        "L" => Some(0),
        "M" => Some(1),
        "X" => Some(2),
        "J" => Some(3),
        "V" => Some(4),
        "S" => Some(5),
        "D" => Some(6),
        _ => None,
    }
}

/// Expand a day pattern into a set of weekday indices (Mon = 0 .. Sun = 6).
///
/// Empty or unparseable patterns default to the Mon-Fri weekday set; plan
/// rows frequently leave the column blank for weekday-strip buys.
pub fn expand_day_pattern(pattern: &str) -> BTreeSet<u32> {
    let normalized = pattern.trim().to_uppercase();
    if normalized.is_empty() {
        return weekday_set();
    }

    if let Some((start, end)) = normalized.split_once('-')
        && let Some(start) = token_index(start)
        && let Some(end) = token_index(end)
    {
        return expand_range(start, end);
    }

    let days: BTreeSet<u32> = normalized
        .split([',', ' '])
        .filter_map(token_index)
        .collect();
    if days.is_empty() { weekday_set() } else { days }
}

/// True when the aired date's weekday falls inside the plan's day pattern.
/// A spot without a parseable date is never day-eligible.
pub fn day_eligible(pattern: &str, date: Option<NaiveDate>) -> bool {
    let Some(date) = date else {
        return false;
    };
    expand_day_pattern(pattern).contains(&date.weekday().num_days_from_monday())
}

fn expand_range(start: u32, end: u32) -> BTreeSet<u32> {
    if start <= end {
        (start..=end).collect()
    } else {
        // Wrap past Sunday: "D-M" is Sunday through Tuesday.
        (start..DAYS_PER_WEEK).chain(0..=end).collect()
    }
}

fn weekday_set() -> BTreeSet<u32> {
    (MONDAY..=FRIDAY).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn days(pattern: &str) -> Vec<u32> {
        expand_day_pattern(pattern).into_iter().collect()
    }

    #[test]
    fn weekday_range() {
        assert_eq!(days("L-V"), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn range_wraps_past_sunday() {
        assert_eq!(days("D-M"), vec![0, 1, 6]);
        assert_eq!(days("V-L"), vec![0, 4, 5, 6]);
    }

    #[test]
    fn single_day_range_is_one_day() {
        assert_eq!(days("S-S"), vec![5]);
    }

    #[test]
    fn token_list_with_commas_and_spaces() {
        assert_eq!(days("L,X,V"), vec![0, 2, 4]);
        assert_eq!(days("s d"), vec![5, 6]);
    }

    #[test]
    fn blank_or_garbage_defaults_to_weekdays() {
        assert_eq!(days(""), vec![0, 1, 2, 3, 4]);
        assert_eq!(days("   "), vec![0, 1, 2, 3, 4]);
        assert_eq!(days("TBD"), vec![0, 1, 2, 3, 4]);
        assert_eq!(days("Q-Z"), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn eligibility_checks_the_weekday() {
        // 2025-10-20 is a Monday, 2025-10-19 a Sunday.
        let monday = NaiveDate::from_ymd_opt(2025, 10, 20);
        let sunday = NaiveDate::from_ymd_opt(2025, 10, 19);
        assert!(day_eligible("L-V", monday));
        assert!(!day_eligible("L-V", sunday));
        assert!(day_eligible("D-M", sunday));
        assert!(day_eligible("D-M", monday));
    }

    #[test]
    fn missing_date_is_never_eligible() {
        assert!(!day_eligible("L-V", None));
    }
}
