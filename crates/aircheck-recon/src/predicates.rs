//! Pure match predicates: channel equality, duration tolerance, and
//! program-name similarity.

use rapidfuzz::distance::levenshtein;

/// Case-insensitive, whitespace-trimmed channel equality.
///
/// Channel vocabulary is canonicalized during ingestion; an empty name on
/// either side never matches.
pub fn channels_match(planned: &str, aired: &str) -> bool {
    let planned = planned.trim();
    let aired = aired.trim();
    if planned.is_empty() || aired.is_empty() {
        return false;
    }
    planned.to_lowercase() == aired.to_lowercase()
}

/// True when the aired duration is within `tolerance` seconds of the plan.
pub fn duration_within(planned: i64, aired: i64, tolerance: i64) -> bool {
    (planned - aired).abs() <= tolerance
}

/// Program-name similarity in `[0, 1]`.
///
/// Both names are lowercased with internal whitespace collapsed before
/// comparison. Exact normalized equality scores 1.0; otherwise the score is
/// `1 - edit_distance / max(len)`. An empty name on either side scores 0.0.
pub fn program_similarity(a: &str, b: &str) -> f64 {
    let left = normalize(a);
    let right = normalize(b);
    if left.is_empty() || right.is_empty() {
        return 0.0;
    }
    if left == right {
        return 1.0;
    }
    levenshtein::normalized_similarity(left.chars(), right.chars())
}

/// Lowercase and collapse runs of whitespace to single spaces.
fn normalize(s: &str) -> String {
    s.trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channels_ignore_case_and_whitespace() {
        assert!(channels_match("TVN", "tvn"));
        assert!(channels_match(" Telemetro ", "TELEMETRO"));
        assert!(!channels_match("TVN", "Telemetro"));
    }

    #[test]
    fn empty_channel_never_matches() {
        assert!(!channels_match("", "TVN"));
        assert!(!channels_match("TVN", "   "));
    }

    #[test]
    fn duration_tolerance_boundary() {
        assert!(duration_within(30, 32, 2));
        assert!(duration_within(30, 28, 2));
        assert!(!duration_within(30, 33, 2));
        assert!(!duration_within(30, 27, 2));
    }

    #[test]
    fn identical_programs_score_one() {
        assert_eq!(program_similarity("Noticias AM", "noticias   am"), 1.0);
    }

    #[test]
    fn empty_program_scores_zero() {
        assert_eq!(program_similarity("", "Noticias"), 0.0);
        assert_eq!(program_similarity("Noticias", "  "), 0.0);
    }

    #[test]
    fn similarity_is_normalized_edit_distance() {
        // One substitution across five characters: 1 - 1/5.
        let score = program_similarity("abcde", "abcdx");
        assert!((score - 0.8).abs() < 1e-9, "got {score}");
        // One substitution across four characters: 1 - 1/4.
        let score = program_similarity("abcd", "abcx");
        assert!((score - 0.75).abs() < 1e-9, "got {score}");
    }

    #[test]
    fn unrelated_programs_score_low() {
        assert!(program_similarity("Noticias", "Cine de Oro") < 0.5);
    }
}
