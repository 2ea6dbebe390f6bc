//! Channel-name canonicalization.
//!
//! The plan and the monitoring export name the same broadcaster in several
//! spellings ("TELEVISION NACIONAL", "TVN-2", "TVN 2" are all TVN). The
//! matching engine assumes one canonical vocabulary, so every record is
//! normalized here before it leaves ingestion. The table is a static lookup:
//! the same raw name always maps to the same canonical name.

/// Raw spreadsheet vocabulary and the canonical name each entry maps to.
pub const CHANNEL_ALIASES: &[(&str, &str)] = &[
    ("TELEMETRO", "Telemetro"),
    ("MEDCOM", "Telemetro"),
    ("TELEVISION NACIONAL", "TVN"),
    ("TVN", "TVN"),
    ("TVN-2", "TVN"),
    ("TVN 2", "TVN"),
];

/// Map a raw channel name to its canonical form.
///
/// Lookup is case-insensitive on the trimmed name; unknown channels pass
/// through trimmed but otherwise untouched.
pub fn canonical_channel(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    let upper = trimmed.to_uppercase();
    for (alias, canonical) in CHANNEL_ALIASES {
        if upper == *alias {
            return (*canonical).to_string();
        }
    }
    trimmed.to_string()
}
