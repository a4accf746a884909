//! Duration phrases in queries ("within 40 minutes", "30-45 mins").

use std::sync::LazyLock;

use regex::Regex;

static CEILING_PHRASE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:less than|within|under|max|maximum|at most)\s+([0-9]+)\s*(?:min|minutes|mins)")
        .expect("valid regex")
});

static RANGE_PHRASE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)([0-9]+)(?:\s*-\s*|\s+to\s+)([0-9]+)\s*(?:min|minutes|mins)").expect("valid regex")
});

/// Upper bound requested by a bounded-duration phrase, if one parses.
#[must_use]
pub fn ceiling_minutes(query: &str) -> Option<u32> {
    CEILING_PHRASE
        .captures(query)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Inclusive `(low, high)` bounds requested by a range phrase, if one parses.
#[must_use]
pub fn range_minutes(query: &str) -> Option<(u32, u32)> {
    let caps = RANGE_PHRASE.captures(query)?;
    let low = caps.get(1)?.as_str().parse().ok()?;
    let high = caps.get(2)?.as_str().parse().ok()?;
    Some((low, high))
}
