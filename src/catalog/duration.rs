//! Minutes extracted from catalog duration strings.

use std::sync::LazyLock;

use regex::Regex;

static FIRST_INTEGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("valid regex"));

/// First run of ASCII digits in `text`, if it fits in a `u32`.
#[must_use]
pub fn first_integer(text: &str) -> Option<u32> {
    FIRST_INTEGER
        .find(text)
        .and_then(|found| found.as_str().parse().ok())
}
