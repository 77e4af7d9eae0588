// src/specs/hours.rs
// Slot labels look like "9:00 > 10:30", sometimes followed by a price or a note.

use std::sync::LazyLock;

use regex::Regex;

static RANGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{1,2}:\d{2}) > (\d{1,2}:\d{2})").unwrap());

/// `(start, end)` taken verbatim from the start of `label`, or `(None, None)`.
pub fn parse_range(label: &str) -> (Option<String>, Option<String>) {
    match RANGE_RE.captures(label) {
        Some(caps) => (Some(s!(&caps[1])), Some(s!(&caps[2]))),
        None => (None, None),
    }
}
