//! Boundary-line detection and timestamp parsing.
//!
//! A line starts a new entry only when it matches the fixed pattern
//! `[DD/MM/YY, H:MM:SS AM/PM] sender: content`. Exports put a narrow
//! no-break space (U+202F) before the AM/PM marker on some platforms and an
//! ordinary space or NBSP on others; all three must parse identically.

use std::sync::LazyLock;

use chrono::NaiveDateTime;
use regex::Regex;

/// Entry boundary: `[date, time] sender: content`.
///
/// The sender match is non-greedy so it stops at the first `: `, and the
/// time group tolerates U+202F / U+00A0 before the AM/PM marker.
static BOUNDARY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\[(\d{2}/\d{2}/\d{2}), (\d{1,2}:\d{2}:\d{2}[\s\x{202F}\x{A0}]*[AP]M)\] (.+?): (.*)$",
    )
    .unwrap()
});

/// Captured pieces of a boundary line, borrowed from the source line.
#[derive(Debug)]
pub(crate) struct BoundaryLine<'a> {
    pub date: &'a str,
    pub time: &'a str,
    pub sender: &'a str,
    pub content: &'a str,
}

/// Matches a line against the boundary pattern.
///
/// Returns `None` for continuation lines and anything else that does not
/// carry a `[date, time] sender:` prefix.
pub(crate) fn match_boundary(line: &str) -> Option<BoundaryLine<'_>> {
    let caps = BOUNDARY.captures(line)?;
    Some(BoundaryLine {
        date: caps.get(1).map_or("", |m| m.as_str()),
        time: caps.get(2).map_or("", |m| m.as_str()),
        sender: caps.get(3).map_or("", |m| m.as_str()),
        content: caps.get(4).map_or("", |m| m.as_str()),
    })
}

/// Parses the date and time captures of a boundary line.
///
/// Narrow no-break spaces and NBSPs around the AM/PM marker are rewritten to
/// ordinary spaces first. Returns `None` when the normalized text still does
/// not parse; the caller drops the candidate entry and continues.
pub(crate) fn parse_timestamp(date: &str, time: &str) -> Option<NaiveDateTime> {
    let time = time.replace(['\u{202f}', '\u{a0}'], " ");
    let combined = format!("{date} {time}");
    NaiveDateTime::parse_from_str(&combined, "%d/%m/%y %I:%M:%S %p").ok()
}
