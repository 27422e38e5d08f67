//! Transcript parsing.
//!
//! Converts raw exported chat text into an ordered [`Entry`] sequence in a
//! single forward pass. The format has no escaping and no continuation
//! marker, so structure is recovered line by line:
//!
//! - a line matching `[DD/MM/YY, H:MM:SS AM/PM] sender: content` starts a
//!   new entry;
//! - any other line is a continuation of the entry currently being built,
//!   appended to its content with a newline;
//! - continuation lines with no open entry (before the first boundary, or
//!   after a dropped one) are discarded.
//!
//! System-notification entries (encryption banners, group-membership
//! changes) are dropped before they materialize, and candidate entries
//! whose timestamp fails to parse are dropped the same way. Both cases
//! reset continuation tracking, so trailing lines of a dropped entry vanish
//! with it. Neither is an error: a transcript of pure noise parses to an
//! empty sequence.
//!
//! # Example
//!
//! ```
//! use chatlens::TranscriptParser;
//!
//! let entries = TranscriptParser::new()
//!     .parse_str("[01/02/23, 9:15:03 PM] Alice: hello\nworld");
//!
//! assert_eq!(entries.len(), 1);
//! assert_eq!(entries[0].sender, "Alice");
//! assert_eq!(entries[0].content, "hello\nworld");
//! ```

mod classify;
mod timestamp;

use std::fs;
use std::path::Path;

use crate::config::ParserConfig;
use crate::entry::Entry;
use crate::error::Result;

use classify::classify;
use timestamp::{match_boundary, parse_timestamp};

/// System-notification markers, matched case-insensitively as substrings of
/// the boundary line's content.
const NOISE_MARKERS: &[&str] = &[
    "messages and calls are end-to-end encrypted",
    "security code changed",
    "created group",
    "added you",
    "left the group",
    "changed the group",
    "you're now an admin",
];

fn is_noise(content: &str) -> bool {
    let lower = content.to_lowercase();
    NOISE_MARKERS.iter().any(|marker| lower.contains(marker))
}

/// Strips directional zero-width marks the export embeds around media and
/// system text. Boundary detection runs on the unstripped line.
fn strip_marks(text: &str) -> String {
    text.replace(['\u{200e}', '\u{200f}'], "")
}

/// Parsing state: either no entry is open, or one is being accumulated and
/// may still receive continuation lines.
#[derive(Debug)]
enum ParseState {
    NoOpenEntry,
    Building(Entry),
}

/// Advances the state machine by one non-empty line.
///
/// Returns the next state and the entry completed by this line, if any. A
/// boundary line always closes the open entry, even when its own candidate
/// is dropped as noise or for an unparseable timestamp.
fn step(state: ParseState, line: &str, skip_noise: bool) -> (ParseState, Option<Entry>) {
    let Some(boundary) = match_boundary(line) else {
        return match state {
            ParseState::Building(mut entry) => {
                let cleaned = strip_marks(line);
                entry.content.push('\n');
                entry.content.push_str(cleaned.trim());
                entry.raw.push('\n');
                entry.raw.push_str(line);
                (ParseState::Building(entry), None)
            }
            ParseState::NoOpenEntry => (ParseState::NoOpenEntry, None),
        };
    };

    let finished = match state {
        ParseState::Building(entry) => Some(entry),
        ParseState::NoOpenEntry => None,
    };

    let cleaned = strip_marks(boundary.content);
    let content = cleaned.trim();

    if skip_noise && is_noise(content) {
        return (ParseState::NoOpenEntry, finished);
    }

    let Some(ts) = parse_timestamp(boundary.date, boundary.time) else {
        return (ParseState::NoOpenEntry, finished);
    };

    let classification = classify(content);
    let entry = Entry {
        timestamp: ts,
        sender: boundary.sender.trim().to_string(),
        content: classification.content,
        kind: classification.kind,
        call_duration_secs: classification.call_duration_secs,
        is_edited: classification.is_edited,
        raw: line.to_string(),
    };
    (ParseState::Building(entry), finished)
}

/// Parser for exported chat transcripts.
///
/// # Example
///
/// ```rust,no_run
/// use chatlens::TranscriptParser;
///
/// let parser = TranscriptParser::new();
/// let entries = parser.parse_file("chat_export.txt".as_ref())?;
/// println!("parsed {} entries", entries.len());
/// # Ok::<(), chatlens::ChatlensError>(())
/// ```
pub struct TranscriptParser {
    config: ParserConfig,
}

impl TranscriptParser {
    /// Creates a parser with default configuration.
    pub fn new() -> Self {
        Self {
            config: ParserConfig::default(),
        }
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Reads and parses a transcript file.
    ///
    /// The only error is an unreadable input; everything inside the file is
    /// handled by skipping, per the recovery rules above.
    pub fn parse_file(&self, path: &Path) -> Result<Vec<Entry>> {
        let text = fs::read_to_string(path)?;
        Ok(self.parse_str(&text))
    }

    /// Parses transcript text already in memory.
    ///
    /// Infallible: unparseable units are skipped, and input with no valid
    /// boundary line yields an empty vector. Whether that is acceptable is
    /// the caller's call, not the parser's.
    pub fn parse_str(&self, text: &str) -> Vec<Entry> {
        let mut entries = Vec::new();
        let mut state = ParseState::NoOpenEntry;

        for raw_line in text.lines() {
            let line = raw_line.trim_start_matches('\u{feff}');
            if line.trim().is_empty() {
                continue;
            }

            let (next, finished) = step(state, line, self.config.skip_noise);
            state = next;
            if let Some(entry) = finished {
                entries.push(entry);
            }
        }

        if let ParseState::Building(entry) = state {
            entries.push(entry);
        }

        entries
    }
}

impl Default for TranscriptParser {
    fn default() -> Self {
        Self::new()
    }
}
