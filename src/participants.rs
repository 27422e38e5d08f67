//! Participant directory and display labels.
//!
//! Senders are free-form strings with no intrinsic attributes; uniqueness
//! is structural. The directory never assumes a participant count — group
//! transcripts with many senders work the same as one-on-one chats.
//! Anything two-participant-shaped belongs in presentation code, not here.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::entry::Entry;

/// Collects the distinct sender identifiers of a parsed sequence, sorted
/// lexicographically.
///
/// The ordering exists for deterministic downstream display, not ranking.
///
/// # Example
///
/// ```
/// use chatlens::{TranscriptParser, participants::distinct_senders};
///
/// let entries = TranscriptParser::new().parse_str(
///     "[01/02/23, 9:15:03 PM] Bob: hi\n\
///      [01/02/23, 9:16:00 PM] Alice: hey\n\
///      [01/02/23, 9:17:00 PM] Bob: how are you",
/// );
/// assert_eq!(distinct_senders(&entries), vec!["Alice", "Bob"]);
/// ```
pub fn distinct_senders(entries: &[Entry]) -> Vec<String> {
    let senders: BTreeSet<&str> = entries.iter().map(|e| e.sender.as_str()).collect();
    senders.into_iter().map(String::from).collect()
}

/// Caller-owned mapping from raw sender identifiers to display labels.
///
/// The core never reads or validates this map; it exists so scoring and
/// rendering collaborators can share one lookup. Unmapped senders resolve
/// to their raw identifier.
///
/// # Example
///
/// ```
/// use chatlens::participants::LabelMap;
///
/// let labels = LabelMap::new().with_label("~~", "Arvind");
/// assert_eq!(labels.resolve("~~"), "Arvind");
/// assert_eq!(labels.resolve("bae \u{1faf6}"), "bae \u{1faf6}");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelMap {
    labels: std::collections::BTreeMap<String, String>,
}

impl LabelMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to add one label.
    #[must_use]
    pub fn with_label(mut self, raw: impl Into<String>, label: impl Into<String>) -> Self {
        self.labels.insert(raw.into(), label.into());
        self
    }

    /// Adds or replaces a label.
    pub fn insert(&mut self, raw: impl Into<String>, label: impl Into<String>) {
        self.labels.insert(raw.into(), label.into());
    }

    /// Resolves a raw sender identifier to its display label, falling back
    /// to the identifier itself.
    pub fn resolve<'a>(&'a self, raw: &'a str) -> &'a str {
        self.labels.get(raw).map_or(raw, String::as_str)
    }

    /// Number of mapped senders.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns `true` if no labels are mapped.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
