//! Conversation statistics over a parsed entry sequence.
//!
//! [`MetricsEngine`] borrows the immutable sequence read-only and recomputes
//! every query from scratch. There is no cached aggregate state, so results
//! can never go stale and independent queries are safe to evaluate
//! concurrently. All maps are keyed by the literal sender identifier;
//! display labels belong to the caller (see
//! [`LabelMap`](crate::participants::LabelMap)).
//!
//! Asking about a sender that never appears in the sequence is not an
//! error — the sender is simply absent from the returned map, and lookups
//! fall back to the caller's default.
//!
//! # Example
//!
//! ```
//! use chatlens::{MetricsEngine, TranscriptParser};
//!
//! let entries = TranscriptParser::new().parse_str(
//!     "[01/02/23, 9:15:03 PM] Alice: hi\n\
//!      [01/02/23, 9:15:40 PM] Bob: hey\n\
//!      [01/02/23, 9:16:10 PM] Bob: what's up?",
//! );
//!
//! let engine = MetricsEngine::new(&entries);
//! assert_eq!(engine.message_counts()["Bob"], 2);
//! assert_eq!(engine.double_texts()["Bob"], 1);
//! ```

mod histogram;
mod lexical;
mod timing;

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::config::MetricsConfig;
use crate::entry::{Entry, EntryKind};

/// Per-sender media tallies, one field per media kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaTally {
    pub images: u64,
    pub videos: u64,
    pub audio: u64,
    pub stickers: u64,
    pub gifs: u64,
    pub documents: u64,
    pub locations: u64,
    pub contacts: u64,
}

/// Per-sender call tallies, answered and missed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallTally {
    pub video: u64,
    pub voice: u64,
    pub missed_video: u64,
    pub missed_voice: u64,
}

/// Statistics engine over an immutable entry sequence.
///
/// Every method is a pure query: no shared mutable state, no call-order
/// dependence. Construction is free; the work happens per call.
pub struct MetricsEngine<'a> {
    entries: &'a [Entry],
    config: MetricsConfig,
}

impl<'a> MetricsEngine<'a> {
    /// Creates an engine with default thresholds.
    pub fn new(entries: &'a [Entry]) -> Self {
        Self {
            entries,
            config: MetricsConfig::default(),
        }
    }

    /// Creates an engine with custom thresholds.
    pub fn with_config(entries: &'a [Entry], config: MetricsConfig) -> Self {
        Self { entries, config }
    }

    /// The borrowed entry sequence.
    pub fn entries(&self) -> &[Entry] {
        self.entries
    }

    /// The active configuration.
    pub fn config(&self) -> &MetricsConfig {
        &self.config
    }

    pub(crate) fn text_entries(&self) -> impl Iterator<Item = &'a Entry> {
        self.entries.iter().filter(|e| e.kind.is_text())
    }

    // =========================================================================
    // Counts
    // =========================================================================

    /// Total entries per sender.
    pub fn message_counts(&self) -> BTreeMap<String, u64> {
        let mut counts = BTreeMap::new();
        for entry in self.entries {
            *counts.entry(entry.sender.clone()).or_insert(0) += 1;
        }
        counts
    }

    /// Text entries per sender. Denominator for length-based averages.
    pub fn text_message_counts(&self) -> BTreeMap<String, u64> {
        let mut counts = BTreeMap::new();
        for entry in self.text_entries() {
            *counts.entry(entry.sender.clone()).or_insert(0) += 1;
        }
        counts
    }

    /// Percentage share of total entries per sender. Empty sequence yields
    /// an empty map.
    pub fn message_share(&self) -> BTreeMap<String, f64> {
        let counts = self.message_counts();
        let total: u64 = counts.values().sum();
        if total == 0 {
            return BTreeMap::new();
        }
        counts
            .into_iter()
            .map(|(sender, n)| (sender, n as f64 / total as f64 * 100.0))
            .collect()
    }

    /// Edited entries per sender.
    pub fn edited_counts(&self) -> BTreeMap<String, u64> {
        let mut counts = BTreeMap::new();
        for entry in self.entries.iter().filter(|e| e.is_edited) {
            *counts.entry(entry.sender.clone()).or_insert(0) += 1;
        }
        counts
    }

    /// Media entries per sender, broken down by kind.
    pub fn media_counts(&self) -> BTreeMap<String, MediaTally> {
        let mut counts: BTreeMap<String, MediaTally> = BTreeMap::new();
        for entry in self.entries.iter().filter(|e| e.kind.is_media()) {
            let tally = counts.entry(entry.sender.clone()).or_default();
            match entry.kind {
                EntryKind::Image => tally.images += 1,
                EntryKind::Video => tally.videos += 1,
                EntryKind::Audio => tally.audio += 1,
                EntryKind::Sticker => tally.stickers += 1,
                EntryKind::Gif => tally.gifs += 1,
                EntryKind::Document => tally.documents += 1,
                EntryKind::Location => tally.locations += 1,
                EntryKind::Contact => tally.contacts += 1,
                _ => {}
            }
        }
        counts
    }

    /// Call entries per sender, broken down by kind.
    pub fn call_counts(&self) -> BTreeMap<String, CallTally> {
        let mut counts: BTreeMap<String, CallTally> = BTreeMap::new();
        for entry in self.entries.iter().filter(|e| e.kind.is_call()) {
            let tally = counts.entry(entry.sender.clone()).or_default();
            match entry.kind {
                EntryKind::VideoCall => tally.video += 1,
                EntryKind::VoiceCall => tally.voice += 1,
                EntryKind::MissedVideoCall => tally.missed_video += 1,
                EntryKind::MissedVoiceCall => tally.missed_voice += 1,
                _ => {}
            }
        }
        counts
    }

    /// Total call time per sender in whole minutes.
    ///
    /// Seconds are summed first, then divided by 60 with the remainder
    /// dropped, not rounded. Entries with an unknown duration contribute
    /// nothing.
    pub fn call_minutes(&self) -> BTreeMap<String, u64> {
        let mut seconds: BTreeMap<String, u64> = BTreeMap::new();
        for entry in self.entries {
            if let Some(secs) = entry.call_duration_secs {
                *seconds.entry(entry.sender.clone()).or_insert(0) += u64::from(secs);
            }
        }
        seconds.into_iter().map(|(s, total)| (s, total / 60)).collect()
    }

    // =========================================================================
    // Derived summaries
    // =========================================================================

    /// First and last entry timestamps in source order (not min/max).
    pub fn date_range(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        match (self.entries.first(), self.entries.last()) {
            (Some(first), Some(last)) => Some((first.timestamp, last.timestamp)),
            _ => None,
        }
    }

    /// Inclusive day count between the first and last entry dates. Zero for
    /// an empty sequence.
    pub fn total_days(&self) -> i64 {
        match self.date_range() {
            Some((first, last)) => (last.date() - first.date()).num_days() + 1,
            None => 0,
        }
    }

    /// Count of distinct calendar dates appearing anywhere in the sequence.
    pub fn active_days(&self) -> u64 {
        let dates: BTreeSet<_> = self.entries.iter().map(|e| e.date()).collect();
        dates.len() as u64
    }

    /// Computes the full bundle of result sets in one call.
    pub fn report(&self) -> MetricsReport {
        MetricsReport {
            message_counts: self.message_counts(),
            text_message_counts: self.text_message_counts(),
            message_share: self.message_share(),
            double_texts: self.double_texts(),
            initiations: self.initiations(),
            mean_response_mins: self.mean_response_mins(),
            median_response_mins: self.median_response_mins(),
            immediate_reply_share: self.immediate_reply_share(),
            first_active_hours: self.first_active_hours(),
            word_counts: self.word_counts(),
            character_counts: self.character_counts(),
            unique_word_counts: self.unique_word_counts(),
            mean_words_per_text: self.mean_words_per_text(),
            emoji_counts: self.emoji_counts(),
            link_counts: self.link_counts(),
            media_counts: self.media_counts(),
            call_counts: self.call_counts(),
            call_minutes: self.call_minutes(),
            edited_counts: self.edited_counts(),
            hourly_histogram: self.hourly_histogram(),
            weekday_histogram: self.weekday_histogram(),
            activity_heatmap: self.activity_heatmap(),
            monthly_totals: self.monthly_totals(),
            monthly_counts_by_sender: self.monthly_counts_by_sender(),
            monthly_mean_response_mins: self.monthly_mean_response_mins(),
            monthly_call_totals: self.monthly_call_totals(),
            date_range: self.date_range(),
            total_days: self.total_days(),
            active_days: self.active_days(),
        }
    }
}

/// Bucket key for month-grouped aggregates: `YYYY-MM`.
pub(crate) fn month_key(ts: NaiveDateTime) -> String {
    ts.format("%Y-%m").to_string()
}

/// The full bundle of named result sets, computed fresh by
/// [`MetricsEngine::report`].
///
/// All mappings are keyed by raw sender identifiers. Numeric fields keep
/// the engine's rounding rules (call minutes truncated, shares in percent);
/// one-decimal display rounding is a presentation concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsReport {
    pub message_counts: BTreeMap<String, u64>,
    pub text_message_counts: BTreeMap<String, u64>,
    pub message_share: BTreeMap<String, f64>,
    pub double_texts: BTreeMap<String, u64>,
    pub initiations: BTreeMap<String, u64>,
    pub mean_response_mins: BTreeMap<String, f64>,
    pub median_response_mins: BTreeMap<String, f64>,
    pub immediate_reply_share: BTreeMap<String, f64>,
    pub first_active_hours: BTreeMap<String, f64>,
    pub word_counts: BTreeMap<String, u64>,
    pub character_counts: BTreeMap<String, u64>,
    pub unique_word_counts: BTreeMap<String, u64>,
    pub mean_words_per_text: BTreeMap<String, f64>,
    pub emoji_counts: BTreeMap<String, u64>,
    pub link_counts: BTreeMap<String, u64>,
    pub media_counts: BTreeMap<String, MediaTally>,
    pub call_counts: BTreeMap<String, CallTally>,
    pub call_minutes: BTreeMap<String, u64>,
    pub edited_counts: BTreeMap<String, u64>,
    pub hourly_histogram: [u64; 24],
    pub weekday_histogram: [u64; 7],
    pub activity_heatmap: [[u64; 24]; 7],
    pub monthly_totals: BTreeMap<String, u64>,
    pub monthly_counts_by_sender: BTreeMap<String, BTreeMap<String, u64>>,
    pub monthly_mean_response_mins: BTreeMap<String, BTreeMap<String, f64>>,
    pub monthly_call_totals: BTreeMap<String, u64>,
    pub date_range: Option<(NaiveDateTime, NaiveDateTime)>,
    pub total_days: i64,
    pub active_days: u64,
}
