//! Typed transcript entries.
//!
//! This module provides [`Entry`], the normalized representation of one chat
//! event, and [`EntryKind`], the closed classification taxonomy. The parser
//! produces entries in source order; everything downstream (the participant
//! directory, the metrics engine, external scoring or rendering code)
//! consumes them read-only.
//!
//! # Examples
//!
//! ```
//! use chatlens::{Entry, EntryKind};
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2023, 2, 1)
//!     .unwrap()
//!     .and_hms_opt(21, 15, 3)
//!     .unwrap();
//!
//! let entry = Entry::new(ts, "Alice", "hello", EntryKind::Text);
//! assert_eq!(entry.sender, "Alice");
//! assert!(entry.kind.is_text());
//! assert!(entry.call_duration_secs.is_none());
//! ```

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Classification of an entry's content.
///
/// Exactly one kind is assigned per entry, by the first matching rule in a
/// fixed priority order (edited-marker handling, then media omission markers,
/// then call markers, then deletion markers, then plain text). See
/// [`crate::parser`] for the rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum EntryKind {
    /// Ordinary text message.
    Text,
    /// Placeholder left by an omitted image.
    Image,
    /// Placeholder left by an omitted video.
    Video,
    /// Placeholder left by an omitted voice note or audio file.
    Audio,
    /// Placeholder left by an omitted sticker.
    Sticker,
    /// Placeholder left by an omitted GIF.
    Gif,
    /// Placeholder left by an omitted document.
    Document,
    /// Shared location (static or live).
    Location,
    /// Shared contact card.
    Contact,
    /// Answered video call.
    VideoCall,
    /// Answered voice call.
    VoiceCall,
    /// Missed or unanswered video call.
    MissedVideoCall,
    /// Missed or unanswered voice call.
    MissedVoiceCall,
    /// Message removed by its sender.
    Deleted,
}

impl EntryKind {
    /// Returns the serialized name of this kind (e.g. `"video_call"`).
    pub fn name(&self) -> &'static str {
        match self {
            EntryKind::Text => "text",
            EntryKind::Image => "image",
            EntryKind::Video => "video",
            EntryKind::Audio => "audio",
            EntryKind::Sticker => "sticker",
            EntryKind::Gif => "gif",
            EntryKind::Document => "document",
            EntryKind::Location => "location",
            EntryKind::Contact => "contact",
            EntryKind::VideoCall => "video_call",
            EntryKind::VoiceCall => "voice_call",
            EntryKind::MissedVideoCall => "missed_video_call",
            EntryKind::MissedVoiceCall => "missed_voice_call",
            EntryKind::Deleted => "deleted",
        }
    }

    /// Returns `true` for the plain text kind.
    pub fn is_text(&self) -> bool {
        matches!(self, EntryKind::Text)
    }

    /// Returns `true` for any media omission kind.
    pub fn is_media(&self) -> bool {
        matches!(
            self,
            EntryKind::Image
                | EntryKind::Video
                | EntryKind::Audio
                | EntryKind::Sticker
                | EntryKind::Gif
                | EntryKind::Document
                | EntryKind::Location
                | EntryKind::Contact
        )
    }

    /// Returns `true` for any call kind, answered or missed.
    pub fn is_call(&self) -> bool {
        matches!(
            self,
            EntryKind::VideoCall
                | EntryKind::VoiceCall
                | EntryKind::MissedVideoCall
                | EntryKind::MissedVoiceCall
        )
    }

    /// Returns `true` for missed or unanswered call kinds.
    pub fn is_missed_call(&self) -> bool {
        matches!(self, EntryKind::MissedVideoCall | EntryKind::MissedVoiceCall)
    }
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One classified, timestamped unit of a parsed transcript.
///
/// Entries are created once during parsing and never mutated afterwards.
/// They appear in source order; the parser does not re-sort, so a transcript
/// with out-of-order timestamps keeps them out of order.
///
/// # Serialization
///
/// Serializes to the interchange shape consumed by external tooling:
/// `timestamp` (ISO-8601, second precision), `sender`, `content`, `kind`,
/// `call_duration_secs` (omitted when unknown), `is_edited`. The raw-line
/// buffer is an internal parsing artifact and is never serialized.
///
/// ```
/// use chatlens::{Entry, EntryKind};
/// use chrono::NaiveDate;
///
/// let ts = NaiveDate::from_ymd_opt(2024, 3, 9)
///     .unwrap()
///     .and_hms_opt(8, 30, 0)
///     .unwrap();
/// let entry = Entry::new(ts, "Bob", "video call", EntryKind::VideoCall)
///     .with_call_duration(125);
///
/// let json = serde_json::to_string(&entry)?;
/// assert!(json.contains("\"video_call\""));
/// assert!(json.contains("\"call_duration_secs\":125"));
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Wall-clock time as written in the transcript. No time zone: exports
    /// carry local time only.
    pub timestamp: NaiveDateTime,

    /// Sender identifier exactly as it appears in the transcript.
    ///
    /// Free-form: may contain emoji, is never validated against a fixed
    /// participant set.
    pub sender: String,

    /// Reassembled text body.
    ///
    /// Continuation lines are joined with `\n`. Zero-width marks and the
    /// edited-message annotation are stripped.
    pub content: String,

    /// Content classification.
    pub kind: EntryKind,

    /// Call length in seconds, present only for answered calls with an
    /// extractable duration. `None` means unknown, not zero-length.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub call_duration_secs: Option<u32>,

    /// Whether the message carried an edited-message annotation.
    #[serde(default)]
    pub is_edited: bool,

    /// Raw source lines for this entry, continuation lines included.
    #[serde(skip)]
    pub raw: String,
}

impl Entry {
    /// Creates an entry with no call duration, no edit flag, and an empty
    /// raw-line buffer.
    pub fn new(
        timestamp: NaiveDateTime,
        sender: impl Into<String>,
        content: impl Into<String>,
        kind: EntryKind,
    ) -> Self {
        Self {
            timestamp,
            sender: sender.into(),
            content: content.into(),
            kind,
            call_duration_secs: None,
            is_edited: false,
            raw: String::new(),
        }
    }

    /// Builder method to set the call duration in seconds.
    #[must_use]
    pub fn with_call_duration(mut self, secs: u32) -> Self {
        self.call_duration_secs = Some(secs);
        self
    }

    /// Builder method to set the edited flag.
    #[must_use]
    pub fn with_edited(mut self, edited: bool) -> Self {
        self.is_edited = edited;
        self
    }

    /// Builder method to set the raw-line buffer.
    #[must_use]
    pub fn with_raw(mut self, raw: impl Into<String>) -> Self {
        self.raw = raw.into();
        self
    }

    /// Calendar date of this entry.
    pub fn date(&self) -> chrono::NaiveDate {
        self.timestamp.date()
    }

    /// Returns `true` if the content is empty or whitespace-only.
    pub fn is_empty(&self) -> bool {
        self.content.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ts() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2023, 2, 1)
            .unwrap()
            .and_hms_opt(21, 15, 3)
            .unwrap()
    }

    #[test]
    fn test_entry_new() {
        let entry = Entry::new(ts(), "Alice", "hello", EntryKind::Text);
        assert_eq!(entry.sender, "Alice");
        assert_eq!(entry.content, "hello");
        assert_eq!(entry.kind, EntryKind::Text);
        assert!(entry.call_duration_secs.is_none());
        assert!(!entry.is_edited);
        assert!(entry.raw.is_empty());
    }

    #[test]
    fn test_entry_builder() {
        let entry = Entry::new(ts(), "Bob", "voice call", EntryKind::VoiceCall)
            .with_call_duration(90)
            .with_edited(true)
            .with_raw("[01/02/23, 9:15:03 PM] Bob: voice call");

        assert_eq!(entry.call_duration_secs, Some(90));
        assert!(entry.is_edited);
        assert!(entry.raw.starts_with('['));
    }

    #[test]
    fn test_kind_predicates() {
        assert!(EntryKind::Text.is_text());
        assert!(EntryKind::Sticker.is_media());
        assert!(EntryKind::VideoCall.is_call());
        assert!(EntryKind::MissedVoiceCall.is_call());
        assert!(EntryKind::MissedVoiceCall.is_missed_call());
        assert!(!EntryKind::VoiceCall.is_missed_call());
        assert!(!EntryKind::Deleted.is_media());
        assert!(!EntryKind::Deleted.is_call());
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(EntryKind::Text.name(), "text");
        assert_eq!(EntryKind::MissedVideoCall.name(), "missed_video_call");
        assert_eq!(EntryKind::Gif.to_string(), "gif");
    }

    #[test]
    fn test_entry_serialization() {
        let entry = Entry::new(ts(), "Alice", "hi", EntryKind::Text).with_raw("raw line");
        let json = serde_json::to_string(&entry).unwrap();

        assert!(json.contains("\"2023-02-01T21:15:03\""));
        assert!(json.contains("\"text\""));
        // Unknown duration is absent, not zero
        assert!(!json.contains("call_duration_secs"));
        // Raw lines never leave the process
        assert!(!json.contains("raw line"));
    }

    #[test]
    fn test_entry_deserialization() {
        let json = r#"{
            "timestamp": "2023-02-01T21:15:03",
            "sender": "Bob",
            "content": "video call",
            "kind": "video_call",
            "call_duration_secs": 60
        }"#;
        let entry: Entry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.kind, EntryKind::VideoCall);
        assert_eq!(entry.call_duration_secs, Some(60));
        assert!(!entry.is_edited);
        assert!(entry.raw.is_empty());
    }

    #[test]
    fn test_entry_is_empty() {
        assert!(Entry::new(ts(), "Alice", "", EntryKind::Text).is_empty());
        assert!(Entry::new(ts(), "Alice", "  ", EntryKind::Text).is_empty());
        assert!(!Entry::new(ts(), "Alice", "x", EntryKind::Text).is_empty());
    }

    #[test]
    fn test_entry_date() {
        let entry = Entry::new(ts(), "Alice", "hi", EntryKind::Text);
        assert_eq!(entry.date(), NaiveDate::from_ymd_opt(2023, 2, 1).unwrap());
    }
}
