//! Content classification rules.
//!
//! Classification runs once per entry, against the boundary line's cleaned
//! content. The rules form an ordered table evaluated top to bottom with
//! early exit, so the priority order (media before calls before deletion
//! markers) is data, not implicit code order. Continuation lines never
//! re-classify an entry.

use std::sync::LazyLock;

use regex::Regex;

use crate::entry::EntryKind;

/// Annotation appended to edited messages. Sometimes preceded by a
/// zero-width mark in the wild; that mark is stripped before we get here.
const EDITED_MARKER: &str = "<This message was edited>";

static HOURS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)(\d+)\s*hr").unwrap());
static MINUTES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)(\d+)\s*min").unwrap());
static SECONDS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)(\d+)\s*sec").unwrap());

/// What a matched rule resolves to.
#[derive(Clone, Copy)]
enum Outcome {
    /// A fixed kind with no duration.
    Plain(EntryKind),
    /// A call marker: downgraded to the missed variant when a no-answer
    /// marker is present, otherwise the answered kind with any extractable
    /// duration.
    Call {
        answered: EntryKind,
        missed: EntryKind,
    },
}

/// One classification rule. The predicate runs against the lowercased
/// content.
struct Rule {
    applies: fn(&str) -> bool,
    outcome: Outcome,
}

/// Ordered rule table; the first match wins.
const RULES: &[Rule] = &[
    Rule {
        applies: |c| c.contains("image omitted"),
        outcome: Outcome::Plain(EntryKind::Image),
    },
    Rule {
        applies: |c| c.contains("video omitted"),
        outcome: Outcome::Plain(EntryKind::Video),
    },
    Rule {
        applies: |c| c.contains("audio omitted"),
        outcome: Outcome::Plain(EntryKind::Audio),
    },
    Rule {
        applies: |c| c.contains("sticker omitted"),
        outcome: Outcome::Plain(EntryKind::Sticker),
    },
    Rule {
        applies: |c| c.contains("gif omitted"),
        outcome: Outcome::Plain(EntryKind::Gif),
    },
    Rule {
        applies: |c| c.contains("document omitted"),
        outcome: Outcome::Plain(EntryKind::Document),
    },
    Rule {
        applies: |c| c.contains("location:") || c.contains("live location shared"),
        outcome: Outcome::Plain(EntryKind::Location),
    },
    Rule {
        applies: |c| c.contains("contact card omitted"),
        outcome: Outcome::Plain(EntryKind::Contact),
    },
    Rule {
        applies: |c| c.contains("video call"),
        outcome: Outcome::Call {
            answered: EntryKind::VideoCall,
            missed: EntryKind::MissedVideoCall,
        },
    },
    Rule {
        applies: |c| c.contains("voice call") || (c.contains("call") && !c.contains("video")),
        outcome: Outcome::Call {
            answered: EntryKind::VoiceCall,
            missed: EntryKind::MissedVoiceCall,
        },
    },
    Rule {
        applies: |c| {
            c.contains("this message was deleted") || c.contains("you deleted this message")
        },
        outcome: Outcome::Plain(EntryKind::Deleted),
    },
];

/// Result of classifying one entry's boundary content.
#[derive(Debug)]
pub(crate) struct Classification {
    pub kind: EntryKind,
    pub call_duration_secs: Option<u32>,
    pub is_edited: bool,
    /// Content with the edited annotation stripped.
    pub content: String,
}

/// Classifies boundary content, detecting and stripping the edited marker
/// before the rule table runs.
pub(crate) fn classify(content: &str) -> Classification {
    let is_edited = content.contains(EDITED_MARKER);
    let content = if is_edited {
        content.replace(EDITED_MARKER, "").trim().to_string()
    } else {
        content.to_string()
    };

    let lower = content.to_lowercase();
    for rule in RULES {
        if (rule.applies)(&lower) {
            let (kind, call_duration_secs) = match rule.outcome {
                Outcome::Plain(kind) => (kind, None),
                Outcome::Call { answered, missed } => {
                    if is_unanswered(&lower) {
                        (missed, None)
                    } else {
                        (answered, call_duration_secs(&content))
                    }
                }
            };
            return Classification {
                kind,
                call_duration_secs,
                is_edited,
                content,
            };
        }
    }

    Classification {
        kind: EntryKind::Text,
        call_duration_secs: None,
        is_edited,
        content,
    }
}

fn is_unanswered(lower: &str) -> bool {
    lower.contains("missed") || lower.contains("no answer")
}

/// Extracts a call duration in seconds from text like `"Video call, 1 hr 5 min"`.
///
/// Hour, minute, and second fragments are searched independently and summed.
/// Missed and unanswered calls never carry a duration: any numeric fragments
/// in such text are ignored. A sum of zero means the duration is unknown,
/// not zero-length, so it is reported as `None`.
pub(crate) fn call_duration_secs(content: &str) -> Option<u32> {
    if is_unanswered(&content.to_lowercase()) {
        return None;
    }

    let mut total: u32 = 0;
    if let Some(caps) = HOURS.captures(content) {
        total += caps[1].parse::<u32>().unwrap_or(0) * 3600;
    }
    if let Some(caps) = MINUTES.captures(content) {
        total += caps[1].parse::<u32>().unwrap_or(0) * 60;
    }
    if let Some(caps) = SECONDS.captures(content) {
        total += caps[1].parse::<u32>().unwrap_or(0);
    }

    (total > 0).then_some(total)
}
