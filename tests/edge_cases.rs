//! Edge case tests for chatlens
//!
//! These tests cover boundary conditions in the parser's recovery rules and
//! the metrics engine's threshold policies that regular integration tests
//! don't isolate.

use chatlens::prelude::*;
use chrono::Timelike;

fn parse(text: &str) -> Vec<Entry> {
    TranscriptParser::new().parse_str(text)
}

// =========================================================================
// Parser recovery
// =========================================================================

#[test]
fn test_garbage_only_transcript_is_empty_not_error() {
    let entries = parse(
        "random text\n\
         12/34/56 almost a timestamp\n\
         [99/99/99, 9:15:03 PM] Alice: bad date\n\
         [01/02/23, 9:00:00 PM] WhatsApp: security code changed",
    );
    assert!(entries.is_empty());
}

#[test]
fn test_empty_sequence_metrics_defaults() {
    let entries: Vec<Entry> = vec![];
    let engine = MetricsEngine::new(&entries);

    assert!(engine.message_counts().is_empty());
    assert!(engine.double_texts().is_empty());
    assert!(engine.initiations().is_empty());
    assert!(engine.response_times().is_empty());
    assert!(engine.first_active_hours().is_empty());
    assert!(engine.date_range().is_none());
    assert_eq!(engine.total_days(), 0);
    assert_eq!(engine.active_days(), 0);

    let report = engine.report();
    assert_eq!(report.weekday_histogram, [0u64; 7]);
    assert!(report.monthly_totals.is_empty());
}

#[test]
fn test_continuation_merge_preserves_count_and_order() {
    let body = "[01/02/23, 9:15:03 PM] Alice: line0";
    let continuations = ["line1", "line2", "line3", "line4"];
    let text = format!("{body}\n{}", continuations.join("\n"));

    let entries = parse(&text);
    assert_eq!(entries.len(), 1);

    let lines: Vec<&str> = entries[0].content.lines().collect();
    assert_eq!(lines.len(), 1 + continuations.len());
    assert_eq!(lines[0], "line0");
    for (i, cont) in continuations.iter().enumerate() {
        assert_eq!(&lines[i + 1], cont);
    }
}

#[test]
fn test_crlf_line_endings() {
    let entries = parse("[01/02/23, 9:15:03 PM] Alice: hello\r\nworld\r\n");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].content, "hello\nworld");
}

#[test]
fn test_unicode_senders_and_content() {
    let entries = parse(
        "[01/02/23, 9:15:03 PM] Иван: Привет мир!\n\
         [01/02/23, 9:16:00 PM] 田中太郎: こんにちは\n\
         [01/02/23, 9:17:00 PM] User \u{1f389}: mixed 你好 Привет",
    );
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].sender, "Иван");
    assert_eq!(entries[1].content, "こんにちは");
    assert_eq!(distinct_senders(&entries).len(), 3);
}

#[test]
fn test_very_long_continuation_chain() {
    let mut text = String::from("[01/02/23, 9:15:03 PM] Alice: start");
    for i in 0..500 {
        text.push_str(&format!("\ncontinuation {i}"));
    }
    let entries = parse(&text);
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].content.lines().count(), 501);
}

#[test]
fn test_midnight_and_noon_hours() {
    let entries = parse(
        "[01/02/23, 12:00:01 AM] Alice: midnight\n\
         [01/02/23, 12:00:01 PM] Alice: noon",
    );
    assert_eq!(entries[0].timestamp.hour(), 0);
    assert_eq!(entries[1].timestamp.hour(), 12);
}

// =========================================================================
// Classification policies
// =========================================================================

#[test]
fn test_classification_priority_is_total() {
    // Media beats call whenever both markers appear, in either order
    let entries = parse(
        "[01/02/23, 9:15:03 PM] Alice: video omitted from the video call\n\
         [01/02/23, 9:16:00 PM] Alice: image omitted during our call",
    );
    assert_eq!(entries[0].kind, EntryKind::Video);
    assert_eq!(entries[1].kind, EntryKind::Image);
}

#[test]
fn test_answered_call_unknown_duration_stays_unknown() {
    let entries = parse("[01/02/23, 9:15:03 PM] Alice: Video call");
    assert_eq!(entries[0].kind, EntryKind::VideoCall);
    assert!(entries[0].call_duration_secs.is_none());

    // And it never reaches the minute totals
    let engine = MetricsEngine::new(&entries);
    assert!(engine.call_minutes().is_empty());
}

#[test]
fn test_call_seconds_truncate_to_whole_minutes() {
    let entries = parse(
        "[01/02/23, 9:15:03 PM] Alice: Voice call, 1 min 59 sec\n\
         [01/02/23, 9:20:00 PM] Alice: Voice call, 30 sec",
    );
    let engine = MetricsEngine::new(&entries);
    // 119 + 30 = 149 seconds -> 2 whole minutes
    assert_eq!(engine.call_minutes()["Alice"], 2);
}

// =========================================================================
// Threshold boundaries, end to end
// =========================================================================

#[test]
fn test_initiation_exact_gap_counts() {
    let entries = parse(
        "[01/02/23, 9:00:00 AM] Alice: first\n\
         [01/02/23, 3:00:00 PM] Bob: exactly six hours later",
    );
    let engine = MetricsEngine::new(&entries);
    assert_eq!(engine.initiations()["Bob"], 1);
}

#[test]
fn test_initiation_one_second_short_does_not_count() {
    let entries = parse(
        "[01/02/23, 9:00:00 AM] Alice: first\n\
         [01/02/23, 2:59:59 PM] Bob: one second short",
    );
    let engine = MetricsEngine::new(&entries);
    assert!(!engine.initiations().contains_key("Bob"));
}

#[test]
fn test_response_exactly_24h_excluded() {
    let entries = parse(
        "[01/02/23, 9:00:00 AM] Alice: ping\n\
         [02/02/23, 9:00:00 AM] Bob: pong, a day later",
    );
    let engine = MetricsEngine::new(&entries);
    assert!(engine.response_times().is_empty());
}

#[test]
fn test_response_one_minute_under_24h_included() {
    let entries = parse(
        "[01/02/23, 9:00:00 AM] Alice: ping\n\
         [02/02/23, 8:59:00 AM] Bob: just in time",
    );
    let engine = MetricsEngine::new(&entries);
    assert_eq!(engine.response_times()["Bob"].len(), 1);
}

#[test]
fn test_same_sender_gap_never_samples_but_may_initiate() {
    let entries = parse(
        "[01/02/23, 9:00:00 AM] Alice: ping\n\
         [01/02/23, 8:00:00 PM] Alice: me again",
    );
    let engine = MetricsEngine::new(&entries);
    assert!(engine.response_times().is_empty());
    // 11-hour gap: the same sender re-initiates
    assert_eq!(engine.initiations()["Alice"], 2);
}

// =========================================================================
// Absent senders
// =========================================================================

#[test]
fn test_unknown_sender_lookup_is_default_not_error() {
    let entries = parse("[01/02/23, 9:15:03 PM] Alice: hello");
    let engine = MetricsEngine::new(&entries);

    assert_eq!(engine.message_counts().get("Nobody").copied().unwrap_or(0), 0);
    assert!(engine.response_times().get("Nobody").is_none());
    assert!(
        engine
            .media_counts()
            .get("Nobody")
            .copied()
            .unwrap_or_default()
            == MediaTally::default()
    );
}

// =========================================================================
// Emoji accounting
// =========================================================================

#[test]
fn test_emoji_run_counts_per_codepoint() {
    let entries = parse("[01/02/23, 9:15:03 PM] Alice: \u{1f602}\u{1f602}\u{1f602}\u{1f602}");
    let engine = MetricsEngine::new(&entries);
    assert_eq!(engine.emoji_counts()["Alice"], 4);
}

#[test]
fn test_emoji_only_counted_in_text_entries() {
    // Media placeholders are not text, so their content never reaches the
    // lexical counters
    let entries = parse("[01/02/23, 9:15:03 PM] Alice: sticker omitted");
    let engine = MetricsEngine::new(&entries);
    assert!(engine.emoji_counts().is_empty());
    assert!(engine.word_counts().is_empty());
}
