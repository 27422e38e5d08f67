//! Lexical statistics over text entries: words, characters, vocabulary,
//! emoji, and links.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;

use regex::Regex;

use super::MetricsEngine;

static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\w+\b").unwrap());
static URL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"https?://\S+").unwrap());

/// Codepoint ranges counted as emoji. Deliberately a fixed list, not a
/// Unicode-property lookup: the ranges cover emoticons, pictographs,
/// transport, flags, dingbats, and the supplemental/extended blocks.
fn is_emoji(c: char) -> bool {
    matches!(u32::from(c),
        0x1F600..=0x1F64F
            | 0x1F300..=0x1F5FF
            | 0x1F680..=0x1F6FF
            | 0x1F1E0..=0x1F1FF
            | 0x1F900..=0x1F9FF
            | 0x1FA00..=0x1FA6F
            | 0x1FA70..=0x1FAFF
            | 0x2600..=0x26FF
            | 0x2700..=0x27BF
            | 0x1F000..=0x1F02F
            | 0x1F0A0..=0x1F0FF
    )
}

impl MetricsEngine<'_> {
    /// Whitespace-split token count per sender, text entries only.
    pub fn word_counts(&self) -> BTreeMap<String, u64> {
        let mut counts = BTreeMap::new();
        for entry in self.text_entries() {
            *counts.entry(entry.sender.clone()).or_insert(0) +=
                entry.content.split_whitespace().count() as u64;
        }
        counts
    }

    /// Character count per sender, text entries only.
    pub fn character_counts(&self) -> BTreeMap<String, u64> {
        let mut counts = BTreeMap::new();
        for entry in self.text_entries() {
            *counts.entry(entry.sender.clone()).or_insert(0) +=
                entry.content.chars().count() as u64;
        }
        counts
    }

    /// Case-folded distinct token count per sender, using word-boundary
    /// tokenization.
    pub fn unique_word_counts(&self) -> BTreeMap<String, u64> {
        let mut vocab: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for entry in self.text_entries() {
            let lower = entry.content.to_lowercase();
            let words = vocab.entry(entry.sender.clone()).or_default();
            for m in WORD.find_iter(&lower) {
                words.insert(m.as_str().to_string());
            }
        }
        vocab
            .into_iter()
            .map(|(sender, words)| (sender, words.len() as u64))
            .collect()
    }

    /// Mean words per text entry per sender. A sender with no text entries
    /// is absent; the rate is always against that sender's own text count.
    pub fn mean_words_per_text(&self) -> BTreeMap<String, f64> {
        let words = self.word_counts();
        self.text_message_counts()
            .into_iter()
            .map(|(sender, texts)| {
                let w = words.get(&sender).copied().unwrap_or(0);
                (sender, w as f64 / texts as f64)
            })
            .collect()
    }

    /// Emoji codepoints per sender, counted per occurrence: a run of N
    /// emoji counts as N, not 1.
    pub fn emoji_counts(&self) -> BTreeMap<String, u64> {
        let mut counts = BTreeMap::new();
        for entry in self.text_entries() {
            let n = entry.content.chars().filter(|&c| is_emoji(c)).count() as u64;
            if n > 0 {
                *counts.entry(entry.sender.clone()).or_insert(0) += n;
            }
        }
        counts
    }

    /// The `top_n` most-used emoji per sender, most frequent first. Ties
    /// break on codepoint order for determinism.
    pub fn top_emojis(&self, top_n: usize) -> BTreeMap<String, Vec<(char, u64)>> {
        let mut counts: BTreeMap<String, BTreeMap<char, u64>> = BTreeMap::new();
        for entry in self.text_entries() {
            for c in entry.content.chars().filter(|&c| is_emoji(c)) {
                *counts.entry(entry.sender.clone()).or_default().entry(c).or_insert(0) += 1;
            }
        }

        counts
            .into_iter()
            .map(|(sender, by_emoji)| {
                let mut ranked: Vec<(char, u64)> = by_emoji.into_iter().collect();
                ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
                ranked.truncate(top_n);
                (sender, ranked)
            })
            .collect()
    }

    /// URL occurrences per sender over text entries.
    pub fn link_counts(&self) -> BTreeMap<String, u64> {
        let mut counts = BTreeMap::new();
        for entry in self.text_entries() {
            let n = URL.find_iter(&entry.content).count() as u64;
            if n > 0 {
                *counts.entry(entry.sender.clone()).or_insert(0) += n;
            }
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::{Entry, EntryKind};
    use chrono::NaiveDate;

    fn text(sender: &str, content: &str) -> Entry {
        let ts = NaiveDate::from_ymd_opt(2023, 2, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        Entry::new(ts, sender, content, EntryKind::Text)
    }

    fn media(sender: &str) -> Entry {
        let ts = NaiveDate::from_ymd_opt(2023, 2, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        Entry::new(ts, sender, "image omitted", EntryKind::Image)
    }

    #[test]
    fn test_word_counts_text_only() {
        let entries = vec![text("A", "one two three"), media("A"), text("B", "four")];
        let engine = MetricsEngine::new(&entries);
        let counts = engine.word_counts();
        assert_eq!(counts["A"], 3);
        assert_eq!(counts["B"], 1);
    }

    #[test]
    fn test_character_counts_are_chars_not_bytes() {
        let entries = vec![text("A", "héllo")];
        let engine = MetricsEngine::new(&entries);
        assert_eq!(engine.character_counts()["A"], 5);
    }

    #[test]
    fn test_unique_words_case_folded() {
        let entries = vec![text("A", "Hello hello HELLO world")];
        let engine = MetricsEngine::new(&entries);
        assert_eq!(engine.unique_word_counts()["A"], 2);
    }

    #[test]
    fn test_unique_words_boundary_tokenization() {
        let entries = vec![text("A", "well, well... done!")];
        let engine = MetricsEngine::new(&entries);
        // "well" and "done"
        assert_eq!(engine.unique_word_counts()["A"], 2);
    }

    #[test]
    fn test_mean_words_per_text() {
        let entries = vec![text("A", "one two"), text("A", "three four five six")];
        let engine = MetricsEngine::new(&entries);
        assert!((engine.mean_words_per_text()["A"] - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_emoji_run_counts_each() {
        let entries = vec![text("A", "nice \u{1f600}\u{1f600}\u{1f600}")];
        let engine = MetricsEngine::new(&entries);
        assert_eq!(engine.emoji_counts()["A"], 3);
    }

    #[test]
    fn test_emoji_mixed_ranges() {
        // Emoticon + heart-suit dingbat + flag letters
        let entries = vec![text("A", "\u{1f600} \u{2764} \u{1f1ee}\u{1f1f3}")];
        let engine = MetricsEngine::new(&entries);
        assert_eq!(engine.emoji_counts()["A"], 4);
    }

    #[test]
    fn test_plain_text_has_no_emoji() {
        let entries = vec![text("A", "just words here")];
        let engine = MetricsEngine::new(&entries);
        assert!(engine.emoji_counts().is_empty());
    }

    #[test]
    fn test_top_emojis_ranked() {
        let entries = vec![text("A", "\u{1f602}\u{1f602}\u{1f602}\u{1f600}\u{1f600}\u{2764}")];
        let engine = MetricsEngine::new(&entries);
        let top = engine.top_emojis(2);
        assert_eq!(top["A"], vec![('\u{1f602}', 3), ('\u{1f600}', 2)]);
    }

    #[test]
    fn test_link_counts() {
        let entries = vec![
            text("A", "see https://example.com and http://other.org/page"),
            text("A", "no links"),
        ];
        let engine = MetricsEngine::new(&entries);
        assert_eq!(engine.link_counts()["A"], 2);
    }
}
