//! Adjacency-aware timing statistics: streaks, initiations, response
//! times, and first-message-of-day averages.

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate, NaiveDateTime, Timelike};

use super::{MetricsEngine, month_key};

/// Replies this far apart (or farther) are not replies at all — more likely
/// a new day's first message. Exactly 24 hours is excluded.
const RESPONSE_CUTOFF_MINS: f64 = 1440.0;

fn minutes_between(prev: NaiveDateTime, next: NaiveDateTime) -> f64 {
    (next - prev).num_seconds() as f64 / 60.0
}

pub(crate) fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

pub(crate) fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

impl MetricsEngine<'_> {
    /// Extra consecutive sends per sender.
    ///
    /// A run of `n >= 2` entries from one sender credits that sender with
    /// `n - 1`: only the sends beyond the first count. The final run is
    /// flushed the same way at the end of the sequence.
    pub fn double_texts(&self) -> BTreeMap<String, u64> {
        let mut counts: BTreeMap<String, u64> = BTreeMap::new();
        let Some(first) = self.entries.first() else {
            return counts;
        };

        let mut current = first.sender.as_str();
        let mut run: u64 = 1;

        for entry in &self.entries[1..] {
            if entry.sender == current {
                run += 1;
            } else {
                if run >= 2 {
                    *counts.entry(current.to_string()).or_insert(0) += run - 1;
                }
                current = entry.sender.as_str();
                run = 1;
            }
        }
        if run >= 2 {
            *counts.entry(current.to_string()).or_insert(0) += run - 1;
        }

        counts
    }

    /// Conversation initiations per sender.
    ///
    /// The first entry always initiates. After that, an entry initiates when
    /// the gap since the immediately preceding entry — same sender or not —
    /// is at least the configured threshold. A gap of exactly the threshold
    /// counts.
    pub fn initiations(&self) -> BTreeMap<String, u64> {
        let mut counts: BTreeMap<String, u64> = BTreeMap::new();
        let Some(first) = self.entries.first() else {
            return counts;
        };

        let gap = Duration::hours(self.config.initiation_gap_hours);
        *counts.entry(first.sender.clone()).or_insert(0) += 1;

        let mut prev = first.timestamp;
        for entry in &self.entries[1..] {
            if entry.timestamp - prev >= gap {
                *counts.entry(entry.sender.clone()).or_insert(0) += 1;
            }
            prev = entry.timestamp;
        }

        counts
    }

    /// Raw response-time samples in minutes, bucketed by the responding
    /// sender.
    ///
    /// Only adjacent cross-sender pairs produce a sample; same-sender pairs
    /// never do, regardless of elapsed time. Samples at or above the 24-hour
    /// cutoff are discarded.
    pub fn response_times(&self) -> BTreeMap<String, Vec<f64>> {
        let mut samples: BTreeMap<String, Vec<f64>> = BTreeMap::new();
        for pair in self.entries.windows(2) {
            let (prev, cur) = (&pair[0], &pair[1]);
            if cur.sender == prev.sender {
                continue;
            }
            let mins = minutes_between(prev.timestamp, cur.timestamp);
            if mins >= RESPONSE_CUTOFF_MINS {
                continue;
            }
            samples.entry(cur.sender.clone()).or_default().push(mins);
        }
        samples
    }

    /// Mean response time in minutes per sender.
    pub fn mean_response_mins(&self) -> BTreeMap<String, f64> {
        self.response_times()
            .into_iter()
            .map(|(sender, times)| (sender, mean(&times)))
            .collect()
    }

    /// Median response time in minutes per sender.
    pub fn median_response_mins(&self) -> BTreeMap<String, f64> {
        self.response_times()
            .into_iter()
            .map(|(sender, times)| (sender, median(&times)))
            .collect()
    }

    /// Percentage of a sender's replies at or below the configured
    /// immediacy threshold, against that sender's own sample count.
    pub fn immediate_reply_share(&self) -> BTreeMap<String, f64> {
        let threshold = self.config.immediacy_threshold_mins;
        self.response_times()
            .into_iter()
            .map(|(sender, times)| {
                let immediate = times.iter().filter(|&&t| t <= threshold).count();
                (sender, immediate as f64 / times.len() as f64 * 100.0)
            })
            .collect()
    }

    /// Mean first-active hour of the day per sender, as a decimal hour.
    ///
    /// For each (calendar date, sender) pair only the first entry seen
    /// counts; later entries for the same pair are ignored.
    pub fn first_active_hours(&self) -> BTreeMap<String, f64> {
        let mut first_of_day: BTreeMap<(&str, NaiveDate), NaiveDateTime> = BTreeMap::new();
        for entry in self.entries {
            first_of_day
                .entry((entry.sender.as_str(), entry.date()))
                .or_insert(entry.timestamp);
        }

        let mut hours: BTreeMap<String, Vec<f64>> = BTreeMap::new();
        for ((sender, _), ts) in first_of_day {
            hours
                .entry(sender.to_string())
                .or_default()
                .push(f64::from(ts.hour()) + f64::from(ts.minute()) / 60.0);
        }

        hours
            .into_iter()
            .map(|(sender, samples)| (sender, mean(&samples)))
            .collect()
    }

    /// Mean response time per month per sender (`YYYY-MM` keyed), with the
    /// same sampling rules as [`response_times`](Self::response_times).
    pub fn monthly_mean_response_mins(&self) -> BTreeMap<String, BTreeMap<String, f64>> {
        let mut buckets: BTreeMap<String, BTreeMap<String, Vec<f64>>> = BTreeMap::new();
        for pair in self.entries.windows(2) {
            let (prev, cur) = (&pair[0], &pair[1]);
            if cur.sender == prev.sender {
                continue;
            }
            let mins = minutes_between(prev.timestamp, cur.timestamp);
            if mins >= RESPONSE_CUTOFF_MINS {
                continue;
            }
            buckets
                .entry(month_key(cur.timestamp))
                .or_default()
                .entry(cur.sender.clone())
                .or_default()
                .push(mins);
        }

        buckets
            .into_iter()
            .map(|(month, senders)| {
                let means = senders
                    .into_iter()
                    .map(|(sender, times)| (sender, mean(&times)))
                    .collect();
                (month, means)
            })
            .collect()
    }
}
