//! Time-bucketed activity distributions.
//!
//! All histograms are single forward scans incrementing the matching cell.
//! Weekdays are numbered Monday = 0 through Sunday = 6; months are keyed
//! `YYYY-MM`.

use std::collections::BTreeMap;

use chrono::{Datelike, Timelike};

use super::{MetricsEngine, month_key};

impl MetricsEngine<'_> {
    /// Entry counts by hour of day (0–23).
    pub fn hourly_histogram(&self) -> [u64; 24] {
        let mut buckets = [0u64; 24];
        for entry in self.entries {
            buckets[entry.timestamp.hour() as usize] += 1;
        }
        buckets
    }

    /// Entry counts by weekday (Monday = 0).
    pub fn weekday_histogram(&self) -> [u64; 7] {
        let mut buckets = [0u64; 7];
        for entry in self.entries {
            buckets[entry.timestamp.weekday().num_days_from_monday() as usize] += 1;
        }
        buckets
    }

    /// Combined weekday × hour matrix.
    ///
    /// Every parsed entry lands in exactly one cell, so the 168-cell sum
    /// equals the sequence length.
    pub fn activity_heatmap(&self) -> [[u64; 24]; 7] {
        let mut cells = [[0u64; 24]; 7];
        for entry in self.entries {
            let dow = entry.timestamp.weekday().num_days_from_monday() as usize;
            let hour = entry.timestamp.hour() as usize;
            cells[dow][hour] += 1;
        }
        cells
    }

    /// Total entries per month.
    pub fn monthly_totals(&self) -> BTreeMap<String, u64> {
        let mut counts = BTreeMap::new();
        for entry in self.entries {
            *counts.entry(month_key(entry.timestamp)).or_insert(0) += 1;
        }
        counts
    }

    /// Entries per month per sender.
    pub fn monthly_counts_by_sender(&self) -> BTreeMap<String, BTreeMap<String, u64>> {
        let mut counts: BTreeMap<String, BTreeMap<String, u64>> = BTreeMap::new();
        for entry in self.entries {
            *counts
                .entry(month_key(entry.timestamp))
                .or_default()
                .entry(entry.sender.clone())
                .or_insert(0) += 1;
        }
        counts
    }

    /// Call entries per month, all four call kinds combined.
    pub fn monthly_call_totals(&self) -> BTreeMap<String, u64> {
        let mut counts = BTreeMap::new();
        for entry in self.entries.iter().filter(|e| e.kind.is_call()) {
            *counts.entry(month_key(entry.timestamp)).or_insert(0) += 1;
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::{Entry, EntryKind};
    use chrono::NaiveDate;

    fn at(y: i32, mo: u32, d: u32, h: u32, sender: &str, kind: EntryKind) -> Entry {
        let ts = NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap();
        Entry::new(ts, sender, "x", kind)
    }

    #[test]
    fn test_hourly_histogram() {
        let entries = vec![
            at(2023, 2, 1, 9, "A", EntryKind::Text),
            at(2023, 2, 1, 9, "B", EntryKind::Text),
            at(2023, 2, 1, 23, "A", EntryKind::Text),
        ];
        let engine = MetricsEngine::new(&entries);
        let hours = engine.hourly_histogram();
        assert_eq!(hours[9], 2);
        assert_eq!(hours[23], 1);
        assert_eq!(hours.iter().sum::<u64>(), 3);
    }

    #[test]
    fn test_weekday_histogram_monday_zero() {
        // 2023-02-01 was a Wednesday, 2023-02-06 a Monday.
        let entries = vec![
            at(2023, 2, 1, 9, "A", EntryKind::Text),
            at(2023, 2, 6, 9, "A", EntryKind::Text),
        ];
        let engine = MetricsEngine::new(&entries);
        let days = engine.weekday_histogram();
        assert_eq!(days[0], 1); // Monday
        assert_eq!(days[2], 1); // Wednesday
    }

    #[test]
    fn test_heatmap_cells_and_total() {
        let entries = vec![
            at(2023, 2, 1, 9, "A", EntryKind::Text),
            at(2023, 2, 1, 9, "B", EntryKind::Image),
            at(2023, 2, 6, 22, "A", EntryKind::VideoCall),
        ];
        let engine = MetricsEngine::new(&entries);
        let heatmap = engine.activity_heatmap();
        assert_eq!(heatmap[2][9], 2);
        assert_eq!(heatmap[0][22], 1);

        // Every classified entry is counted exactly once.
        let total: u64 = heatmap.iter().flatten().sum();
        assert_eq!(total, entries.len() as u64);
    }

    #[test]
    fn test_monthly_totals_grouping() {
        let entries = vec![
            at(2023, 1, 31, 9, "A", EntryKind::Text),
            at(2023, 2, 1, 9, "A", EntryKind::Text),
            at(2023, 2, 15, 9, "B", EntryKind::Text),
        ];
        let engine = MetricsEngine::new(&entries);
        let months = engine.monthly_totals();
        assert_eq!(months["2023-01"], 1);
        assert_eq!(months["2023-02"], 2);

        let by_sender = engine.monthly_counts_by_sender();
        assert_eq!(by_sender["2023-02"]["A"], 1);
        assert_eq!(by_sender["2023-02"]["B"], 1);
    }

    #[test]
    fn test_monthly_call_totals() {
        let entries = vec![
            at(2023, 2, 1, 9, "A", EntryKind::VideoCall),
            at(2023, 2, 2, 9, "B", EntryKind::MissedVoiceCall),
            at(2023, 2, 3, 9, "A", EntryKind::Text),
        ];
        let engine = MetricsEngine::new(&entries);
        assert_eq!(engine.monthly_call_totals()["2023-02"], 2);
    }
}
