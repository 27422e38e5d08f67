//! Serialization of parsed entries and metrics reports.
//!
//! JSON output is the interchange format for external tooling (scoring
//! heuristics, renderers); CSV is a flat entry table for spreadsheets.
//! Both are feature-gated: `json-output` and `csv-output`.

use std::fs::File;
#[cfg(feature = "json-output")]
use std::io::{BufWriter, Write as _};
use std::path::Path;

use crate::entry::Entry;
use crate::error::Result;
#[cfg(feature = "json-output")]
use crate::metrics::MetricsReport;

/// Serializes entries to a pretty-printed JSON array.
///
/// # Example
///
/// ```
/// use chatlens::{TranscriptParser, output::entries_to_json};
///
/// let entries = TranscriptParser::new()
///     .parse_str("[01/02/23, 9:15:03 PM] Alice: hello");
/// let json = entries_to_json(&entries)?;
/// assert!(json.contains("\"sender\": \"Alice\""));
/// # Ok::<(), chatlens::ChatlensError>(())
/// ```
#[cfg(feature = "json-output")]
pub fn entries_to_json(entries: &[Entry]) -> Result<String> {
    Ok(serde_json::to_string_pretty(entries)?)
}

/// Writes entries as a JSON array to a file.
#[cfg(feature = "json-output")]
pub fn write_entries_json(entries: &[Entry], path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, entries)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// Serializes a metrics report to pretty-printed JSON.
#[cfg(feature = "json-output")]
pub fn report_to_json(report: &MetricsReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Writes a metrics report as JSON to a file.
#[cfg(feature = "json-output")]
pub fn write_report_json(report: &MetricsReport, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, report)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// Writes entries as a semicolon-delimited CSV table.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `Timestamp`, `Sender`, `Kind`, `Content`,
///   `CallDurationSecs`, `IsEdited`
/// - Encoding: UTF-8; unknown call durations serialize as empty fields
#[cfg(feature = "csv-output")]
pub fn write_entries_csv(entries: &[Entry], path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(file);

    writer.write_record([
        "Timestamp",
        "Sender",
        "Kind",
        "Content",
        "CallDurationSecs",
        "IsEdited",
    ])?;

    for entry in entries {
        writer.write_record([
            entry.timestamp.format("%Y-%m-%dT%H:%M:%S").to_string(),
            entry.sender.clone(),
            entry.kind.name().to_string(),
            entry.content.clone(),
            entry
                .call_duration_secs
                .map(|s| s.to_string())
                .unwrap_or_default(),
            entry.is_edited.to_string(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}
