//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`EntriesFormat`] - format options for the parsed-entry dump
//!
//! The binary's validation policy also lives at this layer: the library
//! happily returns an empty sequence for unusable input, and it is the CLI
//! that decides how many parsed entries are too few.

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

/// Analyze an exported chat transcript: parse it into typed entries and
/// compute conversation statistics.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatlens")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatlens chat_export.txt
    chatlens chat_export.txt -o report.json
    chatlens chat_export.txt --entries entries.json
    chatlens chat_export.txt --entries entries.csv --entries-format csv
    chatlens chat_export.txt --gap-hours 12 --keep-noise")]
pub struct Args {
    /// Path to the exported transcript (.txt)
    pub input: String,

    /// Path for the metrics report (JSON)
    #[arg(short, long, default_value = "chat_report.json")]
    pub output: String,

    /// Also write the parsed entries to this file
    #[arg(long, value_name = "FILE")]
    pub entries: Option<String>,

    /// Format for the parsed-entry dump
    #[arg(long, value_enum, default_value = "json")]
    pub entries_format: EntriesFormat,

    /// Inactivity gap (hours) that makes the next message a conversation
    /// initiation
    #[arg(long, default_value_t = 6, value_name = "HOURS")]
    pub gap_hours: i64,

    /// Replies within this many minutes count as immediate
    #[arg(long, default_value_t = 1.0, value_name = "MINS")]
    pub immediate_mins: f64,

    /// Keep system-notification entries instead of dropping them
    #[arg(long)]
    pub keep_noise: bool,

    /// Fail unless at least this many entries parse
    #[arg(long, default_value_t = 10, value_name = "N")]
    pub min_entries: usize,
}

/// Output format options for the parsed-entry dump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntriesFormat {
    /// JSON array of entries (default)
    #[default]
    Json,

    /// Semicolon-delimited CSV table
    Csv,
}

impl EntriesFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            EntriesFormat::Json => "json",
            EntriesFormat::Csv => "csv",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["json", "csv"]
    }
}

impl std::fmt::Display for EntriesFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntriesFormat::Json => write!(f, "JSON"),
            EntriesFormat::Csv => write!(f, "CSV"),
        }
    }
}

impl std::str::FromStr for EntriesFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(EntriesFormat::Json),
            "csv" => Ok(EntriesFormat::Csv),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                EntriesFormat::all_names().join(", ")
            )),
        }
    }
}
