//! # Chatlens
//!
//! A Rust library for turning exported chat transcripts into typed,
//! queryable records and computing conversation statistics over them.
//!
//! ## Overview
//!
//! Chat exports are semi-structured: most lines begin with a timestamp and
//! sender, but some are silent continuations of the previous message, the
//! timestamp spacing is locale-sensitive, and system notifications are
//! interleaved with real messages. Chatlens handles that ambiguity in a
//! single forward pass and hands back an ordered sequence of immutable
//! [`Entry`] records, plus a [`MetricsEngine`] that answers statistical
//! queries over the sequence:
//!
//! - message, media, call, and link tallies per sender
//! - response-time sampling with mean/median/immediacy rates
//! - conversation initiations and double-texting streaks
//! - hour-of-day, weekday, 7×24, and monthly activity distributions
//!
//! The whole pipeline is a pure batch transform — raw text in, typed
//! records and aggregates out. No persistence, no network, no hidden state.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chatlens::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let parser = TranscriptParser::new();
//!     let entries = parser.parse_file("chat_export.txt".as_ref())?;
//!
//!     let senders = distinct_senders(&entries);
//!     println!("participants: {senders:?}");
//!
//!     let engine = MetricsEngine::new(&entries);
//!     let report = engine.report();
//!     println!("{} active days", report.active_days);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Querying Individual Metrics
//!
//! Every metric is an independent, idempotent query over the borrowed
//! sequence; nothing is cached between calls, so results can never go
//! stale:
//!
//! ```rust
//! use chatlens::{MetricsEngine, TranscriptParser};
//!
//! let entries = TranscriptParser::new().parse_str(
//!     "[01/02/23, 9:15:03 PM] Alice: hello\n\
//!      [01/02/23, 9:15:40 PM] Bob: hey there",
//! );
//!
//! let engine = MetricsEngine::new(&entries);
//! assert_eq!(engine.message_counts()["Alice"], 1);
//! assert_eq!(engine.response_times()["Bob"].len(), 1);
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] — transcript parsing
//!   - [`TranscriptParser`] — boundary detection, continuation merge,
//!     noise filtering, classification
//! - [`entry`] — [`Entry`] and the [`EntryKind`] taxonomy
//! - [`participants`] — sender directory and caller-owned display labels
//! - [`metrics`] — [`MetricsEngine`] and the [`MetricsReport`] bundle
//! - [`output`] — JSON / CSV serialization (feature-gated)
//! - [`config`] — [`ParserConfig`], [`MetricsConfig`]
//! - [`error`] — unified error types ([`ChatlensError`], [`Result`])
//! - [`prelude`] — convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod entry;
pub mod error;
pub mod metrics;
#[cfg(any(feature = "json-output", feature = "csv-output"))]
pub mod output;
pub mod parser;
pub mod participants;

// Re-export the main types at the crate root for convenience
pub use entry::{Entry, EntryKind};
pub use error::{ChatlensError, Result};
pub use metrics::{MetricsEngine, MetricsReport};
pub use parser::TranscriptParser;

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use chatlens::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use crate::entry::{Entry, EntryKind};

    // Error types
    pub use crate::error::{ChatlensError, Result};

    // Parsing
    pub use crate::parser::TranscriptParser;

    // Participants
    pub use crate::participants::{LabelMap, distinct_senders};

    // Metrics
    pub use crate::metrics::{CallTally, MediaTally, MetricsEngine, MetricsReport};

    // Configs
    pub use crate::config::{MetricsConfig, ParserConfig};

    // Output
    #[cfg(feature = "json-output")]
    pub use crate::output::{entries_to_json, report_to_json, write_entries_json, write_report_json};
    #[cfg(feature = "csv-output")]
    pub use crate::output::write_entries_csv;
}
