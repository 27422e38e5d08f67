//! Configuration types for the parser and the metrics engine.
//!
//! Both configs are plain builder-style structs without any CLI framework
//! dependencies.
//!
//! # Example
//!
//! ```rust
//! use chatlens::config::{MetricsConfig, ParserConfig};
//!
//! let parser_config = ParserConfig::new().with_skip_noise(false);
//!
//! let metrics_config = MetricsConfig::new()
//!     .with_initiation_gap_hours(12)
//!     .with_immediacy_threshold_mins(2.0);
//! ```

use serde::{Deserialize, Serialize};

/// Configuration for transcript parsing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Drop system-notification entries (encryption banners, group
    /// membership changes, etc.) (default: true).
    ///
    /// Continuation lines following a dropped entry are discarded with it:
    /// system notifications are assumed not to span multiple lines.
    pub skip_noise: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self { skip_noise: true }
    }
}

impl ParserConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables noise filtering.
    #[must_use]
    pub fn with_skip_noise(mut self, skip: bool) -> Self {
        self.skip_noise = skip;
        self
    }
}

/// Configuration for the metrics engine.
///
/// Only the two caller-tunable thresholds live here. The 24-hour
/// response-time cutoff is fixed: a reply arriving a day later is treated
/// as a new day's first message, not a response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsConfig {
    /// Inactivity gap, in hours, after which the next entry counts as a
    /// conversation initiation (default: 6). A gap of exactly this length
    /// counts.
    pub initiation_gap_hours: i64,

    /// Replies at or below this many minutes count as immediate
    /// (default: 1.0).
    pub immediacy_threshold_mins: f64,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            initiation_gap_hours: 6,
            immediacy_threshold_mins: 1.0,
        }
    }
}

impl MetricsConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the conversation-initiation gap in hours.
    #[must_use]
    pub fn with_initiation_gap_hours(mut self, hours: i64) -> Self {
        self.initiation_gap_hours = hours;
        self
    }

    /// Sets the immediate-reply threshold in minutes.
    #[must_use]
    pub fn with_immediacy_threshold_mins(mut self, mins: f64) -> Self {
        self.immediacy_threshold_mins = mins;
        self
    }
}
