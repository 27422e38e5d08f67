//! Unified error types for chatlens.
//!
//! Parsing itself is fault-tolerant: malformed timestamps, non-boundary
//! lines, and filtered noise entries are skipped, never raised. The only
//! errors a caller can see are I/O failures opening the input and failures
//! writing serialized output.

use std::io;

use thiserror::Error;

/// A specialized [`Result`] type for chatlens operations.
///
/// # Example
///
/// ```rust
/// use chatlens::error::Result;
/// use chatlens::Entry;
///
/// fn load(path: &std::path::Path) -> Result<Vec<Entry>> {
///     chatlens::TranscriptParser::new().parse_file(path)
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatlensError>;

/// The error type for all chatlens operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatlensError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The input file doesn't exist
    /// - Permission denied
    /// - Disk is full (when writing output)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization error while writing output.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl ChatlensError {
    /// Returns `true` if this is an I/O error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatlensError::Io(_))
    }
}
