//! Error types for the cablecode-core library.

use thiserror::Error;

/// Raised when no attribute pattern matches an input line.
///
/// Parsing a line is deterministic, so there is no retry policy: callers
/// catch this per line, report the skipped text, and continue the batch.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("cannot parse line: {line}")]
pub struct ParseError {
    /// The offending input line, verbatim.
    pub line: String,
}

impl ParseError {
    pub fn new(line: impl Into<String>) -> Self {
        Self { line: line.into() }
    }
}

/// Result type for the cablecode library.
pub type Result<T> = std::result::Result<T, ParseError>;
