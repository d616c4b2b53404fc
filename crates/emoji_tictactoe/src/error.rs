//! Parse error for board and position text.

use derive_more::{Display, Error};
use tracing::instrument;

/// Error parsing a [`Board`](crate::Board) or [`Position`](crate::Position)
/// from text.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Parse error: {} at {}:{}", message, file, line)]
pub struct ParseError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ParseError {
    /// Creates a new parse error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
