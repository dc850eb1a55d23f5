//! Error types for tokenizing and line reading.

use thiserror::Error;

/// Reasons a line cannot be tokenized. Both are detected at end of input.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenizeError {
    /// The line ended inside a quoted region.
    #[error("Unmatched quote")]
    UnmatchedQuote,

    /// The line ended right after a backslash, inside quotes or not.
    #[error("incomplete escape sequence")]
    IncompleteEscape,
}

#[derive(Error, Debug)]
pub enum ReadLineError {
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("input is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),
}
