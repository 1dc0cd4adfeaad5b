//! Error types for path parsing and evaluation.

use thiserror::Error;

/// Errors that can occur while parsing a path or applying it to a document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// The path string is empty or contains a malformed segment.
    #[error("Invalid path syntax: {message}")]
    Parse { message: String },

    /// A segment did not resolve against the existing document.
    #[error("Path segment '{segment}' not found")]
    NotFound { segment: String },

    /// A numeric index is outside the bounds of the sequence.
    #[error("Index {index} out of range for sequence of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// A segment needs a different kind of node than the one present.
    #[error("Path segment '{segment}' expects a {expected}, found a {found}")]
    KindMismatch {
        segment: String,
        expected: &'static str,
        found: &'static str,
    },

    /// A segment kind that cannot be used as the last segment of this operation.
    #[error("Path segment '{segment}' cannot be the last segment of a {operation}")]
    UnsupportedTerminal {
        segment: String,
        operation: &'static str,
    },
}

impl PathError {
    pub(crate) fn parse(message: impl Into<String>) -> Self {
        PathError::Parse {
            message: message.into(),
        }
    }

    pub(crate) fn not_found(segment: impl ToString) -> Self {
        PathError::NotFound {
            segment: segment.to_string(),
        }
    }
}
