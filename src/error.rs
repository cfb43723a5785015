//! Refscope error types.
//!
//! All errors are typed and provide root cause information.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Main error type for Refscope operations.
#[derive(Error, Debug)]
pub enum RefscopeError {
    /// I/O error during file operations.
    #[error("I/O error for path {path}: {source}")]
    Io {
        /// The file path that caused the I/O error.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// `classify` was called with an out-of-bounds or inverted column span.
    ///
    /// This is a caller contract violation, never recovered inside the
    /// classifier itself.
    #[error("Invalid span ({start}, {end}) for line of length {line_len}")]
    InvalidSpan {
        /// Start column offset (inclusive).
        start: usize,
        /// End column offset (exclusive).
        end: usize,
        /// Length of the line the span was applied to.
        line_len: usize,
    },

    /// The occurrence-finding collaborator failed or is unreachable.
    ///
    /// Recovered by the orchestration layer as "zero occurrences found".
    #[error("Reference provider '{provider}' unavailable: {reason}")]
    ProviderUnavailable {
        /// Name of the failing provider.
        provider: String,
        /// Reason for failure.
        reason: String,
    },

    /// A specific occurrence's source line could not be read.
    ///
    /// Recovered per occurrence with the conservative READ fallback.
    #[error("Cannot read line {line} of {file}: {reason}")]
    LineUnavailable {
        /// The file the line belongs to.
        file: PathBuf,
        /// Line number (1-based).
        line: usize,
        /// Reason for failure.
        reason: String,
    },

    /// Generic error with context.
    #[error("{0}")]
    Other(String),
}

impl RefscopeError {
    /// Stable kind identifier for structured CLI output.
    pub fn kind(&self) -> &'static str {
        match self {
            RefscopeError::Io { .. } => "Io",
            RefscopeError::InvalidSpan { .. } => "InvalidSpan",
            RefscopeError::ProviderUnavailable { .. } => "ProviderUnavailable",
            RefscopeError::LineUnavailable { .. } => "LineUnavailable",
            RefscopeError::Other(_) => "Other",
        }
    }

    /// File path associated with the error, if any.
    pub fn file_path(&self) -> Option<&Path> {
        match self {
            RefscopeError::Io { path, .. } => Some(path),
            RefscopeError::LineUnavailable { file, .. } => Some(file),
            _ => None,
        }
    }

    /// Remediation hint for structured CLI output, if one exists.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            RefscopeError::InvalidSpan { .. } => {
                Some("column span must satisfy 0 <= start < end <= line length, on char boundaries")
            }
            RefscopeError::ProviderUnavailable { .. } => {
                Some("check the glob pattern and that the search root is readable")
            }
            _ => None,
        }
    }
}

impl From<std::io::Error> for RefscopeError {
    fn from(err: std::io::Error) -> Self {
        RefscopeError::Io {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

/// Result type alias for Refscope operations.
pub type Result<T> = std::result::Result<T, RefscopeError>;
