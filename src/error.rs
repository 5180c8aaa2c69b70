//! Error handling for contribution processing.
//!
//! Provides error types with context for pre-run checks, malformed input
//! lines, and report I/O failures.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Input file not found: {path}")]
    InputNotFound { path: PathBuf },

    /// Refusing to clobber a report from a previous run
    #[error("Output file already exists: {path}")]
    OutputExists { path: PathBuf },

    #[error("Malformed line {line}: expected {expected} fields, found {found}")]
    MalformedLine {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("Contribution total overflowed for recipient '{recipient}' in group {group}")]
    AmountOverflow { recipient: String, group: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    pub fn input_not_found(path: impl Into<PathBuf>) -> Self {
        Self::InputNotFound { path: path.into() }
    }

    pub fn output_exists(path: impl Into<PathBuf>) -> Self {
        Self::OutputExists { path: path.into() }
    }

    pub fn malformed_line(line: usize, expected: usize, found: usize) -> Self {
        Self::MalformedLine {
            line,
            expected,
            found,
        }
    }

    pub fn amount_overflow(recipient: impl Into<String>, group: impl Into<String>) -> Self {
        Self::AmountOverflow {
            recipient: recipient.into(),
            group: group.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Errors raised before any report has been written
    pub fn is_pre_run(&self) -> bool {
        matches!(
            self,
            Error::InputNotFound { .. } | Error::OutputExists { .. } | Error::Configuration { .. }
        )
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
