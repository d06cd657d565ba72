//! Error types for the data-loader crate.
//!
//! Every failure carries enough context (file name, line, offending value)
//! to point a user at the broken row without re-reading the input.

use thiserror::Error;

/// Errors that can occur while loading the ratings and movies tables
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// File could not be found or opened
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// A row could not be decoded into the fixed schema of its table
    #[error("Parse error at line {line} in {file}: {reason}")]
    ParseError {
        file: String,
        line: u64,
        reason: String,
    },

    /// A data field had an invalid value
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    /// The movies table is keyed by movieId, so a repeated id is fatal
    #[error("Duplicate movieId {movie_id} in {file}")]
    DuplicateMovie { file: String, movie_id: u32 },

    /// Data validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

impl DataLoadError {
    /// Wrap a `csv::Error` raised while reading `file`.
    ///
    /// I/O failures keep their own variant; everything else is reported
    /// as a parse error at the record's line (0 when the reader has no position).
    pub(crate) fn from_csv(file: &str, err: csv::Error) -> Self {
        let line = err.position().map(|p| p.line()).unwrap_or(0);
        match err.into_kind() {
            csv::ErrorKind::Io(io) => DataLoadError::IoError(io),
            kind => DataLoadError::ParseError {
                file: file.to_string(),
                line,
                reason: describe_csv_error(kind),
            },
        }
    }
}

fn describe_csv_error(kind: csv::ErrorKind) -> String {
    match kind {
        csv::ErrorKind::Deserialize { err, .. } => err.to_string(),
        csv::ErrorKind::UnequalLengths {
            expected_len, len, ..
        } => format!("expected {} fields but found {}", expected_len, len),
        csv::ErrorKind::Utf8 { err, .. } => format!("invalid UTF-8: {}", err),
        other => format!("{:?}", other),
    }
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
